//! Procedural world generation: buildings, loot, zombie spawners, terrain.

pub mod layout;
pub mod rng;

pub use layout::*;
pub use rng::*;
