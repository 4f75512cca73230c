//! Simulation core of a zombie survival game.
//!
//! Deterministic, single-threaded, tick-driven. The host (renderer, input,
//! physics) supplies player position and per-frame deltas; the core advances
//! zombie behavior, survival meters, crafting, and spawning, and queues
//! events the host renders. No windowing or rendering code lives here.

pub mod config;
pub mod crafting;
pub mod day_night;
pub mod events;
pub mod player;
pub mod spawner;
pub mod state;
pub mod survival;
pub mod update;
pub mod zombie;
pub mod zombie_ai;
