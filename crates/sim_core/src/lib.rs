//! Core simulation types for openhorde.
//!
//! This crate provides the foundational types shared by all simulation systems:
//! - Transform and spatial components
//! - Tick clock (host-driven delta time)
//! - Common component types for ECS

pub mod components;
pub mod time;
pub mod transform;

pub use components::*;
pub use time::*;
pub use transform::*;

// Re-export commonly used types
pub use glam::{Vec2, Vec3};
pub use hecs::{Entity, World};
