//! Player state the simulation core mutates.
//!
//! Position is written by the external input/physics collaborators; the core
//! reads it and mutates health, survival meters, and inventory.

use glam::Vec3;
use sim_core::Health;

use crate::crafting::Inventory;
use crate::survival::SurvivalState;

pub struct PlayerState {
    pub position: Vec3,
    pub health: Health,
    /// Set by the input collaborator; gates fatigue recovery.
    pub is_sprinting: bool,
    pub inventory: Inventory,
    pub survival: SurvivalState,
}

impl PlayerState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            health: Health::new(100.0),
            is_sprinting: false,
            inventory: Inventory::new(),
            survival: SurvivalState::default(),
        }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health.take_damage(amount);
    }

    pub fn heal(&mut self, amount: f32) {
        self.health.heal(amount);
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }
}
