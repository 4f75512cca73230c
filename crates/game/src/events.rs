//! Side effects the simulation emits to its collaborators.
//!
//! The core never calls into the renderer or UI; it queues events the host
//! drains once per tick (mesh visibility toggles, HUD hits, sounds).

use hecs::Entity;
use sim_core::{AiState, ZombieType};
use worldgen::LootType;

/// Where player damage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    /// Attacking-state continuous damage.
    Attack,
    /// Flat contact hit applied by the tick driver.
    Contact,
}

/// One simulation event for the render/UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum SimEvent {
    PlayerDamaged {
        amount: f32,
        source: DamageSource,
    },
    PlayerDied,
    ZombieStateChanged {
        entity: Entity,
        from: AiState,
        to: AiState,
    },
    /// Health hit zero; the entity stays in the world until the host prunes it.
    ZombieDied {
        entity: Entity,
        zombie_type: ZombieType,
    },
    Crafted {
        recipe_id: &'static str,
    },
    /// The player walked over a loot site; the host removes its mesh.
    LootPickedUp {
        /// Index into `WorldLayout::loot_sites`.
        site: usize,
        loot_type: LootType,
    },
}

/// Per-tick event queue, drained by the host after each tick.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<SimEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SimEvent) {
        self.events.push(event);
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
