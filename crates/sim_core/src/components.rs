//! Common ECS components used across the simulation.

use glam::Vec3;

/// Velocity component for moving entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Velocity {
    pub linear: Vec3,
}

impl Velocity {
    pub fn new(linear: Vec3) -> Self {
        Self { linear }
    }
}

/// Health component for damageable entities.
#[derive(Debug, Clone, Copy)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }

    pub fn heal(&mut self, amount: f32) {
        self.current = (self.current + amount).min(self.max);
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percentage(&self) -> f32 {
        self.current / self.max
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}

/// Tag component for the player entity.
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// Zombie archetypes. Stats are resolved from a fixed per-type table at
/// spawn time (see the game crate); world generation tags spawner sites
/// with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZombieType {
    /// Slow standard shambler.
    Walker,
    /// Fast but fragile sprinter.
    Runner,
    /// Armored, hits hard at range.
    Cop,
    /// Ranged acid spitter with long sight.
    Spitter,
    /// Fast heavy bruiser.
    Smutki,
}

impl ZombieType {
    pub const ALL: [ZombieType; 5] = [
        ZombieType::Walker,
        ZombieType::Runner,
        ZombieType::Cop,
        ZombieType::Spitter,
        ZombieType::Smutki,
    ];

    /// Archetype for a spawner index (cycles through all five types).
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZombieType::Walker => "walker",
            ZombieType::Runner => "runner",
            ZombieType::Cop => "cop",
            ZombieType::Spitter => "spitter",
            ZombieType::Smutki => "smutki",
        }
    }
}

/// AI state for zombies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AiState {
    #[default]
    Idle,
    Pursuing,
    Attacking,
    Dead,
}

/// Component storing per-zombie AI behavior state.
///
/// The target is a plain entity handle, never an ownership edge: the zombie
/// looks the player up each tick and must not keep the player alive.
#[derive(Debug, Clone)]
pub struct AiComponent {
    pub state: AiState,
    pub target: Option<hecs::Entity>,
    /// Waypoints toward the target; direct-line pursuit uses a single entry.
    pub path: Vec<Vec3>,
    /// Sim-clock time of the last path recompute (seconds since start).
    /// Starts at negative infinity so the first staleness check passes.
    pub last_path_update: f64,
}

impl Default for AiComponent {
    fn default() -> Self {
        Self {
            state: AiState::default(),
            target: None,
            path: Vec::new(),
            last_path_update: f64::NEG_INFINITY,
        }
    }
}

impl AiComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether enough sim time has passed to recompute the path.
    pub fn path_is_stale(&self, now: f64, interval: f64) -> bool {
        now - self.last_path_update >= interval
    }
}
