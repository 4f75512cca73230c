//! Survival meters: hunger, thirst, infection, fatigue.
//!
//! Continuous-valued state with threshold-triggered health effects. Update
//! order within a tick is fixed: hunger/thirst decay and their penalties,
//! then infection growth and its death check, then fatigue recovery, then
//! the final clamp. Infection is excluded from the clamp; values at or
//! above 100 are the death sentinel.

use sim_core::Health;

/// How fast hunger drains, points per second.
const HUNGER_DECAY: f32 = 0.5;
/// How fast thirst drains, points per second.
const THIRST_DECAY: f32 = 1.0;
/// Infection growth while any infection is present, points per second.
const INFECTION_GROWTH: f32 = 0.1;
/// Fatigue recovery while not sprinting, points per second.
const FATIGUE_RECOVERY: f32 = 10.0;

/// Per-entity survival meters, all in [0, 100] except infection (see above).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurvivalState {
    pub hunger: f32,
    pub thirst: f32,
    pub infection: f32,
    pub fatigue: f32,
}

impl Default for SurvivalState {
    fn default() -> Self {
        Self {
            hunger: 50.0,
            thirst: 50.0,
            infection: 0.0,
            fatigue: 0.0,
        }
    }
}

impl SurvivalState {
    /// Advance the meters by `delta` seconds, applying health penalties to
    /// the owning entity.
    pub fn update(&mut self, health: &mut Health, is_sprinting: bool, delta: f32) {
        // Hunger drains; starving costs 1 HP/s.
        self.hunger = (self.hunger - HUNGER_DECAY * delta).max(0.0);
        if self.hunger == 0.0 {
            health.take_damage(1.0 * delta);
        }

        // Thirst drains faster; dehydration costs 2 HP/s, stacking with hunger.
        self.thirst = (self.thirst - THIRST_DECAY * delta).max(0.0);
        if self.thirst == 0.0 {
            health.take_damage(2.0 * delta);
        }

        // Any infection grows and bleeds 10 HP/s; crossing 100 is lethal
        // outright, regardless of concurrent healing.
        if self.infection > 0.0 {
            self.infection += INFECTION_GROWTH * delta;
            health.take_damage(10.0 * delta);
            if self.infection >= 100.0 {
                health.current = 0.0;
            }
        }

        // Fatigue recovers while the entity is not sprinting.
        if !is_sprinting {
            self.fatigue = (self.fatigue - FATIGUE_RECOVERY * delta).max(0.0);
        }

        // Final clamp. Infection stays unclamped as the death sentinel.
        self.hunger = self.hunger.min(100.0);
        self.thirst = self.thirst.min(100.0);
        self.fatigue = self.fatigue.min(100.0);
    }

    /// Consume a food item. The effect comes from a fixed per-food table;
    /// the `amount` parameter is accepted for interface compatibility but
    /// does not scale the deltas.
    pub fn eat(&mut self, food_type: &str, amount: u32) {
        let _ = amount;
        let (hunger_delta, thirst_delta) = food_values(food_type);
        self.hunger = (self.hunger + hunger_delta).clamp(0.0, 100.0);
        self.thirst = (self.thirst + thirst_delta).clamp(0.0, 100.0);
    }

    /// Apply a medicine. Only antibiotics treat infection; anything else is
    /// a no-op.
    pub fn heal_infection(&mut self, medicine_type: &str) {
        if medicine_type == "antibiotics" {
            self.infection = (self.infection - 50.0).max(0.0);
        }
    }

    /// Add infection (zombie bite, contaminated food). Unclamped upward;
    /// the next update tick reads values >= 100 as death.
    pub fn add_infection(&mut self, amount: f32) {
        self.infection += amount;
    }

    /// Apply the default infection dose.
    pub fn infect(&mut self) {
        self.add_infection(30.0);
    }
}

/// (hunger, thirst) deltas per food type. Unknown types default to a plain
/// +20 hunger meal.
fn food_values(food_type: &str) -> (f32, f32) {
    match food_type {
        "canned_food" => (30.0, -5.0),
        "meat" => (40.0, 0.0),
        "water" => (0.0, 50.0),
        "coffee" => (-5.0, 20.0),
        "beer" => (10.0, 15.0),
        _ => (20.0, 0.0),
    }
}
