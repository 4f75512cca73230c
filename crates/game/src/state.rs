//! Aggregate simulation state: the ECS world, the player, and the engines.

use anyhow::Context;
use glam::Vec3;
use hecs::{Entity, World};
use sim_core::{Player, SimClock, Transform};
use worldgen::{WorldGenerator, WorldLayout};

use crate::config::SimConfig;
use crate::crafting::CraftingEngine;
use crate::day_night::DayNightCycle;
use crate::events::{EventQueue, SimEvent};
use crate::player::PlayerState;
use crate::spawner::SpawnerSystem;

pub struct SimState {
    pub config: SimConfig,
    pub layout: WorldLayout,
    pub world: World,
    /// Handle to the player's marker entity, the weak reference zombies
    /// record as their target.
    pub player_entity: Entity,
    pub player: PlayerState,
    pub crafting: CraftingEngine,
    pub day_night: DayNightCycle,
    pub spawners: SpawnerSystem,
    pub clock: SimClock,
    pub events: EventQueue,
    /// Parallel to `layout.loot_sites`; true once a site has been collected.
    pub looted: Vec<bool>,
    /// Latched once the player's health reaches zero.
    pub player_died: bool,
}

impl SimState {
    /// Generate the world and bootstrap the simulation.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        let layout = WorldGenerator::new()
            .generate(config.world_width, config.world_height, config.seed)
            .context("world generation failed")?;

        log::info!(
            "world ready: {} buildings, {} loot sites, {} spawners (seed {})",
            layout.buildings.len(),
            layout.loot_sites.len(),
            layout.spawners.len(),
            config.seed
        );

        let mut world = World::new();
        let start = Vec3::new(
            config.world_width as f32 / 2.0,
            0.0,
            config.world_height as f32 / 2.0,
        );
        let player_entity = world.spawn((Player, Transform::from_position(start)));
        let player = PlayerState::new(start);

        let looted = vec![false; layout.loot_sites.len()];
        let mut spawners = SpawnerSystem::new(layout.spawners.len());
        spawners.spawn_ring(&mut world, player.position, config.initial_zombies);

        let mut clock = SimClock::new();
        clock.set_fixed_rate(config.tick_rate_hz);

        Ok(Self {
            config,
            layout,
            world,
            player_entity,
            player,
            crafting: CraftingEngine::new(),
            day_night: DayNightCycle::default(),
            spawners,
            clock,
            events: EventQueue::new(),
            looted,
            player_died: false,
        })
    }

    /// Craft a recipe against the player's inventory. Unknown ids and
    /// missing ingredients are normal `false` outcomes.
    pub fn craft(&mut self, recipe_id: &str) -> bool {
        let Some(recipe) = self.crafting.get_recipe(recipe_id) else {
            return false;
        };
        if self.crafting.craft(recipe, &mut self.player.inventory) {
            self.events.push(SimEvent::Crafted { recipe_id: recipe.id });
            true
        } else {
            false
        }
    }
}
