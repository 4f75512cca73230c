//! Zombie spawning: keeps world-layout spawner sites populated and supports
//! dynamic ring spawns around the player.

use glam::Vec3;
use hecs::World;
use rand::prelude::*;
use sim_core::{AiComponent, AiState, ZombieType};
use worldgen::SpawnerSite;

use crate::zombie::ZombieBundle;

/// Seconds between spawn attempts at a site that is below capacity.
const RESPAWN_INTERVAL: f32 = 2.0;
/// Ring-spawn distance bounds around the player.
const RING_MIN_DISTANCE: f32 = 30.0;
const RING_MAX_DISTANCE: f32 = 130.0;

/// Marks a zombie as belonging to a layout spawner site.
#[derive(Debug, Clone, Copy)]
pub struct SpawnOrigin(pub usize);

/// Keeps every spawner site topped up to its archetype's max count.
pub struct SpawnerSystem {
    /// Per-site countdown until the next spawn attempt.
    timers: Vec<f32>,
    rng: StdRng,
}

impl SpawnerSystem {
    pub fn new(site_count: usize) -> Self {
        Self {
            timers: vec![0.0; site_count],
            rng: StdRng::from_entropy(),
        }
    }

    /// Tick the spawners: each site below capacity spawns one zombie of its
    /// archetype, at an entropy-random point inside its radius, at most once
    /// per interval. Dead zombies do not count toward capacity.
    pub fn update(&mut self, world: &mut World, sites: &[SpawnerSite], dt: f32) {
        debug_assert_eq!(self.timers.len(), sites.len());

        for (i, site) in sites.iter().enumerate() {
            self.timers[i] -= dt;
            if self.timers[i] > 0.0 {
                continue;
            }
            self.timers[i] = RESPAWN_INTERVAL;

            let alive = world
                .query::<(&SpawnOrigin, &AiComponent)>()
                .iter()
                .filter(|(_, (origin, ai))| origin.0 == i && ai.state != AiState::Dead)
                .count();
            if alive as u32 >= site.max_zombies {
                continue;
            }

            let position = self.point_in_radius(site.position, site.radius);
            let entity = ZombieBundle::new(site.zombie_type, position).spawn(world);
            // Cannot fail: the entity was spawned just above.
            let _ = world.insert_one(entity, SpawnOrigin(i));
            log::trace!(
                "spawner {} spawned a {} at {:?} ({}/{} alive)",
                i,
                site.zombie_type.name(),
                position,
                alive + 1,
                site.max_zombies
            );
        }
    }

    /// Spawn `count` zombies of random archetypes on a ring around the
    /// player (the classic horde-pressure spawn).
    pub fn spawn_ring(&mut self, world: &mut World, player_pos: Vec3, count: usize) {
        for _ in 0..count {
            let angle = self.rng.gen::<f32>() * std::f32::consts::TAU;
            let distance =
                RING_MIN_DISTANCE + self.rng.gen::<f32>() * (RING_MAX_DISTANCE - RING_MIN_DISTANCE);
            let position = player_pos + Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance);

            let zombie_type = ZombieType::ALL[self.rng.gen_range(0..ZombieType::ALL.len())];
            ZombieBundle::new(zombie_type, position).spawn(world);
        }
    }

    fn point_in_radius(&mut self, center: Vec3, radius: f32) -> Vec3 {
        let angle = self.rng.gen::<f32>() * std::f32::consts::TAU;
        let distance = self.rng.gen::<f32>() * radius;
        center + Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::Transform;

    use crate::events::EventQueue;
    use crate::zombie::{damage_zombie, Zombie};

    fn site(max_zombies: u32) -> SpawnerSite {
        SpawnerSite {
            position: Vec3::new(100.0, 0.0, 100.0),
            radius: 50.0,
            zombie_type: ZombieType::Walker,
            max_zombies,
        }
    }

    fn alive_count(world: &mut World) -> usize {
        world
            .query::<&AiComponent>()
            .with::<&Zombie>()
            .iter()
            .filter(|(_, ai)| ai.state != AiState::Dead)
            .count()
    }

    #[test]
    fn site_fills_to_capacity_and_stops() {
        let mut world = World::new();
        let sites = [site(3)];
        let mut system = SpawnerSystem::new(1);

        // One spawn per interval; run long enough to fill.
        for _ in 0..10 {
            system.update(&mut world, &sites, RESPAWN_INTERVAL);
        }
        assert_eq!(alive_count(&mut world), 3);
    }

    #[test]
    fn dead_zombies_free_capacity() {
        let mut world = World::new();
        let sites = [site(1)];
        let mut system = SpawnerSystem::new(1);
        let mut events = EventQueue::new();

        system.update(&mut world, &sites, RESPAWN_INTERVAL);
        assert_eq!(alive_count(&mut world), 1);

        let entity = world
            .query::<&Zombie>()
            .iter()
            .next()
            .map(|(e, _)| e)
            .unwrap();
        damage_zombie(&mut world, entity, 1000.0, &mut events);

        system.update(&mut world, &sites, RESPAWN_INTERVAL);
        assert_eq!(alive_count(&mut world), 1);
        // The corpse is still in the world alongside the replacement.
        assert_eq!(world.query::<&Zombie>().iter().count(), 2);
    }

    #[test]
    fn spawned_zombies_stay_inside_the_radius() {
        let mut world = World::new();
        let sites = [site(8)];
        let mut system = SpawnerSystem::new(1);
        for _ in 0..20 {
            system.update(&mut world, &sites, RESPAWN_INTERVAL);
        }

        for (_, transform) in world.query::<&Transform>().with::<&Zombie>().iter() {
            let distance = transform.position.distance(sites[0].position);
            assert!(distance <= 50.0 + 1e-3, "spawned {} units out", distance);
        }
    }

    #[test]
    fn ring_spawn_respects_distance_band() {
        let mut world = World::new();
        let mut system = SpawnerSystem::new(0);
        let player_pos = Vec3::new(256.0, 0.0, 256.0);

        system.spawn_ring(&mut world, player_pos, 10);

        let mut count = 0;
        for (_, transform) in world.query::<&Transform>().with::<&Zombie>().iter() {
            let distance = transform.position.distance(player_pos);
            assert!(distance >= RING_MIN_DISTANCE - 1e-3 && distance <= RING_MAX_DISTANCE + 1e-3);
            count += 1;
        }
        assert_eq!(count, 10);
    }
}
