//! Per-tick simulation advancement.
//!
//! One call to [`tick`] is one simulation step: survival meters, day/night,
//! zombie behavior, driver-side contact damage, loot pickup, then spawner
//! upkeep. All work completes within the tick; nothing blocks or suspends.

use sim_core::{AiComponent, AiState, Transform};

use crate::events::{DamageSource, SimEvent};
use crate::state::SimState;
use crate::zombie::Zombie;
use crate::zombie_ai::update_zombies;

/// Zombie-player distance below which the driver applies a contact hit.
const CONTACT_DISTANCE: f32 = 2.0;
/// Flat damage of one contact hit. Applies per tick the overlap holds, on
/// top of any Attacking-state damage.
const CONTACT_DAMAGE: f32 = 5.0;
/// Player-loot distance below which a loot site is collected.
const PICKUP_DISTANCE: f32 = 1.5;
/// Item every loot site yields (one per site).
const PICKUP_ITEM: &str = "resource";

/// Run one simulation step of `delta` seconds.
pub fn tick(state: &mut SimState, delta: f32) {
    state.clock.advance(delta);
    let now = state.clock.elapsed_seconds();

    // The player's marker entity mirrors the externally-written position.
    if let Ok(mut transform) = state.world.get::<&mut Transform>(state.player_entity) {
        transform.position = state.player.position;
    }

    // Survival meters and their health penalties.
    let sprinting = state.player.is_sprinting;
    state
        .player
        .survival
        .update(&mut state.player.health, sprinting, delta);

    // Day/night shares the tick contract (consumed by the render layer).
    state.day_night.update(now as f32);

    // Zombie behavior: detection, pursuit, attack DPS.
    let attack_damage = update_zombies(
        &mut state.world,
        state.player_entity,
        state.player.position,
        now,
        delta,
        &state.layout.buildings,
        &mut state.events,
    );
    if attack_damage > 0.0 {
        state.player.take_damage(attack_damage);
        state.events.push(SimEvent::PlayerDamaged {
            amount: attack_damage,
            source: DamageSource::Attack,
        });
    }

    // Contact hits are the driver's job, not the zombie's, and stack with
    // the attack damage above: one flat hit per overlapping zombie.
    let player_pos = state.player.position;
    let contacts = state
        .world
        .query::<(&Transform, &AiComponent)>()
        .with::<&Zombie>()
        .iter()
        .filter(|(_, (transform, ai))| {
            ai.state != AiState::Dead && transform.distance_to(player_pos) < CONTACT_DISTANCE
        })
        .count();
    if contacts > 0 {
        state.player.take_damage(CONTACT_DAMAGE * contacts as f32);
        for _ in 0..contacts {
            state.events.push(SimEvent::PlayerDamaged {
                amount: CONTACT_DAMAGE,
                source: DamageSource::Contact,
            });
        }
    }

    // Loot pickup: sites within reach are consumed into the inventory.
    for (i, site) in state.layout.loot_sites.iter().enumerate() {
        if !state.looted[i] && site.position.distance(player_pos) < PICKUP_DISTANCE {
            state.looted[i] = true;
            state.player.inventory.add(PICKUP_ITEM, 1);
            state.events.push(SimEvent::LootPickedUp {
                site: i,
                loot_type: site.loot_type,
            });
        }
    }

    // Keep spawner sites topped up.
    state
        .spawners
        .update(&mut state.world, &state.layout.spawners, delta);

    // Death is latched once; further ticks are idempotent at zero health.
    if state.player.is_dead() && !state.player_died {
        state.player_died = true;
        state.events.push(SimEvent::PlayerDied);
        log::info!("player died at t={:.1}s", now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use sim_core::ZombieType;

    use crate::config::SimConfig;
    use crate::zombie::ZombieBundle;

    fn quiet_state() -> SimState {
        // No initial horde and a tiny map so nothing interferes with the
        // hand-placed zombies below. A 40x40 map has too few buildings for
        // any spawner site, so the spawner pass is a no-op.
        SimState::new(SimConfig {
            world_width: 40,
            world_height: 40,
            initial_zombies: 0,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn contact_hit_stacks_with_attack_damage() {
        let mut state = quiet_state();
        // Walker: attack range 1.5, damage 5. One unit away triggers both
        // the attack DPS and the driver's flat contact hit.
        ZombieBundle::new(
            ZombieType::Walker,
            state.player.position + Vec3::new(1.0, 0.0, 0.0),
        )
        .spawn(&mut state.world);

        tick(&mut state, 0.1);

        // 5 dmg/s * 0.1 s attack + flat 5 contact.
        assert!((state.player.health.current - (100.0 - 0.5 - 5.0)).abs() < 1e-3);
        let events = state.events.drain();
        assert!(events.iter().any(|e| matches!(
            e,
            SimEvent::PlayerDamaged { source: DamageSource::Attack, .. }
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            SimEvent::PlayerDamaged { source: DamageSource::Contact, .. }
        )));
    }

    #[test]
    fn each_overlapping_zombie_lands_its_own_contact_hit() {
        let mut state = quiet_state();
        for offset in [Vec3::new(1.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0)] {
            ZombieBundle::new(ZombieType::Walker, state.player.position + offset)
                .spawn(&mut state.world);
        }

        tick(&mut state, 0.1);

        // Two attack DPS shares (5 dmg/s * 0.1 s each) plus two flat hits.
        assert!((state.player.health.current - (100.0 - 1.0 - 10.0)).abs() < 1e-3);
        let contact_events = state
            .events
            .drain()
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    SimEvent::PlayerDamaged { source: DamageSource::Contact, .. }
                )
            })
            .count();
        assert_eq!(contact_events, 2);
    }

    #[test]
    fn loot_within_reach_is_collected_once() {
        let mut state = quiet_state();
        assert!(!state.layout.loot_sites.is_empty());
        state.player.position = state.layout.loot_sites[0].position;

        tick(&mut state, 0.1);
        let picked = state.player.inventory.count("resource");
        assert!(picked >= 1);
        let events = state.events.drain();
        assert!(events.iter().any(|e| matches!(
            e,
            SimEvent::LootPickedUp { site: 0, loot_type }
                if *loot_type == state.layout.loot_sites[0].loot_type
        )));

        // Consumed sites stay consumed.
        tick(&mut state, 0.1);
        assert_eq!(state.player.inventory.count("resource"), picked);
        assert!(!state
            .events
            .drain()
            .iter()
            .any(|e| matches!(e, SimEvent::LootPickedUp { .. })));
    }

    #[test]
    fn distant_zombie_leaves_player_untouched() {
        let mut state = quiet_state();
        ZombieBundle::new(
            ZombieType::Walker,
            state.player.position + Vec3::new(100.0, 0.0, 0.0),
        )
        .spawn(&mut state.world);

        tick(&mut state, 0.1);
        assert_eq!(state.player.health.current, 100.0);
        assert!(!state.player_died);
    }

    #[test]
    fn lethal_infection_latches_death_once() {
        let mut state = quiet_state();
        state.player.survival.add_infection(120.0);

        tick(&mut state, 0.1);
        assert!(state.player.is_dead());
        assert!(state.player_died);
        let first = state.events.drain();
        assert_eq!(
            first.iter().filter(|e| **e == SimEvent::PlayerDied).count(),
            1
        );

        tick(&mut state, 0.1);
        assert!(!state.events.drain().contains(&SimEvent::PlayerDied));
    }

    #[test]
    fn tick_advances_clock_and_day_cycle() {
        let mut state = quiet_state();
        for _ in 0..50 {
            tick(&mut state, 0.1);
        }
        assert_eq!(state.clock.frame_count(), 50);
        assert!((state.clock.elapsed_seconds() - 5.0).abs() < 1e-6);
        // 5 s into a 20 s day = progress 0.25.
        assert!((state.day_night.day_progress() - 0.25).abs() < 1e-4);
    }
}
