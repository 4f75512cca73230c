//! Zombie behavior state machine: detection, pursuit, attack.
//!
//! Direct-line pursuit: the path is a single waypoint at the player's last
//! known position, recomputed at most twice a second of sim time. Buildings
//! are passed in as obstacles but routing does not avoid them yet.

use glam::Vec3;
use hecs::{Entity, World};
use sim_core::{AiComponent, AiState, Transform, Velocity};
use worldgen::Building;

use crate::events::{EventQueue, SimEvent};
use crate::zombie::Zombie;

/// Seconds of sim time between path recomputes.
const PATH_RECOMPUTE_INTERVAL: f64 = 0.5;
/// A waypoint closer than this is considered reached and dropped.
const WAYPOINT_REACHED: f32 = 2.0;
/// Pursuit velocity is archetype speed times this factor.
const PURSUIT_SPEED_FACTOR: f32 = 5.0;
/// Per-tick velocity damping while idle.
const IDLE_DAMPING: f32 = 0.9;

/// Advance every zombie one tick. Returns the total Attacking-state damage
/// owed to the player this tick; the driver applies it (and the separate
/// contact hit) to the player's health.
pub fn update_zombies(
    world: &mut World,
    player: Entity,
    player_pos: Vec3,
    now: f64,
    dt: f32,
    obstacles: &[Building],
    events: &mut EventQueue,
) -> f32 {
    // Pursuit is a straight line to the waypoint; obstacles are unused.
    let _ = obstacles;

    let mut attack_damage = 0.0;

    for (entity, (transform, velocity, zombie, ai)) in
        world.query_mut::<(&mut Transform, &mut Velocity, &Zombie, &mut AiComponent)>()
    {
        if ai.state == AiState::Dead {
            velocity.linear = Vec3::ZERO;
            continue;
        }

        let distance = transform.distance_to(player_pos);
        let previous = ai.state;

        if distance < zombie.sight_range {
            ai.target = Some(player);
            ai.state = if distance < zombie.attack_range {
                AiState::Attacking
            } else {
                AiState::Pursuing
            };

            // Throttled recompute: one waypoint at the player's position.
            // Purely time-based; a freshly dropped waypoint stays dropped
            // until the interval elapses.
            if ai.path_is_stale(now, PATH_RECOMPUTE_INTERVAL) {
                ai.path = vec![player_pos];
                ai.last_path_update = now;
            }

            // Advance along the path.
            if let Some(&waypoint) = ai.path.first() {
                let direction = (waypoint - transform.position).normalize_or_zero();
                velocity.linear = direction * zombie.speed * PURSUIT_SPEED_FACTOR;
                transform.translate(velocity.linear * dt);
                transform.face_toward(velocity.linear);

                if transform.distance_to(waypoint) < WAYPOINT_REACHED {
                    ai.path.remove(0);
                }
            }

            // Continuous damage-per-second while in attack range, evaluated
            // independently of the path update; both can apply in one tick.
            if distance < zombie.attack_range {
                attack_damage += zombie.damage * dt;
            }
        } else {
            ai.state = AiState::Idle;
            ai.target = None;
            velocity.linear *= IDLE_DAMPING;
        }

        if previous != ai.state {
            events.push(SimEvent::ZombieStateChanged {
                entity,
                from: previous,
                to: ai.state,
            });
        }
    }

    attack_damage
}
