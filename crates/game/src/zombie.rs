//! Zombie components and spawning.

use glam::Vec3;
use hecs::{Entity, World};
use sim_core::{AiComponent, AiState, Health, Transform, Velocity, ZombieType};

use crate::events::{EventQueue, SimEvent};

/// Zombie stats, resolved from the fixed archetype table at spawn.
#[derive(Debug, Clone, Copy)]
pub struct Zombie {
    pub zombie_type: ZombieType,
    pub speed: f32,
    pub damage: f32,
    pub attack_range: f32,
    pub sight_range: f32,
}

impl Zombie {
    pub fn new(zombie_type: ZombieType) -> Self {
        let (speed, damage, attack_range, sight_range) = match zombie_type {
            ZombieType::Walker => (2.0, 5.0, 1.5, 30.0),
            ZombieType::Runner => (5.0, 8.0, 1.5, 40.0),
            ZombieType::Cop => (2.5, 15.0, 20.0, 35.0),
            ZombieType::Spitter => (2.0, 12.0, 25.0, 50.0),
            ZombieType::Smutki => (6.0, 10.0, 1.5, 45.0),
        };

        Self {
            zombie_type,
            speed,
            damage,
            attack_range,
            sight_range,
        }
    }

    /// Max health for this archetype.
    pub fn max_health(zombie_type: ZombieType) -> f32 {
        match zombie_type {
            ZombieType::Walker => 50.0,
            ZombieType::Runner => 30.0,
            ZombieType::Cop => 100.0,
            ZombieType::Spitter => 40.0,
            ZombieType::Smutki => 80.0,
        }
    }
}

/// Bundle of components for spawning a zombie.
pub struct ZombieBundle {
    pub transform: Transform,
    pub velocity: Velocity,
    pub health: Health,
    pub zombie: Zombie,
    pub ai: AiComponent,
}

impl ZombieBundle {
    pub fn new(zombie_type: ZombieType, position: Vec3) -> Self {
        Self {
            transform: Transform::from_position(position),
            velocity: Velocity::default(),
            health: Health::new(Zombie::max_health(zombie_type)),
            zombie: Zombie::new(zombie_type),
            ai: AiComponent::new(),
        }
    }

    /// Spawn into the ECS world.
    pub fn spawn(self, world: &mut World) -> Entity {
        world.spawn((
            self.transform,
            self.velocity,
            self.health,
            self.zombie,
            self.ai,
        ))
    }
}

/// Apply damage to a zombie. On reaching zero health the zombie transitions
/// to Dead (velocity zeroed, no further behavior) but stays in the world;
/// pruning the entity is the host's call. Returns true if the hit killed it.
pub fn damage_zombie(
    world: &mut World,
    entity: Entity,
    amount: f32,
    events: &mut EventQueue,
) -> bool {
    let Ok(mut query) = world.query_one::<(&mut Health, &mut Velocity, &Zombie, &mut AiComponent)>(entity)
    else {
        return false;
    };
    let Some((health, velocity, zombie, ai)) = query.get() else {
        return false;
    };

    health.take_damage(amount);
    if health.is_dead() && ai.state != AiState::Dead {
        let from = ai.state;
        ai.state = AiState::Dead;
        ai.target = None;
        ai.path.clear();
        velocity.linear = Vec3::ZERO;
        events.push(SimEvent::ZombieStateChanged {
            entity,
            from,
            to: AiState::Dead,
        });
        events.push(SimEvent::ZombieDied {
            entity,
            zombie_type: zombie.zombie_type,
        });
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archetype_table_matches_stat_template() {
        let cop = Zombie::new(ZombieType::Cop);
        assert_eq!(cop.speed, 2.5);
        assert_eq!(cop.damage, 15.0);
        assert_eq!(cop.attack_range, 20.0);
        assert_eq!(cop.sight_range, 35.0);
        assert_eq!(Zombie::max_health(ZombieType::Cop), 100.0);

        let runner = Zombie::new(ZombieType::Runner);
        assert_eq!(runner.speed, 5.0);
        assert_eq!(Zombie::max_health(ZombieType::Runner), 30.0);
    }

    #[test]
    fn lethal_damage_transitions_to_dead_once() {
        let mut world = World::new();
        let mut events = EventQueue::new();
        let entity = ZombieBundle::new(ZombieType::Walker, Vec3::ZERO).spawn(&mut world);

        assert!(!damage_zombie(&mut world, entity, 20.0, &mut events));
        assert!(events.is_empty());

        assert!(damage_zombie(&mut world, entity, 40.0, &mut events));
        let drained = events.drain();
        assert!(drained
            .iter()
            .any(|e| matches!(e, SimEvent::ZombieDied { zombie_type, .. } if *zombie_type == ZombieType::Walker)));

        // Already dead: no second death event, entity still present.
        assert!(!damage_zombie(&mut world, entity, 40.0, &mut events));
        assert!(events.is_empty());
        assert!(world.contains(entity));
        let ai = world.get::<&AiComponent>(entity).unwrap();
        assert_eq!(ai.state, AiState::Dead);
    }
}
