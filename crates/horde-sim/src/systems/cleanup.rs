//! Cleanup system: end-of-tick removal of retired, terminated, dead and collected entities.
//!
//! Removal is always paired with de-registration from the collision registry
//! and a `Detach` event for the renderer.

use hecs::{Entity, World};

use horde_core::components::{Beam, EnemyVitals, Pickup, Projectile, VisualHandle};
use horde_core::events::SimEvent;

use crate::collision::CollisionRegistry;

/// Remove finished entities. Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    registry: &mut CollisionRegistry,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.retired {
            despawn_buffer.push(entity);
        }
    }

    for (entity, beam) in world.query_mut::<&Beam>() {
        if beam.terminated {
            despawn_buffer.push(entity);
        }
    }

    for (entity, pickup) in world.query_mut::<&Pickup>() {
        if pickup.collected {
            despawn_buffer.push(entity);
        }
    }

    // Dead enemies leave the registry right away but keep their visual for the grace period.
    for (entity, vitals) in world.query_mut::<&EnemyVitals>() {
        if vitals.alive {
            continue;
        }
        registry.unregister(entity);
        if vitals.removal_countdown.is_some_and(|t| t <= 0.0) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        registry.unregister(entity);
        if let Ok(handle) = world.get::<&VisualHandle>(entity).map(|h| *h) {
            events.push(SimEvent::Detach { handle });
        }
        let _ = world.despawn(entity);
    }
}

/// Unregister and despawn every non-player entity, emitting `Detach` for each visual.
pub fn clear_all(
    world: &mut World,
    registry: &mut CollisionRegistry,
    keep: Option<Entity>,
    events: &mut Vec<SimEvent>,
) {
    let doomed: Vec<Entity> = world
        .iter()
        .map(|e| e.entity())
        .filter(|e| Some(*e) != keep)
        .collect();

    for entity in doomed {
        registry.unregister(entity);
        if let Ok(handle) = world.get::<&VisualHandle>(entity).map(|h| *h) {
            events.push(SimEvent::Detach { handle });
        }
        let _ = world.despawn(entity);
    }
}
