//! Projectile kinematics: straight-line integration, visual spin and lifetime.

use glam::Vec2;
use hecs::World;

use horde_core::components::{Pose, Projectile, VisualHandle};
use horde_core::constants::PROJECTILE_CULL_DISTANCE;
use horde_core::events::SimEvent;
use horde_core::types::{Position, Velocity};

/// Integrate every live projectile by `dt` and expire the ones past their lifetime.
///
/// Projectiles that wander further than the cull distance from the player
/// expire too, so a stray radial shot cannot outlive the arena.
pub fn run(world: &mut World, player: Vec2, dt: f32, events: &mut Vec<SimEvent>) {
    let cull_sq = PROJECTILE_CULL_DISTANCE * PROJECTILE_CULL_DISTANCE;

    for (_entity, (pos, vel, projectile, pose, handle)) in world.query_mut::<(
        &mut Position,
        &Velocity,
        &mut Projectile,
        &mut Pose,
        &VisualHandle,
    )>() {
        if projectile.retired {
            continue;
        }

        pos.x += vel.x * dt;
        pos.y += vel.y * dt;
        projectile.age += dt;

        pose.rotation = if projectile.spin_rate != 0.0 {
            pose.rotation + projectile.spin_rate * dt
        } else {
            vel.heading()
        };

        let out_of_range = pos.to_vec2().distance_squared(player) > cull_sq;
        if projectile.age >= projectile.lifetime || out_of_range {
            projectile.retired = true;
            events.push(SimEvent::ProjectileExpired { handle: *handle });
        }
    }
}

/// Record a hit on a projectile. Returns true when the pierce budget is exhausted
/// and the projectile was destroyed by this hit.
pub fn register_hit(projectile: &mut Projectile) -> bool {
    projectile.pierce_remaining -= 1;
    if projectile.pierce_remaining < 0 {
        projectile.retired = true;
        true
    } else {
        false
    }
}
