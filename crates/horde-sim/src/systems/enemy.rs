//! Enemy update system: movement strategies, death countdowns and player
//! invulnerability.

use glam::Vec2;
use hecs::World;

use horde_core::components::{EnemyStats, EnemyVitals, MovementState, PlayerVitals, Pose};
use horde_core::types::Position;

use horde_ai::movement::{evaluate, MovementContext};
use horde_ai::vitals::tick_removal;

/// Move every live enemy toward `player` and advance dying enemies' countdowns.
/// Dead enemies do not move; cleanup removes them once the countdown runs out.
pub fn run(world: &mut World, player: Vec2, dt: f32) {
    for (_entity, (pos, stats, vitals, movement, pose)) in world.query_mut::<(
        &mut Position,
        &EnemyStats,
        &mut EnemyVitals,
        &mut MovementState,
        &mut Pose,
    )>() {
        if !vitals.alive {
            tick_removal(vitals, dt);
            continue;
        }

        let update = evaluate(&MovementContext {
            state: *movement,
            position: pos.to_vec2(),
            player,
            speed: stats.speed,
            flip_x: pose.flip_x,
            dt,
        });

        *pos = Position::from(update.position);
        *movement = update.state;
        *pose = update.pose;
    }
}

/// Count down the player's post-hit invulnerability.
pub fn tick_player(world: &mut World, dt: f32) {
    for (_entity, vitals) in world.query_mut::<&mut PlayerVitals>() {
        vitals.invulnerable_secs = (vitals.invulnerable_secs - dt).max(0.0);
    }
}
