//! Enemy movement state machine.
//!
//! Pure functions that compute the next position, movement state and pose
//! for one enemy based on its pattern and where the player is. Only the
//! movement step differs between patterns; the damage contract is shared.

use std::f32::consts::PI;

use glam::Vec2;

use horde_core::components::{HopState, MovementState, Pose};
use horde_core::enums::{HopPhase, MovementPattern};

use crate::profiles::{get_profile, MovementProfile};

/// Input to the movement step for a single enemy.
pub struct MovementContext {
    pub state: MovementState,
    pub position: Vec2,
    pub player: Vec2,
    pub speed: f32,
    /// Mirror flag from the previous tick, kept when there is no horizontal motion.
    pub flip_x: bool,
    pub dt: f32,
}

/// Output from the movement step.
pub struct MovementUpdate {
    pub position: Vec2,
    pub state: MovementState,
    pub pose: Pose,
}

/// Evaluate one movement step.
pub fn evaluate(ctx: &MovementContext) -> MovementUpdate {
    let profile = get_profile(ctx.state.pattern);

    match ctx.state.pattern {
        MovementPattern::Seek => evaluate_seek(ctx, &profile),
        MovementPattern::Hop => evaluate_hop(ctx, &profile),
    }
}

fn evaluate_seek(ctx: &MovementContext, profile: &MovementProfile) -> MovementUpdate {
    let to_player = ctx.player - ctx.position;
    let distance = to_player.length();

    let Some(dir) = to_player.try_normalize() else {
        return MovementUpdate {
            position: ctx.position,
            state: ctx.state,
            pose: Pose {
                flip_x: ctx.flip_x,
                ..Pose::default()
            },
        };
    };

    // Don't overshoot the player on a long frame.
    let step = (ctx.speed * profile.speed_factor * ctx.dt).min(distance);
    let delta = dir * step;

    MovementUpdate {
        position: ctx.position + delta,
        state: ctx.state,
        pose: Pose {
            flip_x: facing(delta.x, ctx.flip_x),
            ..Pose::default()
        },
    }
}

fn evaluate_hop(ctx: &MovementContext, profile: &MovementProfile) -> MovementUpdate {
    let mut hop = ctx.state.hop;
    let mut position = ctx.position;
    let mut flip_x = ctx.flip_x;
    let mut lift = 0.0;
    let mut stretch = 1.0;

    hop.landing_remaining = (hop.landing_remaining - ctx.dt).max(0.0);

    match hop.phase {
        HopPhase::Idle => {
            hop.phase_elapsed += ctx.dt;
            if hop.phase_elapsed >= profile.idle_secs {
                // Capture the direction at takeoff; the hop does not steer mid-air.
                if let Some(dir) = (ctx.player - ctx.position).try_normalize() {
                    hop = HopState {
                        phase: HopPhase::Airborne,
                        phase_elapsed: 0.0,
                        dir_x: dir.x,
                        dir_y: dir.y,
                        landing_remaining: hop.landing_remaining,
                    };
                    flip_x = facing(dir.x, flip_x);
                }
            }
        }
        HopPhase::Airborne => {
            let remaining_air = (profile.airborne_secs - hop.phase_elapsed).max(0.0);
            let step_secs = ctx.dt.min(remaining_air);
            let dir = Vec2::new(hop.dir_x, hop.dir_y);
            position += dir * ctx.speed * profile.speed_factor * step_secs;
            hop.phase_elapsed += ctx.dt;
            flip_x = facing(dir.x, flip_x);

            let progress = (hop.phase_elapsed / profile.airborne_secs).clamp(0.0, 1.0);
            if progress >= 1.0 {
                hop.phase = HopPhase::Idle;
                hop.phase_elapsed = 0.0;
                hop.landing_remaining = profile.landing_secs;
            } else {
                let arc = (progress * PI).sin();
                lift = arc * profile.arc_height;
                stretch = 1.0 + 0.1 * arc;
            }
        }
    }

    let (scale_x, scale_y) = if hop.landing_remaining > 0.0 && profile.landing_secs > 0.0 {
        // Squash eases back to 1.0 over the landing window.
        let t = hop.landing_remaining / profile.landing_secs;
        let sx = 1.0 + (profile.landing_squash - 1.0) * t;
        (sx, 1.0 / sx)
    } else {
        (1.0 / stretch, stretch)
    };

    MovementUpdate {
        position,
        state: MovementState {
            pattern: ctx.state.pattern,
            hop,
        },
        pose: Pose {
            flip_x,
            scale_x,
            scale_y,
            lift,
            rotation: 0.0,
        },
    }
}

/// Mirror horizontally when moving left; keep the previous flag with no horizontal motion.
fn facing(dx: f32, previous: bool) -> bool {
    if dx < 0.0 {
        true
    } else if dx > 0.0 {
        false
    } else {
        previous
    }
}
