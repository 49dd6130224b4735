//! Pattern-specific movement profiles.
//!
//! Consolidates per-pattern tuning for the movement state machine.

use horde_core::enums::MovementPattern;

/// Movement tuning for a pattern.
pub struct MovementProfile {
    /// Ground speed multiplier while moving.
    pub speed_factor: f32,
    /// Rest time between hops (seconds), 0 for continuous movers.
    pub idle_secs: f32,
    /// Time airborne per hop (seconds), 0 for continuous movers.
    pub airborne_secs: f32,
    /// Peak visual lift of a hop (pixels).
    pub arc_height: f32,
    /// Landing squash duration (seconds).
    pub landing_secs: f32,
    /// Horizontal stretch at touchdown.
    pub landing_squash: f32,
}

/// Get the movement profile for a given pattern.
pub fn get_profile(pattern: MovementPattern) -> MovementProfile {
    use horde_core::constants::*;

    match pattern {
        MovementPattern::Seek => MovementProfile {
            speed_factor: 1.0,
            idle_secs: 0.0,
            airborne_secs: 0.0,
            arc_height: 0.0,
            landing_secs: 0.0,
            landing_squash: 1.0,
        },
        MovementPattern::Hop => MovementProfile {
            speed_factor: HOP_SPEED_FACTOR,
            idle_secs: HOP_IDLE_SECS,
            airborne_secs: HOP_AIRBORNE_SECS,
            arc_height: HOP_ARC_HEIGHT,
            landing_secs: HOP_LANDING_SECS,
            landing_squash: HOP_LANDING_SQUASH,
        },
    }
}
