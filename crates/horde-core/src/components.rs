//! ECS components for hecs entities.
//!
//! Components are plain data structs. Behavior lives in `horde-ai`
//! (movement, damage contract) and in the `horde-sim` systems.

use serde::{Deserialize, Serialize};

use crate::catalog::{EnemyTypeId, WeaponId};
use crate::enums::*;

/// Opaque renderer-side handle. The core positions it but never draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisualHandle(pub u32);

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Player health and progression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerVitals {
    pub health: i32,
    pub max_health: i32,
    /// Remaining invulnerability after a contact hit (seconds).
    pub invulnerable_secs: f32,
    pub experience: u32,
    pub level: u32,
}

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Static per-spawn enemy stats, copied from the catalog at spawn time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyStats {
    pub type_id: EnemyTypeId,
    pub speed: f32,
    pub contact_damage: i32,
    pub experience: u32,
    pub is_boss: bool,
}

/// Enemy health and life state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyVitals {
    pub health: i32,
    pub max_health: i32,
    pub alive: bool,
    /// Counts down once dead; the entity is removed when it reaches zero.
    pub removal_countdown: Option<f32>,
}

/// Monotonic spawn sequence. Lower = older; used to decide who survives a boss cull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// Hop movement bookkeeping.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HopState {
    pub phase: HopPhase,
    /// Time spent in the current phase (seconds).
    pub phase_elapsed: f32,
    /// Unit direction captured at takeoff.
    pub dir_x: f32,
    pub dir_y: f32,
    /// Remaining landing squash time (seconds).
    pub landing_remaining: f32,
}

/// Per-enemy movement state, interpreted by `horde_ai::movement`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MovementState {
    pub pattern: MovementPattern,
    pub hop: HopState,
}

/// Renderer-facing pose: mirror, squash and stretch, vertical lift, rotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pose {
    /// Mirror the visual horizontally (facing left).
    pub flip_x: bool,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Visual height above the ground position (hop arc), pixels.
    pub lift: f32,
    /// Visual rotation in radians.
    pub rotation: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            flip_x: false,
            scale_x: 1.0,
            scale_y: 1.0,
            lift: 0.0,
            rotation: 0.0,
        }
    }
}

/// A flying projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub weapon: WeaponId,
    pub damage: i32,
    /// Additional targets this projectile may damage. Destroyed when it goes negative.
    pub pierce_remaining: i32,
    /// Age in seconds.
    pub age: f32,
    pub lifetime: f32,
    /// Visual spin rate (radians per second). Zero means face the direction of travel.
    pub spin_rate: f32,
    /// Set once the projectile has expired or been destroyed; it no longer simulates.
    pub retired: bool,
}

/// A rotating beam anchored to the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beam {
    pub weapon: WeaponId,
    pub damage: i32,
    /// Carried for parity with other weapons; beams use hit cooldowns instead.
    pub pierce: i32,
    pub range: f32,
    pub half_width: f32,
    /// Angular rate (radians per second).
    pub rotation_rate: f32,
    /// Current angle (radians).
    pub angle: f32,
    /// Total rotation since creation (radians).
    pub total_rotation: f32,
    /// Beam age in seconds (drives the hit cooldown clock).
    pub age: f64,
    pub phase: BeamPhase,
    pub phase_elapsed: f32,
    /// Cut short from outside (weapon deactivated); skips the rest of the revolution.
    pub expired: bool,
    /// Set once termination has been signalled.
    pub terminated: bool,
}

/// Experience gem dropped by a dead enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup {
    pub experience: u32,
    /// Set when the player walks over it; removed at end of tick.
    pub collected: bool,
}
