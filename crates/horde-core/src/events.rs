//! Events emitted by the simulation, drained once per tick.
//!
//! These replace per-entity callbacks: systems push, the engine hands the
//! list to the embedding game with the frame snapshot.

use serde::{Deserialize, Serialize};

use crate::catalog::{EnemyTypeId, WeaponId};
use crate::components::VisualHandle;
use crate::enums::WaveEvent;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// The active wave window changed (`None` = no window covers the current time).
    WaveChanged { index: Option<usize>, event: WaveEvent },
    EnemySpawned {
        handle: VisualHandle,
        enemy_type: EnemyTypeId,
        position: Position,
    },
    BossSpawned { handle: VisualHandle, position: Position },
    /// Removed without a kill to make room for a boss.
    EnemyCulled { handle: VisualHandle },
    /// Damage number feedback.
    EnemyDamaged {
        handle: VisualHandle,
        amount: i32,
        remaining: i32,
    },
    EnemyKilled {
        handle: VisualHandle,
        experience: u32,
        position: Position,
    },
    WeaponFired { weapon: WeaponId, shots: u32 },
    /// Projectile reached its max lifetime.
    ProjectileExpired { handle: VisualHandle },
    /// Projectile exhausted its pierce budget.
    ProjectileDestroyed { handle: VisualHandle },
    /// Beam completed its revolution and its destruction animation.
    BeamTerminated { handle: VisualHandle, weapon: WeaponId },
    PlayerDamaged { amount: i32, remaining: i32 },
    PlayerDied,
    PickupCollected { experience: u32, total: u32 },
    LevelUp { level: u32 },
    GameComplete,
    /// The renderer should detach and dispose this visual.
    Detach { handle: VisualHandle },
}
