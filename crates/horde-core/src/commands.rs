//! Commands sent from the embedding game to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::catalog::WeaponId;

/// All possible external actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    // --- Run control ---
    /// Start a run from the main menu.
    StartRun,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 0.0 = frozen). Clamped to 0..4.
    SetTimeScale { scale: f64 },
    /// Drop every live entity and restart the run clock.
    Restart,

    // --- Player ---
    /// Feed the player handle's current world position.
    MovePlayer { x: f32, y: f32 },

    // --- Weapons ---
    ActivateWeapon { weapon: WeaponId },
    DeactivateWeapon { weapon: WeaponId },
    /// Raise a weapon's level by one (0 -> 1 unlocks it).
    UpgradeWeapon { weapon: WeaponId },
}
