//! Frame snapshot: everything the renderer and HUD need after each tick.

use serde::{Deserialize, Serialize};

use crate::catalog::WeaponId;
use crate::components::VisualHandle;
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, SimTime};

/// Complete visible state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub visuals: Vec<VisualView>,
    pub wave: WaveView,
    pub weapons: Vec<WeaponView>,
    pub events: Vec<SimEvent>,
    pub score: ScoreView,
}

/// What a renderer-owned node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    Enemy,
    Projectile,
    Beam,
    Pickup,
}

/// Placement for one renderer-owned node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualView {
    pub handle: VisualHandle,
    pub kind: VisualKind,
    pub position: Position,
    pub flip_x: bool,
    pub rotation: f32,
    pub scale_x: f32,
    pub scale_y: f32,
    /// Vertical draw offset above `position` (hop arc).
    pub lift: f32,
    /// Beam animation phase, `None` for non-beams.
    pub beam_phase: Option<BeamPhase>,
    /// Beam length, 0 for non-beams.
    pub length: f32,
    /// True while an enemy is in its death grace period.
    pub dying: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub experience: u32,
    pub level: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    /// Index of the active wave window, if any.
    pub index: Option<usize>,
    pub event: WaveEvent,
    pub alive_enemies: u32,
    pub max_count: u32,
    pub elapsed_minutes: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub id: WeaponId,
    pub name: String,
    pub level: u32,
    pub active: bool,
    /// Fraction of the current cooldown elapsed (0..1).
    pub charge: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub enemies_killed: u32,
    pub enemies_spawned: u32,
    pub shots_fired: u32,
    pub survived_secs: f64,
}
