//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Collision group. Pair rules in the collision registry are keyed on these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CollisionGroup {
    Player,
    Enemy,
    Projectile,
    Pickup,
}

/// What kind of entity a collidable is. Matched exhaustively when resolving a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollidableKind {
    Player,
    Enemy,
    Projectile,
    /// Beams sit in the projectile group but never rely on circle contact for damage.
    Beam,
    Pickup,
}

impl CollidableKind {
    /// The collision group this kind belongs to. Fixed for the life of the entity.
    pub fn group(self) -> CollisionGroup {
        match self {
            CollidableKind::Player => CollisionGroup::Player,
            CollidableKind::Enemy => CollisionGroup::Enemy,
            CollidableKind::Projectile | CollidableKind::Beam => CollisionGroup::Projectile,
            CollidableKind::Pickup => CollisionGroup::Pickup,
        }
    }
}

/// Special spawn behavior attached to a wave window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveEvent {
    /// Edge-of-viewport spawning at the window's cadence.
    #[default]
    Normal,
    /// Ring around the player at a slowly rotating base angle.
    CircleFormation,
    /// A single boss per window, after culling the crowd.
    BossEvent,
    /// Fixed bursts on a fixed interval, bypassing cadence.
    SwarmEvent,
    /// Small bursts from several sides at a fast interval, bypassing cadence.
    FinalAssault,
}

/// How a weapon picks targets and what it emits when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WeaponArchetype {
    /// One homing-at-launch shot at the nearest live enemy.
    SingleTarget,
    /// `count` shots evenly spaced around the caster.
    Radial { count: u32 },
    /// Up to `length` shots, each at the nearest enemy not yet hit by this chain.
    Chain { length: u32 },
    /// A single beam rotating around the caster for one revolution.
    RotatingBeam,
}

/// Movement strategy tag for an enemy type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPattern {
    /// Continuous seek toward the player.
    #[default]
    Seek,
    /// Alternate between resting and a parabolic hop toward the player.
    Hop,
}

/// Hop movement phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HopPhase {
    /// Resting on the ground, cooling down before the next hop.
    #[default]
    Idle,
    /// In the air, travelling toward the hop's captured direction.
    Airborne,
}

/// Beam animation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BeamPhase {
    /// Beam growing in.
    #[default]
    Creation,
    /// Full-strength sweep.
    Sustain,
    /// Fading out; still rotating, still damaging.
    Destruction,
    /// Animation finished, awaiting removal.
    Finished,
}

/// Result of applying damage to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Damage applied, enemy still alive.
    Damaged { remaining: i32 },
    /// This hit killed the enemy.
    Killed,
    /// Enemy was already dead; nothing changed.
    AlreadyDead,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Player health reached zero.
    GameOver,
    /// Survived the full run duration.
    Complete,
}
