//! Read-only enemy, weapon and wave tables.
//!
//! Built in code or loaded from JSON by the embedding game. The simulation
//! only ever queries them by id or name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::{ENEMY_DEFAULT_RADIUS, PROJECTILE_DEFAULT_LIFETIME_SECS, PROJECTILE_DEFAULT_RADIUS};
use crate::enums::{MovementPattern, WaveEvent, WeaponArchetype};

/// Index of an enemy type in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyTypeId(pub u16);

/// Stable weapon identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeaponId(pub u16);

/// Stats for one enemy type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub name: String,
    pub max_health: i32,
    pub speed: f32,
    pub contact_damage: i32,
    pub experience: u32,
    #[serde(default = "default_enemy_radius")]
    pub radius: f32,
    #[serde(default)]
    pub movement: MovementPattern,
    #[serde(default)]
    pub is_boss: bool,
}

/// Per-level scaling of a weapon.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelEffects {
    /// Compounds: `base_damage * damage_multiplier^level`.
    pub damage_multiplier: f32,
    /// Compounds: `attack_interval / fire_rate_multiplier^level`.
    #[serde(default = "one")]
    pub fire_rate_multiplier: f32,
    /// Linear: `base_pierce + pierce_bonus * level`.
    #[serde(default)]
    pub pierce_bonus: i32,
    /// Linear: `base_range + range_bonus * level`.
    #[serde(default)]
    pub range_bonus: f32,
}

impl Default for LevelEffects {
    fn default() -> Self {
        Self {
            damage_multiplier: 1.0,
            fire_rate_multiplier: 1.0,
            pierce_bonus: 0,
            range_bonus: 0.0,
        }
    }
}

/// Static definition of a weapon. `level` is the starting upgrade level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponDefinition {
    pub id: WeaponId,
    pub name: String,
    pub archetype: WeaponArchetype,
    pub base_damage: f32,
    /// Seconds between shots at level 0 scaling.
    pub attack_interval: f32,
    pub range: f32,
    #[serde(default)]
    pub pierce: i32,
    pub projectile_speed: f32,
    #[serde(default = "default_projectile_lifetime")]
    pub projectile_lifetime: f32,
    #[serde(default = "default_projectile_radius")]
    pub projectile_radius: f32,
    /// Visual spin while flying (radians per second), 0 = face heading.
    #[serde(default)]
    pub spin_rate: f32,
    /// 0 = locked, >= 1 = usable.
    #[serde(default)]
    pub level: u32,
    pub max_level: u32,
    #[serde(default)]
    pub effects: LevelEffects,
}

/// One time-keyed wave window. Times are game-minutes, `[start, end)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveWindow {
    pub start: f64,
    pub end: f64,
    pub enemies: Vec<String>,
    /// Enemies per second.
    pub spawn_rate: f32,
    /// Maximum simultaneously alive enemies.
    pub max_count: usize,
    #[serde(default)]
    pub event: WaveEvent,
}

impl WaveWindow {
    pub fn contains(&self, minutes: f64) -> bool {
        minutes >= self.start && minutes < self.end
    }
}

/// The full read-only catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub enemies: Vec<EnemyDefinition>,
    pub weapons: Vec<WeaponDefinition>,
    pub waves: Vec<WaveWindow>,
}

impl Catalog {
    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid catalog: {e}"))
    }

    /// Build the name -> type id table for the enemy list.
    pub fn enemy_index(&self) -> EnemyIndex {
        EnemyIndex::new(&self.enemies)
    }

    pub fn enemy(&self, id: EnemyTypeId) -> Option<&EnemyDefinition> {
        self.enemies.get(id.0 as usize)
    }

    pub fn weapon(&self, id: WeaponId) -> Option<&WeaponDefinition> {
        self.weapons.iter().find(|w| w.id == id)
    }
}

/// Name -> enemy type id lookup.
#[derive(Debug, Clone, Default)]
pub struct EnemyIndex {
    by_name: HashMap<String, EnemyTypeId>,
}

impl EnemyIndex {
    pub fn new(enemies: &[EnemyDefinition]) -> Self {
        let by_name = enemies
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name.clone(), EnemyTypeId(i as u16)))
            .collect();
        Self { by_name }
    }

    pub fn lookup(&self, name: &str) -> Option<EnemyTypeId> {
        self.by_name.get(name).copied()
    }
}

fn default_enemy_radius() -> f32 {
    ENEMY_DEFAULT_RADIUS
}

fn default_projectile_lifetime() -> f32 {
    PROJECTILE_DEFAULT_LIFETIME_SECS
}

fn default_projectile_radius() -> f32 {
    PROJECTILE_DEFAULT_RADIUS
}

fn one() -> f32 {
    1.0
}
