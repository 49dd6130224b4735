//! Default content: the built-in enemy roster, weapon set and 30-minute wave table.
//!
//! The embedding game may replace all of this with a JSON catalog; the
//! simulation never assumes any of these names exist.

use horde_core::catalog::{
    Catalog, EnemyDefinition, LevelEffects, WaveWindow, WeaponDefinition, WeaponId,
};
use horde_core::enums::{MovementPattern, WaveEvent, WeaponArchetype};

/// Homing bolt, unlocked from the start.
pub const BOLT: WeaponId = WeaponId(0);
/// Radial burst.
pub const NOVA: WeaponId = WeaponId(1);
/// Chain lightning.
pub const ARC: WeaponId = WeaponId(2);
/// Rotating beam.
pub const HALO: WeaponId = WeaponId(3);

/// Weapon the player starts a run with.
pub const STARTING_WEAPON: WeaponId = BOLT;

/// The complete default catalog.
pub fn default_catalog() -> Catalog {
    Catalog {
        enemies: default_enemies(),
        weapons: default_weapons(),
        waves: default_waves(),
    }
}

pub fn default_enemies() -> Vec<EnemyDefinition> {
    vec![
        enemy("Blob", 20, 60.0, 5, 1, 14.0, MovementPattern::Seek),
        enemy("Hopper", 35, 45.0, 8, 2, 14.0, MovementPattern::Hop),
        enemy("Bat", 12, 110.0, 4, 1, 10.0, MovementPattern::Seek),
        enemy("Brute", 120, 40.0, 15, 6, 22.0, MovementPattern::Seek),
        EnemyDefinition {
            is_boss: true,
            ..enemy("Overlord", 2500, 35.0, 30, 100, 48.0, MovementPattern::Seek)
        },
    ]
}

pub fn default_weapons() -> Vec<WeaponDefinition> {
    vec![
        WeaponDefinition {
            id: BOLT,
            name: "Bolt".into(),
            archetype: WeaponArchetype::SingleTarget,
            base_damage: 25.0,
            attack_interval: 1.0,
            range: 400.0,
            pierce: 0,
            projectile_speed: 420.0,
            projectile_lifetime: 2.0,
            projectile_radius: 8.0,
            spin_rate: 0.0,
            level: 1,
            max_level: 8,
            effects: LevelEffects {
                damage_multiplier: 1.25,
                fire_rate_multiplier: 1.08,
                pierce_bonus: 0,
                range_bonus: 0.0,
            },
        },
        WeaponDefinition {
            id: NOVA,
            name: "Nova".into(),
            archetype: WeaponArchetype::Radial { count: 8 },
            base_damage: 12.0,
            attack_interval: 2.5,
            range: 300.0,
            pierce: 1,
            projectile_speed: 300.0,
            projectile_lifetime: 1.5,
            projectile_radius: 10.0,
            spin_rate: 6.0,
            level: 0,
            max_level: 8,
            effects: LevelEffects {
                damage_multiplier: 1.2,
                fire_rate_multiplier: 1.05,
                pierce_bonus: 1,
                range_bonus: 0.0,
            },
        },
        WeaponDefinition {
            id: ARC,
            name: "Arc".into(),
            archetype: WeaponArchetype::Chain { length: 4 },
            base_damage: 18.0,
            attack_interval: 1.8,
            range: 250.0,
            pierce: 0,
            projectile_speed: 600.0,
            projectile_lifetime: 0.8,
            projectile_radius: 8.0,
            spin_rate: 0.0,
            level: 0,
            max_level: 8,
            effects: LevelEffects {
                damage_multiplier: 1.15,
                fire_rate_multiplier: 1.05,
                pierce_bonus: 0,
                range_bonus: 0.0,
            },
        },
        WeaponDefinition {
            id: HALO,
            name: "Halo".into(),
            archetype: WeaponArchetype::RotatingBeam,
            base_damage: 10.0,
            attack_interval: 4.0,
            range: 120.0,
            pierce: 0,
            projectile_speed: 0.0,
            projectile_lifetime: 0.0,
            projectile_radius: 0.0,
            spin_rate: 0.0,
            level: 0,
            max_level: 5,
            effects: LevelEffects {
                damage_multiplier: 1.2,
                fire_rate_multiplier: 1.0,
                pierce_bonus: 0,
                range_bonus: 0.0,
            },
        },
    ]
}

/// Thirty minutes of windows. Some overlap on purpose; the earlier window wins.
pub fn default_waves() -> Vec<WaveWindow> {
    vec![
        wave(0.0, 2.0, &["Blob"], 1.0, 20, WaveEvent::Normal),
        wave(2.0, 5.0, &["Blob", "Bat"], 1.5, 35, WaveEvent::Normal),
        wave(5.0, 6.0, &["Bat"], 2.0, 40, WaveEvent::CircleFormation),
        wave(5.5, 9.0, &["Blob", "Hopper"], 2.0, 50, WaveEvent::Normal),
        wave(9.0, 10.0, &["Overlord"], 0.0, 30, WaveEvent::BossEvent),
        wave(10.0, 14.0, &["Hopper", "Bat"], 2.5, 60, WaveEvent::Normal),
        wave(14.0, 16.0, &["Bat"], 0.0, 80, WaveEvent::SwarmEvent),
        wave(16.0, 20.0, &["Blob", "Hopper", "Brute"], 3.0, 80, WaveEvent::Normal),
        wave(20.0, 21.0, &["Hopper", "Brute"], 3.0, 90, WaveEvent::CircleFormation),
        wave(21.0, 24.0, &["Bat", "Brute"], 3.5, 100, WaveEvent::Normal),
        wave(24.0, 25.0, &["Overlord"], 0.0, 40, WaveEvent::BossEvent),
        wave(25.0, 28.0, &["Blob", "Bat", "Hopper", "Brute"], 4.0, 120, WaveEvent::Normal),
        wave(28.0, 30.0, &["Bat", "Hopper", "Brute"], 0.0, 150, WaveEvent::FinalAssault),
    ]
}

fn enemy(
    name: &str,
    max_health: i32,
    speed: f32,
    contact_damage: i32,
    experience: u32,
    radius: f32,
    movement: MovementPattern,
) -> EnemyDefinition {
    EnemyDefinition {
        name: name.into(),
        max_health,
        speed,
        contact_damage,
        experience,
        radius,
        movement,
        is_boss: false,
    }
}

fn wave(
    start: f64,
    end: f64,
    enemies: &[&str],
    spawn_rate: f32,
    max_count: usize,
    event: WaveEvent,
) -> WaveWindow {
    WaveWindow {
        start,
        end,
        enemies: enemies.iter().map(|s| s.to_string()).collect(),
        spawn_rate,
        max_count,
        event,
    }
}
