//! Weapon scheduler: per-weapon cooldowns, targeting and level-scaled stats.
//!
//! The scheduler decides *what* to fire; it returns [`FireOrder`]s that the
//! engine turns into projectile and beam entities. It never touches the
//! world directly, so targeting can be tested on plain data.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::Entity;

use horde_core::catalog::{WeaponDefinition, WeaponId};
use horde_core::constants::*;
use horde_core::enums::WeaponArchetype;

use horde_ai::vitals::floor_damage;

/// Stats for a weapon at a given level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponStats {
    pub damage: i32,
    pub pierce: i32,
    pub range: f32,
    /// Seconds between shots.
    pub interval: f32,
    pub projectile_speed: f32,
    pub projectile_lifetime: f32,
    pub projectile_radius: f32,
    pub spin_rate: f32,
    /// Beam-only: angular rate in radians per second.
    pub rotation_rate: f32,
}

impl WeaponStats {
    /// Derive stats for `level`. Damage compounds, pierce and range add linearly.
    pub fn derive(def: &WeaponDefinition, level: u32) -> Self {
        let fx = &def.effects;
        let lvl = level as i32;

        let damage = floor_damage(def.base_damage * fx.damage_multiplier.powi(lvl));
        let pierce = def.pierce + fx.pierce_bonus * lvl;
        let mut range = def.range + fx.range_bonus * level as f32;

        let fire_rate = fx.fire_rate_multiplier.powi(lvl);
        let interval = if fire_rate > 0.0 && fire_rate.is_finite() {
            def.attack_interval / fire_rate
        } else {
            def.attack_interval
        };

        let mut rotation_rate = 0.0;
        if def.archetype == WeaponArchetype::RotatingBeam {
            let mult = beam_multiplier(level, def.max_level);
            range = def.range * mult;
            rotation_rate = BEAM_BASE_ROTATION_DEG_PER_SEC.to_radians() * mult;
        }

        Self {
            damage,
            pierce,
            range,
            interval,
            projectile_speed: def.projectile_speed,
            projectile_lifetime: def.projectile_lifetime,
            projectile_radius: def.projectile_radius,
            spin_rate: def.spin_rate,
            rotation_rate,
        }
    }
}

/// Beam range and rotation multiplier: 1x at level 1, 3x at max level, linear between.
pub fn beam_multiplier(level: u32, max_level: u32) -> f32 {
    if max_level <= 1 || level <= 1 {
        return 1.0;
    }
    let t = (level.min(max_level) - 1) as f32 / (max_level - 1) as f32;
    1.0 + (BEAM_MAX_LEVEL_MULTIPLIER - 1.0) * t
}

/// A live enemy the scheduler may aim at.
#[derive(Debug, Clone, Copy)]
pub struct EnemyTarget {
    pub entity: Entity,
    pub position: Vec2,
}

/// What the scheduler can see when deciding to fire.
pub struct FiringContext<'a> {
    pub caster: Vec2,
    /// Live enemies, oldest first.
    pub enemies: &'a [EnemyTarget],
    /// Beam weapons that currently have a beam in the world. Any live beam blocks a new one.
    pub live_beams: &'a [WeaponId],
}

/// Something the engine should spawn.
#[derive(Debug, Clone, PartialEq)]
pub enum FireOrder {
    Projectile {
        weapon: WeaponId,
        origin: Vec2,
        target: Vec2,
        stats: WeaponStats,
        /// Enemy this projectile must not hit (the previous chain link).
        exclude: Option<Entity>,
    },
    Beam {
        weapon: WeaponId,
        anchor: Vec2,
        start_angle: f32,
        stats: WeaponStats,
    },
}

/// One registered weapon and its runtime state.
#[derive(Debug, Clone)]
pub struct WeaponSlot {
    pub def: WeaponDefinition,
    pub level: u32,
    pub active: bool,
    /// Time accumulated toward the next shot.
    pub elapsed: f32,
}

impl WeaponSlot {
    pub fn stats(&self) -> WeaponStats {
        WeaponStats::derive(&self.def, self.level)
    }

    /// Fraction of the current cooldown elapsed.
    pub fn charge(&self) -> f32 {
        let interval = self.stats().interval;
        if interval > 0.0 {
            (self.elapsed / interval).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// The weapon scheduler.
#[derive(Debug, Clone, Default)]
pub struct WeaponScheduler {
    slots: Vec<WeaponSlot>,
}

impl WeaponScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weapon, inactive, at its definition's starting level.
    /// Re-registering an id replaces the definition and resets its state.
    pub fn register_weapon(&mut self, def: WeaponDefinition) {
        let slot = WeaponSlot {
            level: def.level.min(def.max_level.max(1)),
            def,
            active: false,
            elapsed: 0.0,
        };
        match self.slots.iter_mut().find(|s| s.def.id == slot.def.id) {
            Some(existing) => *existing = slot,
            None => self.slots.push(slot),
        }
    }

    pub fn activate(&mut self, id: WeaponId) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                slot.active = true;
                true
            }
            None => {
                log::warn!("activate: unknown weapon {id:?}");
                false
            }
        }
    }

    pub fn deactivate(&mut self, id: WeaponId) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                slot.active = false;
                slot.elapsed = 0.0;
                true
            }
            None => {
                log::warn!("deactivate: unknown weapon {id:?}");
                false
            }
        }
    }

    /// Raise a weapon one level (capped at max). Returns the new level.
    pub fn upgrade(&mut self, id: WeaponId) -> Option<u32> {
        let slot = self.slot_mut(id)?;
        slot.level = (slot.level + 1).min(slot.def.max_level.max(1));
        Some(slot.level)
    }

    /// Force a weapon's level (0 locks it). Capped at max.
    pub fn set_level(&mut self, id: WeaponId, level: u32) -> Option<u32> {
        let slot = self.slot_mut(id)?;
        slot.level = level.min(slot.def.max_level.max(1));
        Some(slot.level)
    }

    /// Zero every cooldown timer.
    pub fn reset_timers(&mut self) {
        for slot in &mut self.slots {
            slot.elapsed = 0.0;
        }
    }

    pub fn slot(&self, id: WeaponId) -> Option<&WeaponSlot> {
        self.slots.iter().find(|s| s.def.id == id)
    }

    pub fn slots(&self) -> &[WeaponSlot] {
        &self.slots
    }

    fn slot_mut(&mut self, id: WeaponId) -> Option<&mut WeaponSlot> {
        self.slots.iter_mut().find(|s| s.def.id == id)
    }

    /// Advance every active weapon's timer and fire the ones that are ready.
    pub fn tick(&mut self, dt: f32, ctx: &FiringContext) -> Vec<FireOrder> {
        let mut orders = Vec::new();

        for slot in &mut self.slots {
            // Level 0 is locked: inert even if marked active.
            if !slot.active || slot.level == 0 {
                continue;
            }

            let stats = slot.stats();
            slot.elapsed += dt;
            if slot.elapsed < stats.interval {
                continue;
            }
            // Reset, not subtract: no banking of missed shots.
            slot.elapsed = 0.0;

            fire(slot.def.id, slot.def.archetype, &stats, ctx, &mut orders);
        }

        orders
    }
}

fn fire(
    weapon: WeaponId,
    archetype: WeaponArchetype,
    stats: &WeaponStats,
    ctx: &FiringContext,
    orders: &mut Vec<FireOrder>,
) {
    match archetype {
        WeaponArchetype::SingleTarget => {
            // Nearest of all enemies, not range-gated.
            let Some(target) = nearest(ctx.caster, ctx.enemies, &[]) else {
                return;
            };
            orders.push(FireOrder::Projectile {
                weapon,
                origin: ctx.caster,
                target: target.position,
                stats: *stats,
                exclude: None,
            });
        }
        WeaponArchetype::Radial { count } => {
            for i in 0..count {
                let angle = i as f32 * TAU / count as f32;
                orders.push(FireOrder::Projectile {
                    weapon,
                    origin: ctx.caster,
                    target: ctx.caster + Vec2::from_angle(angle) * stats.range.max(1.0),
                    stats: *stats,
                    exclude: None,
                });
            }
        }
        WeaponArchetype::Chain { length } => {
            let mut hit: Vec<Entity> = Vec::new();
            let mut from = ctx.caster;
            let mut previous = None;
            for _ in 0..length {
                let Some(target) = nearest(from, ctx.enemies, &hit) else {
                    break;
                };
                orders.push(FireOrder::Projectile {
                    weapon,
                    origin: from,
                    target: target.position,
                    stats: *stats,
                    exclude: previous,
                });
                hit.push(target.entity);
                previous = Some(target.entity);
                from = target.position;
            }
        }
        WeaponArchetype::RotatingBeam => {
            if !ctx.live_beams.is_empty() {
                return;
            }
            let start_angle = nearest(ctx.caster, ctx.enemies, &[])
                .and_then(|t| (t.position - ctx.caster).try_normalize())
                .map(|d| d.y.atan2(d.x))
                .unwrap_or(0.0);
            orders.push(FireOrder::Beam {
                weapon,
                anchor: ctx.caster,
                start_angle,
                stats: *stats,
            });
        }
    }
}

/// Nearest enemy to `from`, skipping `exclude`. Ties go to the earlier (older) enemy.
pub fn nearest<'a>(
    from: Vec2,
    enemies: &'a [EnemyTarget],
    exclude: &[Entity],
) -> Option<&'a EnemyTarget> {
    let mut best: Option<(&EnemyTarget, f32)> = None;
    for enemy in enemies {
        if exclude.contains(&enemy.entity) {
            continue;
        }
        let d = from.distance_squared(enemy.position);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((enemy, d));
        }
    }
    best.map(|(e, _)| e)
}
