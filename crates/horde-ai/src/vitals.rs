//! The shared damage contract.
//!
//! Every enemy type goes through these functions regardless of how it moves.

use horde_core::components::EnemyVitals;
use horde_core::constants::ENEMY_DEATH_GRACE_SECS;
use horde_core::enums::DamageOutcome;

/// Fresh vitals for a newly spawned enemy.
pub fn spawn_vitals(max_health: i32) -> EnemyVitals {
    let max_health = max_health.max(1);
    EnemyVitals {
        health: max_health,
        max_health,
        alive: true,
        removal_countdown: None,
    }
}

/// Apply `amount` damage. Health never goes below zero and death fires once.
///
/// A killed enemy starts its removal countdown so a death animation and
/// damage number can play before the entity is dropped.
pub fn take_damage(vitals: &mut EnemyVitals, amount: i32) -> DamageOutcome {
    if !vitals.alive {
        return DamageOutcome::AlreadyDead;
    }

    vitals.health = (vitals.health - amount.max(0)).max(0);
    if vitals.health == 0 {
        vitals.alive = false;
        vitals.removal_countdown = Some(ENEMY_DEATH_GRACE_SECS);
        DamageOutcome::Killed
    } else {
        DamageOutcome::Damaged {
            remaining: vitals.health,
        }
    }
}

/// Advance the removal countdown. Returns true once the enemy should be removed.
pub fn tick_removal(vitals: &mut EnemyVitals, dt: f32) -> bool {
    match vitals.removal_countdown.as_mut() {
        Some(remaining) => {
            *remaining -= dt;
            *remaining <= 0.0
        }
        None => false,
    }
}

/// Floor a scaled damage value to the integer health deduction.
pub fn floor_damage(raw: f32) -> i32 {
    if raw.is_finite() {
        raw.floor().max(0.0) as i32
    } else {
        0
    }
}
