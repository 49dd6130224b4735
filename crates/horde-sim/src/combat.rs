//! Damage application shared by projectiles and beams.
//!
//! Everything that hurts an enemy goes through [`apply_hit`], so kills,
//! damage numbers, experience drops and score stay consistent.

use std::collections::HashMap;

use hecs::{Entity, World};

use horde_core::components::{EnemyStats, EnemyVitals, VisualHandle};
use horde_core::enums::DamageOutcome;
use horde_core::events::SimEvent;
use horde_core::types::Position;

use horde_ai::vitals::take_damage;

/// Running score tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_killed: u32,
    pub enemies_spawned: u32,
    pub shots_fired: u32,
}

/// Experience gem to spawn at end of tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickupDrop {
    pub position: Position,
    pub experience: u32,
}

/// Enemies a projectile has already damaged. A projectile never hurts the same enemy twice.
#[derive(Debug, Clone, Default)]
pub struct HitLedger(pub Vec<Entity>);

/// Per-enemy beam hit times, in beam-age seconds.
#[derive(Debug, Clone, Default)]
pub struct BeamHitCooldowns(pub HashMap<Entity, f64>);

/// Apply `amount` damage to `enemy` and record the consequences.
pub fn apply_hit(
    world: &mut World,
    enemy: Entity,
    amount: i32,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
    drops: &mut Vec<PickupDrop>,
) -> DamageOutcome {
    let outcome = match world.get::<&mut EnemyVitals>(enemy) {
        Ok(mut vitals) => take_damage(&mut vitals, amount),
        Err(_) => return DamageOutcome::AlreadyDead,
    };

    let handle = match world.get::<&VisualHandle>(enemy) {
        Ok(h) => *h,
        Err(_) => return outcome,
    };

    match outcome {
        DamageOutcome::Damaged { remaining } => {
            events.push(SimEvent::EnemyDamaged {
                handle,
                amount,
                remaining,
            });
        }
        DamageOutcome::Killed => {
            events.push(SimEvent::EnemyDamaged {
                handle,
                amount,
                remaining: 0,
            });

            let experience = world
                .get::<&EnemyStats>(enemy)
                .map(|s| s.experience)
                .unwrap_or(0);
            let position = world
                .get::<&Position>(enemy)
                .map(|p| *p)
                .unwrap_or_default();

            score.enemies_killed += 1;
            events.push(SimEvent::EnemyKilled {
                handle,
                experience,
                position,
            });
            if experience > 0 {
                drops.push(PickupDrop {
                    position,
                    experience,
                });
            }
        }
        DamageOutcome::AlreadyDead => {}
    }

    outcome
}
