//! Contact resolution: turns registry contacts into damage, pickups and player hits.
//!
//! Contacts are matched on the collidable kinds of both sides. Anything the
//! game has no handler for is ignored.

use hecs::{Entity, World};

use horde_core::components::{EnemyStats, EnemyVitals, Pickup, PlayerVitals, Projectile, VisualHandle};
use horde_core::constants::*;
use horde_core::enums::{CollidableKind, DamageOutcome};
use horde_core::events::SimEvent;

use crate::collision::{Contact, ContactHandler, ContactSide};
use crate::combat::{apply_hit, HitLedger, PickupDrop, ScoreState};
use crate::systems::projectile::register_hit;

/// Outcome of a resolution pass the engine needs to act on.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContactSummary {
    pub player_died: bool,
}

/// Apply every contact in order.
pub fn resolve(
    world: &mut World,
    contacts: &[Contact],
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
    drops: &mut Vec<PickupDrop>,
) -> ContactSummary {
    let mut summary = ContactSummary::default();

    for contact in contacts {
        match *contact {
            Contact::Entity { subject, other } => {
                if subject.kind == CollidableKind::Projectile && other.kind == CollidableKind::Enemy {
                    projectile_hit(world, subject.entity, other.entity, events, score, drops);
                }
            }
            Contact::Pair {
                handler: ContactHandler::EnemyTouchesPlayer,
                first,
                second,
            } => {
                let (enemy, player) = orient(first, second, CollidableKind::Enemy);
                if enemy_touch(world, enemy, player, events) {
                    summary.player_died = true;
                }
            }
            Contact::Pair {
                handler: ContactHandler::PlayerCollectsPickup,
                first,
                second,
            } => {
                let (player, pickup) = orient(first, second, CollidableKind::Player);
                collect(world, player, pickup, events);
            }
        }
    }

    summary
}

/// Split a pair into (side of `kind`, other side).
fn orient(first: ContactSide, second: ContactSide, kind: CollidableKind) -> (Entity, Entity) {
    if first.kind == kind {
        (first.entity, second.entity)
    } else {
        (second.entity, first.entity)
    }
}

/// A projectile overlapping an enemy. Each enemy is damaged at most once per
/// projectile; the pierce budget is spent per damaged enemy.
fn projectile_hit(
    world: &mut World,
    projectile: Entity,
    enemy: Entity,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
    drops: &mut Vec<PickupDrop>,
) {
    let damage = {
        let Ok(p) = world.get::<&Projectile>(projectile) else {
            return;
        };
        if p.retired {
            return;
        }
        p.damage
    };

    let enemy_alive = world
        .get::<&EnemyVitals>(enemy)
        .map(|v| v.alive)
        .unwrap_or(false);
    if !enemy_alive {
        return;
    }

    {
        let Ok(mut ledger) = world.get::<&mut HitLedger>(projectile) else {
            return;
        };
        if ledger.0.contains(&enemy) {
            return;
        }
        ledger.0.push(enemy);
    }

    if apply_hit(world, enemy, damage, events, score, drops) == DamageOutcome::AlreadyDead {
        return;
    }

    let destroyed = match world.get::<&mut Projectile>(projectile) {
        Ok(mut p) => register_hit(&mut p),
        Err(_) => false,
    };
    if destroyed {
        if let Ok(handle) = world.get::<&VisualHandle>(projectile) {
            events.push(SimEvent::ProjectileDestroyed { handle: *handle });
        }
    }
}

/// Enemy body contact. Returns true if this hit killed the player.
fn enemy_touch(
    world: &mut World,
    enemy: Entity,
    player: Entity,
    events: &mut Vec<SimEvent>,
) -> bool {
    let damage = {
        let Ok(vitals) = world.get::<&EnemyVitals>(enemy) else {
            return false;
        };
        if !vitals.alive {
            return false;
        }
        match world.get::<&EnemyStats>(enemy) {
            Ok(stats) => stats.contact_damage,
            Err(_) => return false,
        }
    };
    if damage <= 0 {
        return false;
    }

    let Ok(mut vitals) = world.get::<&mut PlayerVitals>(player) else {
        return false;
    };
    if vitals.health <= 0 || vitals.invulnerable_secs > 0.0 {
        return false;
    }

    vitals.health = (vitals.health - damage).max(0);
    vitals.invulnerable_secs = PLAYER_INVULNERABILITY_SECS;
    events.push(SimEvent::PlayerDamaged {
        amount: damage,
        remaining: vitals.health,
    });

    if vitals.health == 0 {
        events.push(SimEvent::PlayerDied);
        return true;
    }
    false
}

/// Experience needed to go from `level` to the next.
pub fn xp_to_next(level: u32) -> u32 {
    LEVEL_XP_BASE + LEVEL_XP_PER_LEVEL * level
}

fn collect(world: &mut World, player: Entity, pickup: Entity, events: &mut Vec<SimEvent>) {
    let experience = {
        let Ok(mut gem) = world.get::<&mut Pickup>(pickup) else {
            return;
        };
        if gem.collected {
            return;
        }
        gem.collected = true;
        gem.experience
    };

    let Ok(mut vitals) = world.get::<&mut PlayerVitals>(player) else {
        return;
    };
    vitals.experience += experience;
    events.push(SimEvent::PickupCollected {
        experience,
        total: vitals.experience,
    });

    while vitals.experience >= xp_to_next(vitals.level) {
        vitals.experience -= xp_to_next(vitals.level);
        vitals.level += 1;
        log::debug!("player reached level {}", vitals.level);
        events.push(SimEvent::LevelUp {
            level: vitals.level,
        });
    }
}
