//! Rotating beam system: anchoring, rotation, animation phases and the
//! swept-rectangle hit test.
//!
//! Beams do not use the registry's circle test. Each enemy is moved into the
//! beam's rotated local frame and checked against a rectangle that starts a
//! short way in front of the anchor, grown by the enemy's own radius.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::{Entity, World};

use horde_core::catalog::WeaponId;
use horde_core::components::{Beam, EnemyVitals, Pose, VisualHandle};
use horde_core::constants::*;
use horde_core::enums::BeamPhase;
use horde_core::events::SimEvent;
use horde_core::types::Position;

use crate::collision::CollisionRegistry;
use crate::combat::{apply_hit, BeamHitCooldowns, PickupDrop, ScoreState};

/// Whether a circle of `radius` at `target` overlaps the beam rectangle.
pub fn beam_hits(
    anchor: Vec2,
    angle: f32,
    range: f32,
    half_width: f32,
    target: Vec2,
    radius: f32,
) -> bool {
    let local = Vec2::from_angle(-angle).rotate(target - anchor);
    let near = BEAM_FORWARD_OFFSET - radius;
    let far = BEAM_FORWARD_OFFSET + range + radius;
    local.x >= near && local.x <= far && local.y.abs() <= half_width + radius
}

/// Advance the beam animation by `dt` after its rotation has been applied.
/// Returns true on the tick the beam terminates.
pub fn advance_phase(beam: &mut Beam, dt: f32) -> bool {
    beam.phase_elapsed += dt;
    let progress = beam.total_rotation / TAU;

    match beam.phase {
        BeamPhase::Creation => {
            if beam.phase_elapsed >= BEAM_CREATION_SECS {
                beam.phase = BeamPhase::Sustain;
                beam.phase_elapsed = 0.0;
            }
            if progress >= BEAM_DESTRUCTION_PROGRESS {
                beam.phase = BeamPhase::Destruction;
                beam.phase_elapsed = 0.0;
            }
        }
        BeamPhase::Sustain => {
            if progress >= BEAM_DESTRUCTION_PROGRESS {
                beam.phase = BeamPhase::Destruction;
                beam.phase_elapsed = 0.0;
            }
        }
        BeamPhase::Destruction => {
            let revolved = beam.total_rotation >= TAU || beam.expired;
            if revolved && beam.phase_elapsed >= BEAM_DESTRUCTION_SECS {
                beam.phase = BeamPhase::Finished;
                beam.terminated = true;
                return true;
            }
        }
        BeamPhase::Finished => {}
    }
    false
}

/// Cut a weapon's live beams short. They play the destruction animation, then terminate.
pub fn expire_weapon(world: &mut World, weapon: WeaponId) {
    for (_entity, beam) in world.query_mut::<&mut Beam>() {
        if beam.weapon != weapon || beam.terminated {
            continue;
        }
        beam.expired = true;
        if beam.phase != BeamPhase::Destruction {
            beam.phase = BeamPhase::Destruction;
            beam.phase_elapsed = 0.0;
        }
    }
}

/// Weapons that currently own a beam in the world.
pub fn live_beam_weapons(world: &World) -> Vec<WeaponId> {
    let mut weapons: Vec<WeaponId> = world
        .query::<&Beam>()
        .iter()
        .filter(|(_, b)| !b.terminated)
        .map(|(_, b)| b.weapon)
        .collect();
    weapons.sort();
    weapons.dedup();
    weapons
}

struct BeamSweep {
    entity: Entity,
    anchor: Vec2,
    angle: f32,
    range: f32,
    half_width: f32,
    damage: i32,
    age: f64,
}

/// Re-anchor, rotate and animate every beam, then apply sweep damage.
pub fn run(
    world: &mut World,
    registry: &CollisionRegistry,
    player: Vec2,
    dt: f32,
    events: &mut Vec<SimEvent>,
    score: &mut ScoreState,
    drops: &mut Vec<PickupDrop>,
) {
    let mut sweeps: Vec<BeamSweep> = Vec::new();

    for (entity, (pos, beam, pose, handle)) in
        world.query_mut::<(&mut Position, &mut Beam, &mut Pose, &VisualHandle)>()
    {
        if beam.terminated {
            continue;
        }

        *pos = Position::from(player);
        let step = beam.rotation_rate * dt;
        beam.angle = (beam.angle + step) % TAU;
        beam.total_rotation += step.abs();
        beam.age += dt as f64;
        pose.rotation = beam.angle;

        if advance_phase(beam, dt) {
            log::debug!("beam {handle:?} terminated");
            events.push(SimEvent::BeamTerminated {
                handle: *handle,
                weapon: beam.weapon,
            });
            continue;
        }

        sweeps.push(BeamSweep {
            entity,
            anchor: player,
            angle: beam.angle,
            range: beam.range,
            half_width: beam.half_width,
            damage: beam.damage,
            age: beam.age,
        });
    }

    if sweeps.is_empty() {
        return;
    }

    let targets: Vec<(Entity, Vec2, f32)> = world
        .query::<(&Position, &EnemyVitals)>()
        .iter()
        .filter(|(_, (_, vitals))| vitals.alive)
        .filter_map(|(e, (pos, _))| {
            registry
                .collider(e)
                .map(|c| (e, pos.to_vec2(), c.radius.max(0.0)))
        })
        .collect();

    for sweep in sweeps {
        let mut hits: Vec<Entity> = Vec::new();

        if let Ok(mut cooldowns) = world.get::<&mut BeamHitCooldowns>(sweep.entity) {
            cooldowns
                .0
                .retain(|_, last| sweep.age - *last <= BEAM_COOLDOWN_PURGE_SECS);

            for &(enemy, position, radius) in &targets {
                if !beam_hits(
                    sweep.anchor,
                    sweep.angle,
                    sweep.range,
                    sweep.half_width,
                    position,
                    radius,
                ) {
                    continue;
                }
                let cooling = cooldowns
                    .0
                    .get(&enemy)
                    .is_some_and(|last| sweep.age - *last < BEAM_HIT_COOLDOWN_SECS);
                if cooling {
                    continue;
                }
                cooldowns.0.insert(enemy, sweep.age);
                hits.push(enemy);
            }
        }

        for enemy in hits {
            apply_hit(world, enemy, sweep.damage, events, score, drops);
        }
    }
}
