//! Snapshot system: queries the ECS world and builds a complete FrameSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use horde_core::components::*;
use horde_core::enums::*;
use horde_core::events::SimEvent;
use horde_core::state::*;
use horde_core::types::{Position, SimTime};

use crate::combat::ScoreState;
use crate::systems::spawn_director::SpawnDirector;
use crate::weapons::WeaponScheduler;

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    director: &SpawnDirector,
    weapons: &WeaponScheduler,
    events: Vec<SimEvent>,
    score: &ScoreState,
) -> FrameSnapshot {
    let alive_enemies = count_alive_enemies(world);

    FrameSnapshot {
        time: *time,
        phase,
        player: build_player(world),
        visuals: build_visuals(world),
        wave: WaveView {
            index: director.current_index(),
            event: director.current_window().map(|w| w.event).unwrap_or_default(),
            alive_enemies,
            max_count: director
                .current_window()
                .map(|w| w.max_count as u32)
                .unwrap_or(0),
            elapsed_minutes: director.elapsed_minutes(),
        },
        weapons: build_weapons(weapons),
        events,
        score: ScoreView {
            enemies_killed: score.enemies_killed,
            enemies_spawned: score.enemies_spawned,
            shots_fired: score.shots_fired,
            survived_secs: time.elapsed_secs,
        },
    }
}

fn count_alive_enemies(world: &World) -> u32 {
    world
        .query::<&EnemyVitals>()
        .iter()
        .filter(|(_, v)| v.alive)
        .count() as u32
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &PlayerVitals)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vitals))| PlayerView {
            position: *pos,
            health: vitals.health,
            max_health: vitals.max_health,
            experience: vitals.experience,
            level: vitals.level,
        })
        .unwrap_or_default()
}

/// One view per renderer-owned visual, ordered by handle.
fn build_visuals(world: &World) -> Vec<VisualView> {
    let mut visuals: Vec<VisualView> = world
        .query::<(&VisualHandle, &Position, &Pose)>()
        .iter()
        .filter_map(|(entity, (handle, pos, pose))| {
            let entity_ref = world.entity(entity).ok()?;

            let mut view = VisualView {
                handle: *handle,
                kind: VisualKind::Enemy,
                position: *pos,
                flip_x: pose.flip_x,
                rotation: pose.rotation,
                scale_x: pose.scale_x,
                scale_y: pose.scale_y,
                lift: pose.lift,
                beam_phase: None,
                length: 0.0,
                dying: false,
            };

            if let Some(vitals) = entity_ref.get::<&EnemyVitals>() {
                view.dying = !vitals.alive;
            } else if entity_ref.has::<Projectile>() {
                view.kind = VisualKind::Projectile;
            } else if let Some(beam) = entity_ref.get::<&Beam>() {
                view.kind = VisualKind::Beam;
                view.beam_phase = Some(beam.phase);
                view.length = beam.range;
            } else if entity_ref.has::<Pickup>() {
                view.kind = VisualKind::Pickup;
            } else {
                return None;
            }

            Some(view)
        })
        .collect();

    visuals.sort_by_key(|v| v.handle);
    visuals
}

fn build_weapons(weapons: &WeaponScheduler) -> Vec<WeaponView> {
    weapons
        .slots()
        .iter()
        .map(|slot| WeaponView {
            id: slot.def.id,
            name: slot.def.name.clone(),
            level: slot.level,
            active: slot.active,
            charge: slot.charge(),
        })
        .collect()
}
