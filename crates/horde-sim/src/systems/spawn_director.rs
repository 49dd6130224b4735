//! Spawn director: time-keyed wave windows drive what spawns, where and how fast.
//!
//! The director owns its own game clock (accumulated Δt). Each update it
//! selects the first declared window containing the current minute, applies
//! that window's population cap, cadence and special event, and returns
//! spawn requests and culls for the engine to carry out.

use std::f32::consts::TAU;

use glam::Vec2;
use hecs::Entity;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use horde_core::catalog::{EnemyIndex, EnemyTypeId, WaveWindow};
use horde_core::constants::*;
use horde_core::enums::WaveEvent;
use horde_core::events::SimEvent;
use horde_core::types::Bounds;

use crate::viewport::Viewport;

/// A request to spawn one enemy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub enemy_type: EnemyTypeId,
    pub position: Vec2,
    pub boss: bool,
}

/// What the director wants done this tick.
#[derive(Debug, Default)]
pub struct DirectorOutput {
    pub spawns: Vec<SpawnRequest>,
    /// Live enemies to remove without a kill (boss room-making).
    pub culls: Vec<Entity>,
    pub events: Vec<SimEvent>,
}

/// Inputs the director reads each tick.
pub struct DirectorContext<'a> {
    pub player: Vec2,
    pub viewport: &'a dyn Viewport,
    /// Currently alive enemies, oldest first.
    pub alive: &'a [Entity],
}

/// The spawn director.
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    waves: Vec<WaveWindow>,
    index: EnemyIndex,
    elapsed_secs: f64,
    current: Option<usize>,
    // Per-window transient state; reset whenever the window changes.
    spawn_timer: f32,
    event_timer: f32,
    boss_spawned: bool,
    formation_angle: f32,
    completed: bool,
    /// Total run length in minutes.
    duration_minutes: f64,
}

impl SpawnDirector {
    pub fn new(waves: Vec<WaveWindow>, index: EnemyIndex) -> Self {
        Self {
            waves,
            index,
            elapsed_secs: 0.0,
            current: None,
            spawn_timer: 0.0,
            event_timer: 0.0,
            boss_spawned: false,
            formation_angle: 0.0,
            completed: false,
            duration_minutes: GAME_DURATION_MINUTES,
        }
    }

    /// Override the run length (minutes).
    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Back to minute zero with no window selected.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0.0;
        self.current = None;
        self.completed = false;
        self.reset_window_state();
    }

    pub fn elapsed_minutes(&self) -> f64 {
        self.elapsed_secs / 60.0
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_window(&self) -> Option<&WaveWindow> {
        self.current.and_then(|i| self.waves.get(i))
    }

    pub fn boss_spawned(&self) -> bool {
        self.boss_spawned
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// First declared window containing `minutes`. Later overlapping windows lose.
    pub fn select_window(&self, minutes: f64) -> Option<usize> {
        self.waves.iter().position(|w| w.contains(minutes))
    }

    /// Advance the clock by `dt` seconds and decide this tick's spawns.
    pub fn update(
        &mut self,
        dt: f32,
        ctx: &DirectorContext,
        rng: &mut ChaCha8Rng,
    ) -> DirectorOutput {
        let mut out = DirectorOutput::default();

        self.elapsed_secs += dt as f64;
        let minutes = self.elapsed_minutes();

        if !self.completed && minutes >= self.duration_minutes {
            self.completed = true;
            log::info!("run complete at {minutes:.2} min");
            out.events.push(SimEvent::GameComplete);
        }

        let selected = self.select_window(minutes);
        if selected != self.current {
            self.current = selected;
            self.reset_window_state();
            let event = self.current_window().map(|w| w.event).unwrap_or_default();
            log::debug!("wave window -> {selected:?} ({event:?}) at {minutes:.3} min");
            out.events.push(SimEvent::WaveChanged {
                index: selected,
                event,
            });
        }

        let Some(window) = self.current.and_then(|i| self.waves.get(i)).cloned() else {
            return out;
        };

        let mut alive = ctx.alive.len();

        match window.event {
            WaveEvent::Normal | WaveEvent::CircleFormation => {
                if window.event == WaveEvent::CircleFormation {
                    self.formation_angle =
                        (self.formation_angle + CIRCLE_FORMATION_ROTATION_RATE * dt) % TAU;
                }

                if window.spawn_rate <= 0.0 {
                    return out;
                }
                self.spawn_timer += dt;
                if self.spawn_timer < 1.0 / window.spawn_rate {
                    return out;
                }
                self.spawn_timer = 0.0;

                if alive >= window.max_count {
                    return out;
                }
                let position = if window.event == WaveEvent::CircleFormation {
                    self.circle_position(ctx.player, rng)
                } else {
                    let bounds = ctx.viewport.visible_bounds(EDGE_SPAWN_MARGIN);
                    edge_position(&bounds, rng.gen_range(0..4), rng)
                };
                if let Some(enemy_type) = self.pick_enemy(&window, rng) {
                    out.spawns.push(SpawnRequest {
                        enemy_type,
                        position,
                        boss: false,
                    });
                }
            }
            WaveEvent::BossEvent => {
                if self.boss_spawned {
                    return out;
                }
                if window.max_count == 0 {
                    return out;
                }
                // Resolve the boss before touching anyone: a failed lookup culls nothing.
                let Some(enemy_type) = self.pick_enemy(&window, rng) else {
                    return out;
                };
                // Keep room for the boss itself under the window's cap.
                let keep = BOSS_CULL_KEEP.min(window.max_count - 1);
                if alive > keep {
                    out.culls.extend_from_slice(&ctx.alive[keep..]);
                }
                let angle = rng.gen_range(0.0..TAU);
                let distance = rng.gen_range(BOSS_SPAWN_DISTANCE_MIN..BOSS_SPAWN_DISTANCE_MAX);
                out.spawns.push(SpawnRequest {
                    enemy_type,
                    position: ctx.player + Vec2::from_angle(angle) * distance,
                    boss: true,
                });
                self.boss_spawned = true;
            }
            WaveEvent::SwarmEvent => {
                self.event_timer += dt;
                if self.event_timer < SWARM_INTERVAL_SECS {
                    return out;
                }
                self.event_timer = 0.0;

                let bounds = ctx.viewport.visible_bounds(EDGE_SPAWN_MARGIN);
                let anchor = edge_position(&bounds, rng.gen_range(0..4), rng);
                for _ in 0..SWARM_BURST_SIZE {
                    if alive >= window.max_count {
                        break;
                    }
                    let offset = Vec2::new(
                        rng.gen_range(-SWARM_CLUSTER_SPREAD..SWARM_CLUSTER_SPREAD),
                        rng.gen_range(-SWARM_CLUSTER_SPREAD..SWARM_CLUSTER_SPREAD),
                    );
                    if let Some(enemy_type) = self.pick_enemy(&window, rng) {
                        out.spawns.push(SpawnRequest {
                            enemy_type,
                            position: anchor + offset,
                            boss: false,
                        });
                        alive += 1;
                    }
                }
            }
            WaveEvent::FinalAssault => {
                self.event_timer += dt;
                if self.event_timer < FINAL_ASSAULT_INTERVAL_SECS {
                    return out;
                }
                self.event_timer = 0.0;

                let bounds = ctx.viewport.visible_bounds(EDGE_SPAWN_MARGIN);
                let mut sides = [0u8, 1, 2, 3];
                sides.shuffle(rng);
                for &side in sides.iter().cycle().take(FINAL_ASSAULT_BURST_SIZE as usize) {
                    if alive >= window.max_count {
                        break;
                    }
                    let position = edge_position(&bounds, side, rng);
                    if let Some(enemy_type) = self.pick_enemy(&window, rng) {
                        out.spawns.push(SpawnRequest {
                            enemy_type,
                            position,
                            boss: false,
                        });
                        alive += 1;
                    }
                }
            }
        }

        out
    }

    fn reset_window_state(&mut self) {
        self.spawn_timer = 0.0;
        self.event_timer = 0.0;
        self.boss_spawned = false;
        self.formation_angle = 0.0;
    }

    /// Uniform choice among the window's names. Unknown names skip the spawn.
    fn pick_enemy(&self, window: &WaveWindow, rng: &mut ChaCha8Rng) -> Option<EnemyTypeId> {
        let name = window.enemies.choose(rng)?;
        let id = self.index.lookup(name);
        if id.is_none() {
            log::warn!("Unknown enemy type: {name}");
        }
        id
    }

    fn circle_position(&self, player: Vec2, rng: &mut ChaCha8Rng) -> Vec2 {
        let angle = self.formation_angle
            + rng.gen_range(-CIRCLE_FORMATION_JITTER..CIRCLE_FORMATION_JITTER);
        let radius = rng.gen_range(CIRCLE_FORMATION_RADIUS_MIN..CIRCLE_FORMATION_RADIUS_MAX);
        player + Vec2::from_angle(angle) * radius
    }
}

/// Uniform point along one side of `bounds`: 0 top, 1 right, 2 bottom, 3 left.
pub fn edge_position(bounds: &Bounds, side: u8, rng: &mut ChaCha8Rng) -> Vec2 {
    match side % 4 {
        0 => Vec2::new(rng.gen_range(bounds.left..=bounds.right), bounds.top),
        1 => Vec2::new(bounds.right, rng.gen_range(bounds.top..=bounds.bottom)),
        2 => Vec2::new(rng.gen_range(bounds.left..=bounds.right), bounds.bottom),
        _ => Vec2::new(bounds.left, rng.gen_range(bounds.top..=bounds.bottom)),
    }
}
