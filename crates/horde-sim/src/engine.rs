//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the collision registry, the
//! weapon scheduler and the spawn director. It processes queued commands,
//! runs all systems in a fixed order and produces `FrameSnapshot`s.
//! Completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use horde_core::catalog::{Catalog, WeaponId};
use horde_core::commands::SimCommand;
use horde_core::components::{EnemyVitals, Player, SpawnOrder, VisualHandle};
use horde_core::constants::*;
use horde_core::enums::GamePhase;
use horde_core::events::SimEvent;
use horde_core::state::FrameSnapshot;
use horde_core::types::{Position, SimTime};

use crate::collision::CollisionRegistry;
use crate::combat::{PickupDrop, ScoreState};
use crate::scenario;
use crate::systems;
use crate::systems::spawn_director::{DirectorContext, SpawnDirector};
use crate::viewport::CenteredViewport;
use crate::weapons::{EnemyTarget, FireOrder, FiringContext, WeaponScheduler};
use crate::world_setup::{self, HandleAllocator};

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Half size of the visible area around the player (edge spawns go just outside it).
    pub viewport_half_extents: Vec2,
    pub catalog: Catalog,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            viewport_half_extents: Vec2::new(VIEWPORT_HALF_WIDTH, VIEWPORT_HALF_HEIGHT),
            catalog: scenario::default_catalog(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    registry: CollisionRegistry,
    weapons: WeaponScheduler,
    director: SpawnDirector,
    catalog: Catalog,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    seed: u64,
    rng: ChaCha8Rng,
    handles: HandleAllocator,
    next_spawn_order: u64,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<SimEvent>,
    drops: Vec<PickupDrop>,
    score: ScoreState,
    player: Option<Entity>,
    viewport_half_extents: Vec2,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut registry = CollisionRegistry::new();
        world_setup::install_pair_rules(&mut registry);

        let director = SpawnDirector::new(config.catalog.waves.clone(), config.catalog.enemy_index());
        let weapons = build_weapons(&config.catalog);

        Self {
            world: World::new(),
            registry,
            weapons,
            director,
            catalog: config.catalog,
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale.clamp(0.0, 4.0),
            seed: config.seed,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            handles: HandleAllocator::default(),
            next_spawn_order: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            drops: Vec::new(),
            score: ScoreState::default(),
            player: None,
            viewport_half_extents: config.viewport_half_extents,
        }
    }

    /// Build an engine from a JSON catalog.
    pub fn from_catalog_json(seed: u64, json: &str) -> Result<Self, String> {
        let catalog = Catalog::from_json(json)?;
        Ok(Self::new(SimConfig {
            seed,
            catalog,
            ..SimConfig::default()
        }))
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one fixed tick (scaled by the time scale) and return the snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        let delta = DT as f64 * self.time_scale;
        self.update(delta as f32)
    }

    /// Advance by an arbitrary `delta` seconds and return the snapshot.
    pub fn update(&mut self, delta: f32) -> FrameSnapshot {
        self.process_commands();

        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        if self.phase == GamePhase::Active && delta > 0.0 {
            self.run_systems(delta);
            self.time.advance(delta as f64);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.director,
            &self.weapons,
            events,
            &self.score,
        )
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn registry(&self) -> &CollisionRegistry {
        &self.registry
    }

    pub fn weapons(&self) -> &WeaponScheduler {
        &self.weapons
    }

    pub fn director(&self) -> &SpawnDirector {
        &self.director
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// Number of enemies currently alive (dying enemies excluded).
    pub fn alive_enemy_count(&self) -> usize {
        self.world
            .query::<&EnemyVitals>()
            .iter()
            .filter(|(_, v)| v.alive)
            .count()
    }

    /// Mark a weapon active. Fails for unknown ids.
    pub fn activate_weapon(&mut self, weapon: WeaponId) -> Result<(), String> {
        if self.weapons.activate(weapon) {
            Ok(())
        } else {
            Err(format!("unknown weapon {}", weapon.0))
        }
    }

    /// Mark a weapon inactive and cut its live beam short.
    pub fn deactivate_weapon(&mut self, weapon: WeaponId) -> Result<(), String> {
        if !self.weapons.deactivate(weapon) {
            return Err(format!("unknown weapon {}", weapon.0));
        }
        systems::beam::expire_weapon(&mut self.world, weapon);
        Ok(())
    }

    /// Raise a weapon one level. Unlocking a locked weapon also activates it.
    pub fn upgrade_weapon(&mut self, weapon: WeaponId) -> Result<u32, String> {
        let before = self
            .weapons
            .slot(weapon)
            .map(|s| s.level)
            .ok_or_else(|| format!("unknown weapon {}", weapon.0))?;
        let level = self
            .weapons
            .upgrade(weapon)
            .ok_or_else(|| format!("unknown weapon {}", weapon.0))?;
        if before == 0 && level > 0 {
            self.weapons.activate(weapon);
        }
        log::debug!("weapon {} upgraded to level {level}", weapon.0);
        Ok(level)
    }

    /// Spawn enemies of a named type at fixed positions (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemies(&mut self, name: &str, positions: &[Vec2]) -> Vec<Entity> {
        let Some(type_id) = self.catalog.enemy_index().lookup(name) else {
            return Vec::new();
        };
        let Some(def) = self.catalog.enemy(type_id).cloned() else {
            return Vec::new();
        };
        positions
            .iter()
            .map(|&pos| {
                let order = self.next_order();
                self.score.enemies_spawned += 1;
                world_setup::spawn_enemy(
                    &mut self.world,
                    &mut self.registry,
                    &mut self.handles,
                    &def,
                    type_id,
                    pos,
                    order,
                )
            })
            .collect()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Failures are logged and dropped.
    fn handle_command(&mut self, command: SimCommand) {
        let result = match command {
            SimCommand::StartRun => {
                if self.phase == GamePhase::MainMenu {
                    self.start_run();
                }
                Ok(())
            }
            SimCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
                Ok(())
            }
            SimCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
                Ok(())
            }
            SimCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
                Ok(())
            }
            SimCommand::Restart => {
                self.clear();
                self.start_run();
                Ok(())
            }
            SimCommand::MovePlayer { x, y } => {
                self.move_player(Vec2::new(x, y));
                Ok(())
            }
            SimCommand::ActivateWeapon { weapon } => self.activate_weapon(weapon),
            SimCommand::DeactivateWeapon { weapon } => self.deactivate_weapon(weapon),
            SimCommand::UpgradeWeapon { weapon } => self.upgrade_weapon(weapon).map(|_| ()),
        };

        if let Err(e) = result {
            log::warn!("command rejected: {e}");
        }
    }

    fn start_run(&mut self) {
        let player = world_setup::spawn_player(&mut self.world, &mut self.registry, Vec2::ZERO);
        self.player = Some(player);
        for id in self.starting_weapons() {
            self.weapons.activate(id);
        }
        self.phase = GamePhase::Active;
        log::info!("run started (seed {})", self.seed);
    }

    /// Synchronously drop every live entity and reset clocks, timers and score.
    fn clear(&mut self) {
        systems::cleanup::clear_all(&mut self.world, &mut self.registry, None, &mut self.events);
        self.registry.clear();
        self.player = None;
        self.director.reset();
        self.weapons = build_weapons(&self.catalog);
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.next_spawn_order = 0;
        self.drops.clear();
        self.despawn_buffer.clear();
        self.score = ScoreState::default();
        self.phase = GamePhase::MainMenu;
        log::info!("run cleared");
    }

    fn starting_weapons(&self) -> Vec<WeaponId> {
        self.weapons
            .slots()
            .iter()
            .filter(|s| s.level > 0)
            .map(|s| s.def.id)
            .collect()
    }

    fn move_player(&mut self, to: Vec2) {
        if !to.is_finite() {
            log::warn!("ignoring non-finite player position {to:?}");
            return;
        }
        let Some(player) = self.player else {
            return;
        };
        if let Ok(mut pos) = self.world.get::<&mut Position>(player) {
            *pos = Position::from(to);
        }
    }

    fn player_position(&self) -> Vec2 {
        self.world
            .query::<(&Player, &Position)>()
            .iter()
            .next()
            .map(|(_, (_, pos))| pos.to_vec2())
            .unwrap_or_default()
    }

    fn next_order(&mut self) -> u64 {
        let order = self.next_spawn_order;
        self.next_spawn_order += 1;
        order
    }

    /// Alive enemies with their positions, oldest first.
    fn alive_enemies(&self) -> Vec<(Entity, Vec2, SpawnOrder)> {
        let mut enemies: Vec<(Entity, Vec2, SpawnOrder)> = self
            .world
            .query::<(&Position, &EnemyVitals, &SpawnOrder)>()
            .iter()
            .filter(|(_, (_, vitals, _))| vitals.alive)
            .map(|(e, (pos, _, order))| (e, pos.to_vec2(), *order))
            .collect();
        enemies.sort_by_key(|(_, _, order)| *order);
        enemies
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        let player = self.player_position();

        // 1. Spawn director
        self.run_director(player, dt);
        // 2. Enemy movement, death countdowns, player invulnerability
        systems::enemy::run(&mut self.world, player, dt);
        systems::enemy::tick_player(&mut self.world, dt);
        // 3. Weapon scheduler fires, then projectiles and beams move
        self.run_weapons(player, dt);
        systems::projectile::run(&mut self.world, player, dt, &mut self.events);
        systems::beam::run(
            &mut self.world,
            &self.registry,
            player,
            dt,
            &mut self.events,
            &mut self.score,
            &mut self.drops,
        );
        // 4. Collision registry pass
        let contacts = self.registry.tick(&self.world);
        let summary = systems::contact::resolve(
            &mut self.world,
            &contacts,
            &mut self.events,
            &mut self.score,
            &mut self.drops,
        );
        // 5. Cleanup, then drop experience gems for this tick's kills
        systems::cleanup::run(
            &mut self.world,
            &mut self.registry,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        for drop in std::mem::take(&mut self.drops) {
            world_setup::spawn_pickup(
                &mut self.world,
                &mut self.registry,
                &mut self.handles,
                drop.position,
                drop.experience,
            );
        }

        if summary.player_died {
            self.phase = GamePhase::GameOver;
            log::info!("player died at {:.1}s", self.time.elapsed_secs);
        }
    }

    fn run_director(&mut self, player: Vec2, dt: f32) {
        let alive: Vec<Entity> = self.alive_enemies().into_iter().map(|(e, _, _)| e).collect();
        let viewport = CenteredViewport {
            center: player,
            half_extents: self.viewport_half_extents,
        };
        let ctx = DirectorContext {
            player,
            viewport: &viewport,
            alive: &alive,
        };
        let out = self.director.update(dt, &ctx, &mut self.rng);

        if out.events.contains(&SimEvent::GameComplete) && self.phase == GamePhase::Active {
            self.phase = GamePhase::Complete;
        }
        self.events.extend(out.events);

        for entity in out.culls {
            if let Ok(mut vitals) = self.world.get::<&mut EnemyVitals>(entity) {
                vitals.alive = false;
                vitals.removal_countdown = Some(0.0);
            }
            if let Ok(handle) = self.world.get::<&VisualHandle>(entity).map(|h| *h) {
                self.events.push(SimEvent::EnemyCulled { handle });
            }
        }

        for request in out.spawns {
            let Some(def) = self.catalog.enemy(request.enemy_type).cloned() else {
                log::warn!("no definition for enemy type {:?}", request.enemy_type);
                continue;
            };
            let order = self.next_order();
            let entity = world_setup::spawn_enemy(
                &mut self.world,
                &mut self.registry,
                &mut self.handles,
                &def,
                request.enemy_type,
                request.position,
                order,
            );
            self.score.enemies_spawned += 1;

            let Ok(handle) = self.world.get::<&VisualHandle>(entity).map(|h| *h) else {
                continue;
            };
            let position = Position::from(request.position);
            if request.boss {
                log::info!("boss {} spawned", def.name);
                self.events.push(SimEvent::BossSpawned { handle, position });
            }
            self.events.push(SimEvent::EnemySpawned {
                handle,
                enemy_type: request.enemy_type,
                position,
            });
        }
    }

    fn run_weapons(&mut self, player: Vec2, dt: f32) {
        let enemies: Vec<EnemyTarget> = self
            .alive_enemies()
            .into_iter()
            .map(|(entity, position, _)| EnemyTarget { entity, position })
            .collect();
        let live_beams = systems::beam::live_beam_weapons(&self.world);
        let ctx = FiringContext {
            caster: player,
            enemies: &enemies,
            live_beams: &live_beams,
        };
        let orders = self.weapons.tick(dt, &ctx);

        let mut fired: Vec<(WeaponId, u32)> = Vec::new();
        for order in orders {
            let weapon = match order {
                FireOrder::Projectile {
                    weapon,
                    origin,
                    target,
                    stats,
                    exclude,
                } => {
                    world_setup::spawn_projectile(
                        &mut self.world,
                        &mut self.registry,
                        &mut self.handles,
                        weapon,
                        origin,
                        target,
                        &stats,
                        exclude,
                    );
                    weapon
                }
                FireOrder::Beam {
                    weapon,
                    anchor,
                    start_angle,
                    stats,
                } => {
                    world_setup::spawn_beam(
                        &mut self.world,
                        &mut self.registry,
                        &mut self.handles,
                        weapon,
                        anchor,
                        start_angle,
                        &stats,
                    );
                    weapon
                }
            };
            self.score.shots_fired += 1;
            match fired.iter_mut().find(|(id, _)| *id == weapon) {
                Some((_, shots)) => *shots += 1,
                None => fired.push((weapon, 1)),
            }
        }

        for (weapon, shots) in fired {
            self.events.push(SimEvent::WeaponFired { weapon, shots });
        }
    }
}

/// A fresh scheduler with every catalog weapon registered, inactive.
fn build_weapons(catalog: &Catalog) -> WeaponScheduler {
    let mut weapons = WeaponScheduler::new();
    for def in &catalog.weapons {
        weapons.register_weapon(def.clone());
    }
    weapons
}
