//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Run length in game-minutes. Crossing it completes the game.
pub const GAME_DURATION_MINUTES: f64 = 30.0;

// --- Player ---

pub const PLAYER_MAX_HEALTH: i32 = 100;

pub const PLAYER_COLLISION_RADIUS: f32 = 16.0;

/// Invulnerability after taking contact damage (seconds).
pub const PLAYER_INVULNERABILITY_SECS: f32 = 0.5;

/// Experience needed to leave level `n` is `BASE + PER_LEVEL * n`.
pub const LEVEL_XP_BASE: u32 = 5;
pub const LEVEL_XP_PER_LEVEL: u32 = 10;

// --- Enemies ---

/// Time a dead enemy lingers (death animation, damage number) before removal.
pub const ENEMY_DEATH_GRACE_SECS: f32 = 0.3;

/// Fallback collision radius when an enemy definition omits one.
pub const ENEMY_DEFAULT_RADIUS: f32 = 14.0;

// --- Hop movement ---

/// Rest time between hops (seconds).
pub const HOP_IDLE_SECS: f32 = 0.8;

/// Time spent airborne per hop (seconds).
pub const HOP_AIRBORNE_SECS: f32 = 0.5;

/// Ground speed while airborne, as a multiple of the enemy's base speed.
pub const HOP_SPEED_FACTOR: f32 = 2.2;

/// Peak visual lift of a hop (pixels).
pub const HOP_ARC_HEIGHT: f32 = 28.0;

/// Duration of the squash-and-stretch landing effect (seconds).
pub const HOP_LANDING_SECS: f32 = 0.15;

/// Horizontal stretch at the moment of landing (vertical is the inverse).
pub const HOP_LANDING_SQUASH: f32 = 1.25;

// --- Projectiles ---

/// Default projectile collision radius.
pub const PROJECTILE_DEFAULT_RADIUS: f32 = 8.0;

/// Default projectile lifetime (seconds).
pub const PROJECTILE_DEFAULT_LIFETIME_SECS: f32 = 3.0;

// --- Beam ---

/// Base angular rate at level 1 (degrees per second).
pub const BEAM_BASE_ROTATION_DEG_PER_SEC: f32 = 120.0;

/// Gap between the anchor and the start of the damaging rectangle (pixels).
pub const BEAM_FORWARD_OFFSET: f32 = 20.0;

/// Half-width of the beam rectangle along its local y axis (pixels).
pub const BEAM_HALF_WIDTH: f32 = 12.0;

/// Per-(beam, enemy) damage cooldown (seconds).
pub const BEAM_HIT_COOLDOWN_SECS: f64 = 0.2;

/// Cooldown entries older than this are purged (seconds).
pub const BEAM_COOLDOWN_PURGE_SECS: f64 = 1.0;

/// Length of the creation animation (seconds).
pub const BEAM_CREATION_SECS: f32 = 0.25;

/// Fraction of the revolution after which the destruction animation starts.
pub const BEAM_DESTRUCTION_PROGRESS: f32 = 0.9;

/// Length of the destruction animation (seconds).
pub const BEAM_DESTRUCTION_SECS: f32 = 0.3;

/// Beam range and rotation multiplier at max level (level 1 is 1x).
pub const BEAM_MAX_LEVEL_MULTIPLIER: f32 = 3.0;

// --- Spawn director ---

/// How far outside the visible bounds edge spawns are placed (pixels).
pub const EDGE_SPAWN_MARGIN: f32 = 60.0;

/// Circle formation ring radius band (pixels).
pub const CIRCLE_FORMATION_RADIUS_MIN: f32 = 380.0;
pub const CIRCLE_FORMATION_RADIUS_MAX: f32 = 460.0;

/// Circle formation base angle rate (radians per second).
pub const CIRCLE_FORMATION_ROTATION_RATE: f32 = 0.5;

/// Random spread around the circle formation base angle (radians).
pub const CIRCLE_FORMATION_JITTER: f32 = 0.35;

/// Live enemies kept when a boss arrives; the rest are culled.
pub const BOSS_CULL_KEEP: usize = 10;

/// Boss spawn distance band from the player (pixels).
pub const BOSS_SPAWN_DISTANCE_MIN: f32 = 600.0;
pub const BOSS_SPAWN_DISTANCE_MAX: f32 = 800.0;

/// Swarm burst interval (seconds) and size.
pub const SWARM_INTERVAL_SECS: f32 = 2.0;
pub const SWARM_BURST_SIZE: u32 = 5;

/// Spread of a swarm cluster around its edge anchor (pixels).
pub const SWARM_CLUSTER_SPREAD: f32 = 40.0;

/// Final assault burst interval (seconds) and size.
pub const FINAL_ASSAULT_INTERVAL_SECS: f32 = 0.3;
pub const FINAL_ASSAULT_BURST_SIZE: u32 = 3;

// --- World ---

/// Default half extents of the visible area (pixels), i.e. a 1280x720 screen.
pub const VIEWPORT_HALF_WIDTH: f32 = 640.0;
pub const VIEWPORT_HALF_HEIGHT: f32 = 360.0;

/// Projectiles further than this from the player are retired.
pub const PROJECTILE_CULL_DISTANCE: f32 = 2000.0;
