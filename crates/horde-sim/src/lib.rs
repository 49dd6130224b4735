//! Combat simulation for HORDE.
//!
//! Owns the hecs ECS world, the collision registry, the weapon scheduler and
//! the spawn director, runs them in a fixed order every tick, and produces
//! FrameSnapshots for the renderer.

pub mod collision;
pub mod combat;
pub mod engine;
pub mod scenario;
pub mod systems;
pub mod viewport;
pub mod weapons;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use horde_core as core;
