//! Enemy behavior for HORDE.
//!
//! Implements the per-pattern movement state machines and the shared
//! damage contract. No ECS dependency; operates on plain data.

pub mod movement;
pub mod profiles;
pub mod vitals;

pub use horde_core as core;
