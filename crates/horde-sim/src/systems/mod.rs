//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only)
//! plus whatever engine-owned state they need. The spawn director is the one
//! stateful exception; its per-window timers live in [`SpawnDirector`].
//!
//! [`SpawnDirector`]: spawn_director::SpawnDirector

pub mod beam;
pub mod cleanup;
pub mod contact;
pub mod enemy;
pub mod projectile;
pub mod snapshot;
pub mod spawn_director;
