//! Core types and definitions for the HORDE combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, catalogs, frame snapshots, events, and constants.
//! It has no dependency on a renderer or any runtime framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
