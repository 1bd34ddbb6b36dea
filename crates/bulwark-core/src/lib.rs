//! Core types and definitions for the Bulwark defense simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! entity structs, commands, events, snapshot views, constants, and the
//! wave table. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
pub mod waves;
