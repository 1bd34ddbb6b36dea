//! Headless simulation engine for the Bulwark defense core.
//!
//! Owns the typed entity pools, runs the per-frame systems in a fixed
//! order, and produces `GameSnapshot`s for a rendering collaborator.
//! Completely headless (no I/O, no framework dependency), enabling
//! deterministic testing.

pub mod engine;
pub mod pools;
pub mod score;
pub mod systems;

pub use bulwark_core as core;
pub use engine::{DefenseEngine, SimConfig};

#[cfg(test)]
mod tests;
