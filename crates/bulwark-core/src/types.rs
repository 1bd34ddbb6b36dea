//! Fundamental geometric and simulation-time types.
//!
//! Positions and velocities are `glam::Vec2` in world units
//! (x = right, y = up, ground at `constants::GROUND_Y`).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking. The host supplies the per-frame delta, so
/// elapsed time accumulates whatever the host's render loop produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f32,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Linear interpolation between two points with `t` clamped to [0, 1].
///
/// `Vec2::lerp` extrapolates outside the unit interval; moving entities
/// must never overshoot their target point, so all kinematics go through
/// this clamped version.
pub fn lerp_clamped(start: Vec2, end: Vec2, t: f32) -> Vec2 {
    start.lerp(end, t.clamp(0.0, 1.0))
}
