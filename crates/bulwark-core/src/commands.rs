//! Player commands queued into the engine and drained at the tick boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PlayerCommand {
    /// Begin wave 1 from the idle phase.
    StartGame,
    /// Attempt an interception launch at a world point. Silently ignored
    /// when rate-limited or when no battery can answer.
    Fire { x: f32, y: f32 },
}
