//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state). Exactly one is current at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fresh simulation, waiting for `StartGame`.
    #[default]
    Idle,
    /// A wave is running: spawns pending or entities still resolving.
    WaveActive,
    /// All spawns resolved; end-of-wave bonuses being awarded.
    WaveComplete,
    /// Inter-wave pause before the next wave begins.
    WaveTransition,
    /// Every installation destroyed. Terminal.
    Defeat,
    /// Wave table exhausted with at least one installation alive. Terminal.
    Victory,
}

impl GamePhase {
    /// Terminal phases stop all further simulation advancement.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Defeat | GamePhase::Victory)
    }
}

/// Enemy projectile tier: ordinal value, point value, and speed profile.
/// Drawn from a fixed weighted distribution at spawn scheduling time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThreatTier {
    /// Common round, baseline speed.
    #[default]
    Standard,
    /// Fast but low-value.
    Swift,
    /// Slow, high-value.
    Heavy,
    /// Rare, fast, highest value.
    Elite,
}

impl ThreatTier {
    /// Points awarded for an intercept, before chain bonus.
    pub fn point_value(&self) -> u32 {
        match self {
            ThreatTier::Standard => 25,
            ThreatTier::Swift => 50,
            ThreatTier::Heavy => 75,
            ThreatTier::Elite => 150,
        }
    }

    /// Multiplier applied to the wave's base enemy speed.
    pub fn speed_factor(&self) -> f32 {
        match self {
            ThreatTier::Standard => 1.0,
            ThreatTier::Swift => 1.4,
            ThreatTier::Heavy => 0.8,
            ThreatTier::Elite => 1.25,
        }
    }
}

/// Whether an explosion damages enemies (friendly) or ground structures
/// (hostile). The collision resolver only ever reads friendly explosions;
/// the damage system only ever reads hostile ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Allegiance {
    Friendly,
    Hostile,
}

/// Power-up pickup variety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Tops up every battery's ammunition by a fixed amount.
    AmmoCache,
    /// Flat score award.
    BonusPoints,
}
