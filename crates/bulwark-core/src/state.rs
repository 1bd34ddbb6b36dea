//! Game state snapshot — the read-only projection handed to a rendering
//! collaborator each frame.

use serde::{Deserialize, Serialize};

use crate::enums::{Allegiance, GamePhase, PowerUpKind, ThreatTier};

/// Complete visible state, built fresh on demand and safe to serialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub tick: u64,
    pub elapsed_secs: f32,
    pub phase: GamePhase,
    /// 1-based wave number; 0 before the first wave starts.
    pub wave_number: u32,
    /// Total waves in the configured table.
    pub wave_total: u32,
    pub score: ScoreView,
    pub batteries: Vec<BatteryView>,
    pub installations: Vec<InstallationView>,
    pub enemies: Vec<EnemyView>,
    pub interceptors: Vec<InterceptorView>,
    pub explosions: Vec<ExplosionView>,
    pub particles: Vec<ParticleView>,
    pub popups: Vec<PopupView>,
    pub power_ups: Vec<PowerUpView>,
}

/// Score counters for display and end-of-game submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub shots: u32,
    pub hits: u32,
    /// hits / shots, 0 when no shots fired.
    pub accuracy: f32,
    pub chain: u32,
    /// Set on entering a terminal phase; the number a host submits.
    pub final_score: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatteryView {
    pub x: f32,
    pub y: f32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    pub reload_fraction: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstallationView {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub tier: ThreatTier,
    pub progress: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterceptorView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub target_x: f32,
    pub target_y: f32,
    pub progress: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub allegiance: Allegiance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub x: f32,
    pub y: f32,
    pub lifetime: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopupView {
    pub x: f32,
    pub y: f32,
    pub amount: u32,
    pub lifetime: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub id: u32,
    pub kind: PowerUpKind,
    pub x: f32,
    pub y: f32,
}
