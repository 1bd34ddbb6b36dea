//! Game events emitted by the engine and drained by the host each frame.
//!
//! Events carry the tick they occurred on so a host can sequence audio and
//! UI without diffing snapshots.

use serde::{Deserialize, Serialize};

use crate::enums::{GamePhase, PowerUpKind};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhaseChangeEvent {
    pub from: GamePhase,
    pub to: GamePhase,
    pub tick: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaveStartedEvent {
    pub wave_number: u32,
    pub enemy_count: u32,
    pub label: String,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaveCompleteEvent {
    pub wave_number: u32,
    pub survival_bonus: u32,
    pub perfect_bonus: u32,
    pub chain_bonus: u32,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyDestroyedEvent {
    pub enemy_id: u32,
    pub points: u32,
    /// Chain level credited for this kill (pre-increment).
    pub chain: u32,
    pub x: f32,
    pub y: f32,
    pub tick: u64,
}

/// An enemy round reached the ground uncontested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ImpactEvent {
    pub enemy_id: u32,
    pub x: f32,
    pub y: f32,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct InstallationDestroyedEvent {
    pub installation_index: u32,
    pub tick: u64,
}

/// A hostile blast drained ammunition from a battery.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BatterySplashedEvent {
    pub battery_index: u32,
    pub ammo_lost: u32,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUpCollectedEvent {
    pub kind: PowerUpKind,
    pub tick: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GameOverEvent {
    pub won: bool,
    pub final_score: u32,
    pub tick: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    PhaseChange(PhaseChangeEvent),
    WaveStarted(WaveStartedEvent),
    WaveComplete(WaveCompleteEvent),
    EnemyDestroyed(EnemyDestroyedEvent),
    Impact(ImpactEvent),
    InstallationDestroyed(InstallationDestroyedEvent),
    BatterySplashed(BatterySplashedEvent),
    PowerUpCollected(PowerUpCollectedEvent),
    GameOver(GameOverEvent),
}
