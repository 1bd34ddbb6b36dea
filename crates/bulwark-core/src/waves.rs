//! Declarative wave-balance table.
//!
//! One row per wave, indexed by wave number; exhausting the table signals
//! victory. Kept as data rather than branching so balance can be tested
//! (and replaced, in tests) in isolation from the resolver.

use serde::Serialize;

/// A single wave definition.
#[derive(Debug, Clone, Serialize)]
pub struct WaveConfig {
    /// Number of enemy rounds to schedule.
    pub enemy_count: u32,
    /// Base travel speed (units/second) before tier scaling.
    pub base_speed: f32,
    /// Nominal delay between consecutive spawns (seconds).
    pub spawn_delay_secs: f32,
    /// Narrative banner shown by the host at wave start.
    pub label: &'static str,
}

/// The standard eight-wave campaign with escalating pressure.
pub fn standard_campaign() -> Vec<WaveConfig> {
    vec![
        WaveConfig {
            enemy_count: 6,
            base_speed: 55.0,
            spawn_delay_secs: 1.8,
            label: "Opening salvo",
        },
        WaveConfig {
            enemy_count: 8,
            base_speed: 62.0,
            spawn_delay_secs: 1.6,
            label: "Probing attack",
        },
        WaveConfig {
            enemy_count: 11,
            base_speed: 70.0,
            spawn_delay_secs: 1.4,
            label: "Sustained barrage",
        },
        WaveConfig {
            enemy_count: 14,
            base_speed: 78.0,
            spawn_delay_secs: 1.2,
            label: "Saturation raid",
        },
        WaveConfig {
            enemy_count: 17,
            base_speed: 86.0,
            spawn_delay_secs: 1.0,
            label: "Night offensive",
        },
        WaveConfig {
            enemy_count: 20,
            base_speed: 95.0,
            spawn_delay_secs: 0.9,
            label: "Full assault",
        },
        WaveConfig {
            enemy_count: 24,
            base_speed: 104.0,
            spawn_delay_secs: 0.8,
            label: "Desperation strike",
        },
        WaveConfig {
            enemy_count: 28,
            base_speed: 114.0,
            spawn_delay_secs: 0.7,
            label: "Final onslaught",
        },
    ]
}
