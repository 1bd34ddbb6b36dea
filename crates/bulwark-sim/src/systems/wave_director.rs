//! Wave director — pre-rolls a spawn schedule at wave start and releases
//! due entries each tick.
//!
//! Everything random about a spawn (offset jitter, origin, target, tier)
//! is rolled when the schedule is built, so release itself is a pure
//! clock comparison and scheduled spawns are never cancelled by wave-end.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::{Battery, Installation};
use bulwark_core::constants::*;
use bulwark_core::enums::ThreatTier;
use bulwark_core::waves::WaveConfig;

use crate::pools::Pools;

/// A single pre-rolled enemy spawn.
#[derive(Debug, Clone, Copy)]
pub struct PendingSpawn {
    /// Simulation time (elapsed seconds) at which this spawn releases.
    pub due_at: f32,
    pub origin: Vec2,
    pub target: Vec2,
    pub tier: ThreatTier,
    pub speed: f32,
    pub released: bool,
}

/// The full spawn schedule for one wave.
#[derive(Debug, Clone, Default)]
pub struct SpawnSchedule {
    pub pending: Vec<PendingSpawn>,
}

impl SpawnSchedule {
    /// Build the schedule for a wave: `count` spawns at offsets
    /// `i·delay + jitter`, targets weighted toward active structures,
    /// tiers drawn from the fixed weighted distribution.
    pub fn for_wave(
        config: &WaveConfig,
        installations: &[Installation],
        batteries: &[Battery],
        rng: &mut ChaCha8Rng,
        now: f32,
    ) -> Self {
        let structures: Vec<Vec2> = installations
            .iter()
            .filter(|installation| installation.active)
            .map(|installation| installation.position)
            .chain(batteries.iter().map(|battery| battery.position))
            .collect();

        let jitter_span = config.spawn_delay_secs * SPAWN_JITTER_FRAC;
        let mut pending = Vec::with_capacity(config.enemy_count as usize);
        for i in 0..config.enemy_count {
            // A zero inter-spawn delay means one simultaneous burst; there
            // is no jitter range to sample from.
            let jitter = if jitter_span > 0.0 {
                rng.gen_range(0.0..jitter_span)
            } else {
                0.0
            };
            let due_at = now + i as f32 * config.spawn_delay_secs + jitter;

            let origin = Vec2::new(
                rng.gen_range(SPAWN_EDGE_MARGIN..WORLD_WIDTH - SPAWN_EDGE_MARGIN),
                WORLD_HEIGHT,
            );

            let target = if !structures.is_empty()
                && rng.gen::<f32>() < STRUCTURE_TARGET_WEIGHT
            {
                structures[rng.gen_range(0..structures.len())]
            } else {
                Vec2::new(
                    rng.gen_range(SPAWN_EDGE_MARGIN..WORLD_WIDTH - SPAWN_EDGE_MARGIN),
                    GROUND_Y,
                )
            };

            let tier = roll_tier(rng);
            pending.push(PendingSpawn {
                due_at,
                origin,
                target,
                tier,
                speed: config.base_speed * tier.speed_factor(),
                released: false,
            });
        }

        Self { pending }
    }

    pub fn all_released(&self) -> bool {
        self.pending.iter().all(|spawn| spawn.released)
    }
}

/// Release any spawns that have come due.
pub fn run(pools: &mut Pools, schedule: &mut SpawnSchedule, now: f32) {
    for spawn in &mut schedule.pending {
        if !spawn.released && now >= spawn.due_at {
            pools.spawn_enemy(spawn.origin, spawn.target, spawn.tier, spawn.speed);
            spawn.released = true;
        }
    }
}

/// Weighted tier draw: common tier most likely, highest value rarest.
fn roll_tier(rng: &mut ChaCha8Rng) -> ThreatTier {
    let roll: f32 = rng.gen();
    if roll < TIER_WEIGHT_STANDARD {
        ThreatTier::Standard
    } else if roll < TIER_WEIGHT_STANDARD + TIER_WEIGHT_SWIFT {
        ThreatTier::Swift
    } else if roll < TIER_WEIGHT_STANDARD + TIER_WEIGHT_SWIFT + TIER_WEIGHT_HEAVY {
        ThreatTier::Heavy
    } else {
        ThreatTier::Elite
    }
}
