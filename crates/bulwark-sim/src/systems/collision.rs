//! Friendly blast resolution: explosion-major, projectile-minor.
//!
//! Every friendly explosion is tested against every still-active enemy
//! round. A round is deactivated on its first match, so a second
//! overlapping blast in the same frame can never double-count it.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::Battery;
use bulwark_core::constants::*;
use bulwark_core::enums::{Allegiance, PowerUpKind, ThreatTier};
use bulwark_core::events::{EnemyDestroyedEvent, GameEvent, PowerUpCollectedEvent};

use crate::pools::Pools;
use crate::score::ScoreState;

pub fn run(
    pools: &mut Pools,
    batteries: &mut [Battery],
    score: &mut ScoreState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    tick: u64,
) {
    let blasts: Vec<(Vec2, f32)> = pools
        .explosions
        .iter()
        .filter(|explosion| {
            explosion.allegiance == Allegiance::Friendly && explosion.radius > 0.0
        })
        .map(|explosion| (explosion.center, explosion.radius))
        .collect();

    if blasts.is_empty() {
        return;
    }

    // Mark kills in resolution order, then apply scoring and cosmetics.
    let mut kills: Vec<(u32, Vec2, ThreatTier)> = Vec::new();
    for &(center, radius) in &blasts {
        for enemy in &mut pools.enemies {
            if !enemy.active {
                continue;
            }
            if enemy.position.distance(center) <= radius + ENEMY_HIT_RADIUS {
                enemy.active = false;
                kills.push((enemy.id, enemy.position, enemy.tier));
            }
        }
    }

    for (enemy_id, position, tier) in kills {
        let chain = score.chain;
        let points = score.record_kill(tier);
        pools.burst_particles(rng, position, PARTICLES_PER_KILL);
        pools.spawn_popup(position, points);
        if rng.gen::<f32>() < POWERUP_DROP_CHANCE {
            let kind = if rng.gen_bool(0.5) {
                PowerUpKind::AmmoCache
            } else {
                PowerUpKind::BonusPoints
            };
            pools.spawn_power_up(kind, position);
        }
        events.push(GameEvent::EnemyDestroyed(EnemyDestroyedEvent {
            enemy_id,
            points,
            chain,
            x: position.x,
            y: position.y,
            tick,
        }));
    }

    // Friendly blasts also scoop up falling power-ups.
    let mut collected: Vec<(PowerUpKind, Vec2)> = Vec::new();
    for power_up in &mut pools.power_ups {
        if power_up.lifetime <= 0.0 {
            continue;
        }
        let caught = blasts
            .iter()
            .any(|&(center, radius)| {
                power_up.position.distance(center) <= radius + POWERUP_PICKUP_RADIUS
            });
        if caught {
            power_up.lifetime = 0.0;
            collected.push((power_up.kind, power_up.position));
        }
    }

    for (kind, position) in collected {
        match kind {
            PowerUpKind::AmmoCache => {
                for battery in batteries.iter_mut() {
                    if !battery.reloading {
                        battery.ammo = (battery.ammo + POWERUP_AMMO_BONUS).min(battery.max_ammo);
                    }
                }
            }
            PowerUpKind::BonusPoints => {
                score.add_bonus(POWERUP_SCORE_BONUS);
                pools.spawn_popup(position, POWERUP_SCORE_BONUS);
            }
        }
        events.push(GameEvent::PowerUpCollected(PowerUpCollectedEvent {
            kind,
            tick,
        }));
    }
}
