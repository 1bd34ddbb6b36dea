//! Per-frame pool compaction: filter out inactive and expired entries.
//! Interceptors are consumed by the detonation system, so they are not
//! handled here.

use crate::pools::Pools;

pub fn run(pools: &mut Pools) {
    pools.enemies.retain(|enemy| enemy.active);
    pools.explosions.retain(|explosion| !explosion.expired());
    pools.particles.retain(|particle| particle.lifetime > 0.0);
    pools.popups.retain(|popup| popup.lifetime > 0.0);
    pools.power_ups.retain(|power_up| power_up.lifetime > 0.0);
}
