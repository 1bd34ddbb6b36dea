//! Kinematic advancement for every pool.
//!
//! Moving rounds travel by path fraction: progress grows by
//! `speed * dt / path_length` and position is the clamped lerp of the
//! origin/target segment, so progress is monotone non-decreasing until
//! the entity is removed.

use bulwark_core::constants::*;
use bulwark_core::types::lerp_clamped;

use crate::pools::Pools;

pub fn run(pools: &mut Pools, dt: f32) {
    for enemy in &mut pools.enemies {
        let path = enemy.origin.distance(enemy.target).max(1.0);
        enemy.progress += enemy.speed * dt / path;
        enemy.position = lerp_clamped(enemy.origin, enemy.target, enemy.progress);
    }

    for interceptor in &mut pools.interceptors {
        let path = interceptor.origin.distance(interceptor.target).max(1.0);
        interceptor.progress += INTERCEPTOR_SPEED * dt / path;
        interceptor.position =
            lerp_clamped(interceptor.origin, interceptor.target, interceptor.progress);
    }

    for explosion in &mut pools.explosions {
        explosion.lifetime -= dt;
        explosion.radius = explosion.envelope_radius();
    }

    for particle in &mut pools.particles {
        particle.velocity.y -= PARTICLE_GRAVITY * dt;
        particle.position += particle.velocity * dt;
        particle.lifetime -= dt;
    }

    for popup in &mut pools.popups {
        popup.position.y += POPUP_RISE_SPEED * dt;
        popup.lifetime -= dt;
    }

    for power_up in &mut pools.power_ups {
        power_up.position.y = (power_up.position.y - POWERUP_FALL_SPEED * dt).max(GROUND_Y);
        power_up.lifetime -= dt;
    }
}
