//! Typed entity pools.
//!
//! One `Vec` per entity kind, compacted once per frame by the cleanup
//! system. Identifiers are handed out from a monotonically increasing
//! counter, so no entity is ever reused by identity. Cosmetic pools
//! (particles, popups) are distinct types that collision and scoring
//! never read.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::{
    EnemyProjectile, Explosion, Interceptor, Particle, PowerUp, ScorePopup,
};
use bulwark_core::constants::*;
use bulwark_core::enums::{PowerUpKind, ThreatTier};

#[derive(Debug, Default)]
pub struct Pools {
    pub enemies: Vec<EnemyProjectile>,
    pub interceptors: Vec<Interceptor>,
    pub explosions: Vec<Explosion>,
    pub particles: Vec<Particle>,
    pub popups: Vec<ScorePopup>,
    pub power_ups: Vec<PowerUp>,
    next_id: u32,
}

impl Pools {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn spawn_enemy(
        &mut self,
        origin: Vec2,
        target: Vec2,
        tier: ThreatTier,
        speed: f32,
    ) -> u32 {
        let id = self.fresh_id();
        self.enemies.push(EnemyProjectile {
            id,
            origin,
            target,
            position: origin,
            tier,
            speed,
            progress: 0.0,
            active: true,
        });
        id
    }

    pub fn spawn_interceptor(&mut self, origin: Vec2, target: Vec2) -> u32 {
        let id = self.fresh_id();
        self.interceptors.push(Interceptor {
            id,
            origin,
            target,
            position: origin,
            progress: 0.0,
        });
        id
    }

    pub fn spawn_friendly_explosion(&mut self, center: Vec2) -> u32 {
        let id = self.fresh_id();
        self.explosions.push(Explosion::friendly(id, center));
        id
    }

    pub fn spawn_hostile_explosion(&mut self, center: Vec2) -> u32 {
        let id = self.fresh_id();
        self.explosions.push(Explosion::hostile(id, center));
        id
    }

    /// Scatter a ring of debris particles around a point.
    pub fn burst_particles(&mut self, rng: &mut ChaCha8Rng, center: Vec2, count: u32) {
        for _ in 0..count {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(0.3..1.0) * PARTICLE_BURST_SPEED;
            self.particles.push(Particle {
                position: center,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                lifetime: PARTICLE_LIFETIME_SECS,
            });
        }
    }

    pub fn spawn_popup(&mut self, position: Vec2, amount: u32) {
        self.popups.push(ScorePopup {
            position,
            amount,
            lifetime: POPUP_LIFETIME_SECS,
        });
    }

    pub fn spawn_power_up(&mut self, kind: PowerUpKind, position: Vec2) -> u32 {
        let id = self.fresh_id();
        self.power_ups.push(PowerUp {
            id,
            kind,
            position,
            lifetime: POWERUP_LIFETIME_SECS,
        });
        id
    }

    /// Wave-end condition: nothing left that can still deal or take damage.
    pub fn combat_clear(&self) -> bool {
        self.enemies.is_empty() && self.explosions.is_empty()
    }
}
