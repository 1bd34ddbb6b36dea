//! Entity structs held in the simulation's typed pools.
//!
//! Mechanical entities (projectiles, interceptors, explosions, batteries,
//! installations) drive collision and scoring. Cosmetic entities (particles,
//! score popups) are separate types so they can never feed back into game
//! logic.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Allegiance, PowerUpKind, ThreatTier};

/// An inbound enemy round travelling from its origin to a ground target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyProjectile {
    pub id: u32,
    pub origin: Vec2,
    pub target: Vec2,
    pub position: Vec2,
    pub tier: ThreatTier,
    /// Travel speed in units/second (wave base speed × tier factor).
    pub speed: f32,
    /// Path fraction in [0, 1]; monotone non-decreasing until removal.
    pub progress: f32,
    /// Cleared on interception or arrival; inactive rounds are compacted
    /// out at the end of the frame.
    pub active: bool,
}

/// A player-commanded round in flight from a battery to a target point.
/// Converts into a friendly [`Explosion`] when progress reaches 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor {
    pub id: u32,
    pub origin: Vec2,
    pub target: Vec2,
    pub position: Vec2,
    pub progress: f32,
}

/// An expanding/contracting blast circle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub id: u32,
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub lifetime: f32,
    pub initial_lifetime: f32,
    pub allegiance: Allegiance,
    /// Hostile blasts apply ground damage exactly once.
    pub damage_dealt: bool,
}

impl Explosion {
    pub fn friendly(id: u32, center: Vec2) -> Self {
        Self {
            id,
            center,
            radius: 0.0,
            max_radius: FRIENDLY_EXPLOSION_MAX_RADIUS,
            lifetime: FRIENDLY_EXPLOSION_LIFETIME_SECS,
            initial_lifetime: FRIENDLY_EXPLOSION_LIFETIME_SECS,
            allegiance: Allegiance::Friendly,
            damage_dealt: false,
        }
    }

    pub fn hostile(id: u32, center: Vec2) -> Self {
        Self {
            id,
            center,
            radius: 0.0,
            max_radius: HOSTILE_EXPLOSION_MAX_RADIUS,
            lifetime: HOSTILE_EXPLOSION_LIFETIME_SECS,
            initial_lifetime: HOSTILE_EXPLOSION_LIFETIME_SECS,
            allegiance: Allegiance::Hostile,
            damage_dealt: false,
        }
    }

    /// Remaining-life ratio in [0, 1].
    pub fn life_ratio(&self) -> f32 {
        if self.initial_lifetime <= 0.0 {
            return 0.0;
        }
        (self.lifetime / self.initial_lifetime).clamp(0.0, 1.0)
    }

    /// Radius from the three-phase envelope: expand over the first 30% of
    /// life, hold at max through the middle, contract over the final 30%.
    pub fn envelope_radius(&self) -> f32 {
        let ratio = self.life_ratio();
        if ratio > EXPLOSION_EXPAND_RATIO {
            self.max_radius * (1.0 - ratio) / (1.0 - EXPLOSION_EXPAND_RATIO)
        } else if ratio > EXPLOSION_CONTRACT_RATIO {
            self.max_radius
        } else {
            self.max_radius * ratio / EXPLOSION_CONTRACT_RATIO
        }
    }

    pub fn expired(&self) -> bool {
        self.lifetime <= 0.0
    }
}

/// Cosmetic debris fragment with simple ballistic decay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub lifetime: f32,
}

/// Cosmetic floating point-award text anchor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScorePopup {
    pub position: Vec2,
    pub amount: u32,
    pub lifetime: f32,
}

/// A falling pickup collected by catching it in a friendly blast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub position: Vec2,
    pub lifetime: f32,
}

/// A fixed firing position with capped, reloading ammunition.
/// Batteries persist for the whole game; only ammo/reload state mutates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Battery {
    pub position: Vec2,
    pub ammo: u32,
    pub max_ammo: u32,
    pub reloading: bool,
    pub reload_elapsed: f32,
}

impl Battery {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            ammo: BATTERY_MAX_AMMO,
            max_ammo: BATTERY_MAX_AMMO,
            reloading: false,
            reload_elapsed: 0.0,
        }
    }

    /// Eligible to answer a fire command.
    pub fn ready(&self) -> bool {
        self.ammo > 0 && !self.reloading
    }

    /// Restore full ammo and clear any reload in progress (inter-wave
    /// re-arm, or reload completion).
    pub fn rearm(&mut self) {
        self.ammo = self.max_ammo;
        self.reloading = false;
        self.reload_elapsed = 0.0;
    }

    /// Fraction of the reload completed, 0 when not reloading.
    pub fn reload_fraction(&self) -> f32 {
        if self.reloading {
            (self.reload_elapsed / BATTERY_RELOAD_SECS).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// A fixed destructible objective. Once destroyed it never reactivates;
/// zero active installations ends the game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Installation {
    pub position: Vec2,
    pub active: bool,
}

impl Installation {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            active: true,
        }
    }
}
