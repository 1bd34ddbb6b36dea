//! Simulation constants and tuning parameters.

// --- World ---

/// World dimensions in abstract arcade units.
pub const WORLD_WIDTH: f32 = 1280.0;
pub const WORLD_HEIGHT: f32 = 720.0;
pub const GROUND_Y: f32 = 40.0;

/// Installation positions (4 protected structures between the batteries).
pub const INSTALLATION_POSITIONS: [(f32, f32); 4] = [
    (280.0, GROUND_Y),
    (520.0, GROUND_Y),
    (760.0, GROUND_Y),
    (1000.0, GROUND_Y),
];

/// Battery positions (3 firing positions: flanks and center).
pub const BATTERY_POSITIONS: [(f32, f32); 3] = [
    (120.0, GROUND_Y),
    (640.0, GROUND_Y),
    (1160.0, GROUND_Y),
];

// --- Batteries ---

pub const BATTERY_MAX_AMMO: u32 = 10;

/// Duration of a full reload once ammo hits zero (seconds).
pub const BATTERY_RELOAD_SECS: f32 = 5.0;

/// Minimum interval between accepted fire commands (seconds).
pub const FIRE_COOLDOWN_SECS: f32 = 0.25;

// --- Interceptors ---

/// Interceptor flight speed (units/second). Fixed, independent of wave
/// scaling.
pub const INTERCEPTOR_SPEED: f32 = 420.0;

// --- Explosions ---

pub const FRIENDLY_EXPLOSION_MAX_RADIUS: f32 = 55.0;
pub const FRIENDLY_EXPLOSION_LIFETIME_SECS: f32 = 1.2;
pub const HOSTILE_EXPLOSION_MAX_RADIUS: f32 = 45.0;
pub const HOSTILE_EXPLOSION_LIFETIME_SECS: f32 = 1.0;

/// Lifetime-ratio envelope thresholds: above the first the radius is still
/// expanding, below the second it contracts back to zero, in between it
/// holds at max (fast attack, slow decay).
pub const EXPLOSION_EXPAND_RATIO: f32 = 0.7;
pub const EXPLOSION_CONTRACT_RATIO: f32 = 0.3;

/// Collision hit-radius of an enemy projectile (added to explosion radius).
pub const ENEMY_HIT_RADIUS: f32 = 6.0;

// --- Ground damage ---

/// Installations within this range of a hostile detonation are destroyed.
pub const INSTALLATION_DAMAGE_RADIUS: f32 = 70.0;

/// Batteries within this (smaller) range lose ammo but are never destroyed.
pub const BATTERY_DAMAGE_RADIUS: f32 = 50.0;

/// Ammo chunk a battery loses to a nearby hostile detonation.
pub const BATTERY_SPLASH_AMMO_LOSS: u32 = 3;

// --- Scoring ---

/// Extra points per chain level on each kill.
pub const CHAIN_BONUS_PER_LEVEL: u32 = 25;

/// End-of-wave survival bonus, scaled by wave number.
pub const SURVIVAL_BONUS_PER_WAVE: u32 = 100;

/// Flat end-of-wave bonus when every installation is still standing.
pub const PERFECT_WAVE_BONUS: u32 = 250;

/// End-of-game bonus per surviving installation.
pub const INSTALLATION_SURVIVAL_BONUS: u32 = 500;

/// End-of-game accuracy bonus at 100% accuracy (scales linearly).
pub const ACCURACY_BONUS_MAX: f32 = 1000.0;

/// End-of-game bonus per cleared wave.
pub const WAVE_CLEAR_BONUS: u32 = 150;

/// Hard cap on the reported final score.
pub const SCORE_CAP: u32 = 999_999;

// --- Wave director ---

/// Seconds between wave-complete and the next wave going active.
pub const WAVE_TRANSITION_SECS: f32 = 3.0;

/// Spawn offset jitter as a fraction of the inter-spawn delay.
pub const SPAWN_JITTER_FRAC: f32 = 0.35;

/// Probability a spawn targets a structure (installation or battery)
/// instead of a random ground point.
pub const STRUCTURE_TARGET_WEIGHT: f32 = 0.75;

/// Tier spawn weights (cumulative roll order: Standard, Swift, Heavy, Elite).
pub const TIER_WEIGHT_STANDARD: f32 = 0.50;
pub const TIER_WEIGHT_SWIFT: f32 = 0.25;
pub const TIER_WEIGHT_HEAVY: f32 = 0.15;
// Elite takes the remaining 0.10.

/// Horizontal margin kept clear at the world edges for spawns and ground
/// targets.
pub const SPAWN_EDGE_MARGIN: f32 = 60.0;

// --- Cosmetics ---

/// Downward acceleration applied to debris particles (units/s²).
pub const PARTICLE_GRAVITY: f32 = 160.0;
pub const PARTICLE_LIFETIME_SECS: f32 = 0.8;
pub const PARTICLES_PER_KILL: u32 = 12;
pub const PARTICLE_BURST_SPEED: f32 = 140.0;

pub const POPUP_LIFETIME_SECS: f32 = 1.0;
pub const POPUP_RISE_SPEED: f32 = 40.0;

// --- Power-ups ---

/// Chance an intercepted enemy drops a power-up.
pub const POWERUP_DROP_CHANCE: f32 = 0.08;
pub const POWERUP_FALL_SPEED: f32 = 60.0;
pub const POWERUP_LIFETIME_SECS: f32 = 6.0;
pub const POWERUP_PICKUP_RADIUS: f32 = 12.0;
pub const POWERUP_AMMO_BONUS: u32 = 3;
pub const POWERUP_SCORE_BONUS: u32 = 150;
