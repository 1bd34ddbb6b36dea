//! Running score state and chain tracking.
//!
//! The chain is a single global counter: it climbs with every kill and
//! resets only when a new friendly explosion is created (interceptor
//! arrival), so kills credited to overlapping detonations keep building
//! one chain.

use bulwark_core::constants::*;
use bulwark_core::enums::ThreatTier;
use bulwark_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    pub shots: u32,
    pub hits: u32,
    pub chain: u32,
    /// Chain bonus points earned this wave, granted again as the
    /// end-of-wave chain award.
    pub wave_chain_bonus: u32,
    /// Set once, on entering a terminal phase.
    pub final_score: Option<u32>,
}

impl ScoreState {
    /// hits / shots; 0 when no shots have been fired.
    pub fn accuracy(&self) -> f32 {
        if self.shots == 0 {
            0.0
        } else {
            self.hits as f32 / self.shots as f32
        }
    }

    pub fn record_shot(&mut self) {
        self.shots += 1;
    }

    /// Credit one intercepted enemy. Returns the points awarded
    /// (tier value plus the current chain bonus), then advances the chain.
    pub fn record_kill(&mut self, tier: ThreatTier) -> u32 {
        let chain_bonus = self.chain * CHAIN_BONUS_PER_LEVEL;
        let points = tier.point_value() + chain_bonus;
        self.hits += 1;
        self.score = self.score.saturating_add(points);
        self.wave_chain_bonus = self.wave_chain_bonus.saturating_add(chain_bonus);
        self.chain += 1;
        points
    }

    /// Called exactly when a new friendly explosion spawns, and nowhere
    /// else.
    pub fn reset_chain(&mut self) {
        self.chain = 0;
    }

    pub fn add_bonus(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Drain the per-wave chain award.
    pub fn take_wave_chain_bonus(&mut self) -> u32 {
        std::mem::take(&mut self.wave_chain_bonus)
    }

    /// Apply end-of-game bonuses and cap. The core always reports its true
    /// internal score; suppressing short plays is the caller's policy.
    pub fn finalize(&mut self, installations_active: u32, waves_cleared: u32) -> u32 {
        let installation_bonus = installations_active * INSTALLATION_SURVIVAL_BONUS;
        let accuracy_bonus = (self.accuracy() * ACCURACY_BONUS_MAX) as u32;
        let wave_bonus = waves_cleared * WAVE_CLEAR_BONUS;
        let total = self
            .score
            .saturating_add(installation_bonus)
            .saturating_add(accuracy_bonus)
            .saturating_add(wave_bonus)
            .min(SCORE_CAP);
        self.final_score = Some(total);
        total
    }

    pub fn view(&self) -> ScoreView {
        ScoreView {
            score: self.score,
            shots: self.shots,
            hits: self.hits,
            accuracy: self.accuracy(),
            chain: self.chain,
            final_score: self.final_score,
        }
    }
}
