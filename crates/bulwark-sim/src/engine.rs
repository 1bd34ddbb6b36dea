//! Simulation engine — the core of the game.
//!
//! `DefenseEngine` owns the entity pools, batteries, installations and
//! score, processes player commands, runs the per-frame systems in a
//! fixed order, and drives the wave/game state machine. There is no
//! ambient global: every instance is caller-owned, so hosts can run
//! several independent games and tests stay deterministic.

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::commands::PlayerCommand;
use bulwark_core::components::{Battery, Installation};
use bulwark_core::constants::*;
use bulwark_core::enums::GamePhase;
use bulwark_core::events::{
    GameEvent, GameOverEvent, PhaseChangeEvent, WaveCompleteEvent, WaveStartedEvent,
};
use bulwark_core::state::GameSnapshot;
use bulwark_core::types::SimTime;
use bulwark_core::waves::{self, WaveConfig};

use crate::pools::Pools;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::wave_director::SpawnSchedule;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Wave-balance table; exhausting it means victory.
    pub waves: Vec<WaveConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            waves: waves::standard_campaign(),
        }
    }
}

/// Host hook invoked on every phase transition with (from, to).
pub type PhaseListener = Box<dyn FnMut(GamePhase, GamePhase)>;

/// The simulation engine. Owns all game state.
pub struct DefenseEngine {
    pub pools: Pools,
    pub batteries: Vec<Battery>,
    pub installations: Vec<Installation>,
    pub score: ScoreState,
    pub phase: GamePhase,
    /// 1-based; 0 until the first wave starts.
    pub wave_number: u32,
    waves: Vec<WaveConfig>,
    schedule: SpawnSchedule,
    time: SimTime,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    pending_events: Vec<GameEvent>,
    last_fire_at: Option<f32>,
    transition_remaining: f32,
    phase_listener: Option<PhaseListener>,
}

impl DefenseEngine {
    /// Fresh simulation: idle phase, batteries full, installations active,
    /// score zeroed.
    pub fn new(config: SimConfig) -> Self {
        Self {
            pools: Pools::new(),
            batteries: BATTERY_POSITIONS
                .iter()
                .map(|&(x, y)| Battery::new(Vec2::new(x, y)))
                .collect(),
            installations: INSTALLATION_POSITIONS
                .iter()
                .map(|&(x, y)| Installation::new(Vec2::new(x, y)))
                .collect(),
            score: ScoreState::default(),
            phase: GamePhase::default(),
            wave_number: 0,
            waves: config.waves,
            schedule: SpawnSchedule::default(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            pending_events: Vec::new(),
            last_fire_at: None,
            transition_remaining: 0.0,
            phase_listener: None,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Register the phase-change hook (score submission, wave banners).
    pub fn on_phase_change(&mut self, listener: impl FnMut(GamePhase, GamePhase) + 'static) {
        self.phase_listener = Some(Box::new(listener));
    }

    /// Advance the simulation by one frame of `delta_ms` milliseconds.
    ///
    /// The core takes the delta as given; clamping pathological deltas
    /// (backgrounded tabs) is the host's responsibility. Terminal phases
    /// ignore further ticks.
    pub fn tick(&mut self, delta_ms: f32) {
        self.process_commands();
        if self.phase.is_terminal() {
            return;
        }

        let dt = delta_ms / 1000.0;
        match self.phase {
            GamePhase::WaveActive => self.step_combat(dt, true),
            GamePhase::WaveTransition => self.step_combat(dt, false),
            GamePhase::Idle | GamePhase::WaveComplete | GamePhase::Defeat | GamePhase::Victory => {}
        }
    }

    /// Read-only projection of current state for a rendering collaborator.
    pub fn snapshot(&self) -> GameSnapshot {
        systems::snapshot::build(
            &self.pools,
            &self.batteries,
            &self.installations,
            &self.score,
            self.phase,
            self.wave_number,
            self.waves.len() as u32,
            self.time,
        )
    }

    /// Drain all pending game events.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn active_installations(&self) -> u32 {
        self.installations
            .iter()
            .filter(|installation| installation.active)
            .count() as u32
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                PlayerCommand::StartGame => {
                    if self.phase == GamePhase::Idle && !self.waves.is_empty() {
                        self.begin_wave(1);
                    }
                }
                PlayerCommand::Fire { x, y } => {
                    if matches!(
                        self.phase,
                        GamePhase::WaveActive | GamePhase::WaveTransition
                    ) {
                        systems::fire_control::try_fire(
                            &mut self.batteries,
                            &mut self.pools,
                            &mut self.score,
                            Vec2::new(x, y),
                            self.time.elapsed_secs,
                            &mut self.last_fire_at,
                        );
                    }
                }
            }
        }
    }

    /// One combat frame. `spawning` is true only while the wave is active;
    /// the inter-wave pause still advances rounds in flight, explosions,
    /// reloads, and cosmetics.
    fn step_combat(&mut self, dt: f32, spawning: bool) {
        if spawning {
            systems::wave_director::run(
                &mut self.pools,
                &mut self.schedule,
                self.time.elapsed_secs,
            );
        }
        systems::movement::run(&mut self.pools, dt);
        systems::fire_control::tick_reloads(&mut self.batteries, dt);
        systems::detonation::run(
            &mut self.pools,
            &mut self.score,
            &mut self.pending_events,
            self.time.tick,
        );
        systems::collision::run(
            &mut self.pools,
            &mut self.batteries,
            &mut self.score,
            &mut self.rng,
            &mut self.pending_events,
            self.time.tick,
        );
        systems::damage::run(
            &mut self.pools,
            &mut self.installations,
            &mut self.batteries,
            &mut self.pending_events,
            self.time.tick,
        );
        systems::cleanup::run(&mut self.pools);
        self.time.advance(dt);

        // Loss is evaluated every frame, and before wave completion, so a
        // frame can never end "wave-active" with zero installations.
        if self.active_installations() == 0 {
            self.finish_game(false);
            return;
        }

        if spawning {
            if self.schedule.all_released() && self.pools.combat_clear() {
                self.complete_wave();
            }
        } else {
            self.transition_remaining -= dt;
            if self.transition_remaining <= 0.0 {
                // Full re-arm between waves.
                for battery in &mut self.batteries {
                    battery.rearm();
                }
                self.begin_wave(self.wave_number + 1);
            }
        }
    }

    /// Award end-of-wave bonuses, then either win or enter the inter-wave
    /// pause. `WaveComplete` is instantaneous: both transitions land in
    /// the same frame.
    fn complete_wave(&mut self) {
        let survival_bonus = self.wave_number * SURVIVAL_BONUS_PER_WAVE;
        let perfect_bonus = if self.installations.iter().all(|i| i.active) {
            PERFECT_WAVE_BONUS
        } else {
            0
        };
        let chain_bonus = self.score.take_wave_chain_bonus();
        self.score
            .add_bonus(survival_bonus + perfect_bonus + chain_bonus);

        self.pending_events
            .push(GameEvent::WaveComplete(WaveCompleteEvent {
                wave_number: self.wave_number,
                survival_bonus,
                perfect_bonus,
                chain_bonus,
                tick: self.time.tick,
            }));
        self.transition(GamePhase::WaveComplete);

        if self.wave_number as usize >= self.waves.len() {
            self.finish_game(true);
        } else {
            self.transition_remaining = WAVE_TRANSITION_SECS;
            self.transition(GamePhase::WaveTransition);
        }
    }

    fn begin_wave(&mut self, number: u32) {
        self.wave_number = number;
        let config = self.waves[(number - 1) as usize].clone();
        self.schedule = SpawnSchedule::for_wave(
            &config,
            &self.installations,
            &self.batteries,
            &mut self.rng,
            self.time.elapsed_secs,
        );
        log::debug!(
            "wave {} started: {} enemies ({})",
            number,
            config.enemy_count,
            config.label
        );
        self.pending_events
            .push(GameEvent::WaveStarted(WaveStartedEvent {
                wave_number: number,
                enemy_count: config.enemy_count,
                label: config.label.to_string(),
                tick: self.time.tick,
            }));
        self.transition(GamePhase::WaveActive);
    }

    /// Enter a terminal phase. The finalized score is computed here and
    /// never changes afterwards.
    fn finish_game(&mut self, won: bool) {
        let waves_cleared = if won {
            self.wave_number
        } else {
            self.wave_number.saturating_sub(1)
        };
        let final_score = self
            .score
            .finalize(self.active_installations(), waves_cleared);
        self.pending_events.push(GameEvent::GameOver(GameOverEvent {
            won,
            final_score,
            tick: self.time.tick,
        }));
        self.transition(if won {
            GamePhase::Victory
        } else {
            GamePhase::Defeat
        });
    }

    fn transition(&mut self, next: GamePhase) {
        if next == self.phase {
            return;
        }
        let from = self.phase;
        self.phase = next;
        log::debug!("phase {:?} -> {:?}", from, next);
        self.pending_events
            .push(GameEvent::PhaseChange(PhaseChangeEvent {
                from,
                to: next,
                tick: self.time.tick,
            }));
        if let Some(listener) = self.phase_listener.as_mut() {
            listener(from, next);
        }
    }
}
