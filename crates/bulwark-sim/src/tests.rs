#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use bulwark_core::commands::PlayerCommand;
    use bulwark_core::components::{Battery, Installation};
    use bulwark_core::constants::*;
    use bulwark_core::enums::{Allegiance, GamePhase, PowerUpKind, ThreatTier};
    use bulwark_core::events::GameEvent;
    use bulwark_core::waves::WaveConfig;

    use crate::engine::{DefenseEngine, SimConfig};
    use crate::pools::Pools;
    use crate::score::ScoreState;
    use crate::systems;
    use crate::systems::wave_director::SpawnSchedule;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    fn ground_batteries() -> Vec<Battery> {
        BATTERY_POSITIONS
            .iter()
            .map(|&(x, y)| Battery::new(Vec2::new(x, y)))
            .collect()
    }

    fn live_friendly_blast(pools: &mut Pools, center: Vec2) {
        let id = pools.spawn_friendly_explosion(center);
        let explosion = pools.explosions.iter_mut().find(|e| e.id == id).unwrap();
        explosion.radius = explosion.max_radius;
    }

    // ---- Fire control ----

    #[test]
    fn test_closest_battery_on_x_answers() {
        let mut batteries = ground_batteries();
        let mut pools = Pools::new();
        let mut score = ScoreState::default();
        let mut last_fire = None;

        let fired = systems::fire_control::try_fire(
            &mut batteries,
            &mut pools,
            &mut score,
            Vec2::new(1100.0, 400.0),
            0.0,
            &mut last_fire,
        );

        assert!(fired);
        assert_eq!(batteries[2].ammo, BATTERY_MAX_AMMO - 1);
        assert_eq!(batteries[0].ammo, BATTERY_MAX_AMMO);
        assert_eq!(batteries[1].ammo, BATTERY_MAX_AMMO);
        assert_eq!(pools.interceptors.len(), 1);
        assert_eq!(pools.interceptors[0].origin, batteries[2].position);
        assert_eq!(score.shots, 1);
    }

    #[test]
    fn test_exact_tie_goes_to_lowest_index() {
        // Midpoint of batteries 0 and 1 on the x axis.
        let mut batteries = ground_batteries();
        let midpoint = (batteries[0].position.x + batteries[1].position.x) / 2.0;
        let mut pools = Pools::new();
        let mut score = ScoreState::default();
        let mut last_fire = None;

        systems::fire_control::try_fire(
            &mut batteries,
            &mut pools,
            &mut score,
            Vec2::new(midpoint, 300.0),
            0.0,
            &mut last_fire,
        );

        assert_eq!(batteries[0].ammo, BATTERY_MAX_AMMO - 1);
        assert_eq!(batteries[1].ammo, BATTERY_MAX_AMMO);
    }

    #[test]
    fn test_cooldown_rejects_second_fire() {
        let mut batteries = ground_batteries();
        let mut pools = Pools::new();
        let mut score = ScoreState::default();
        let mut last_fire = None;
        let target = Vec2::new(640.0, 400.0);

        assert!(systems::fire_control::try_fire(
            &mut batteries,
            &mut pools,
            &mut score,
            target,
            0.0,
            &mut last_fire,
        ));
        assert!(!systems::fire_control::try_fire(
            &mut batteries,
            &mut pools,
            &mut score,
            target,
            FIRE_COOLDOWN_SECS / 2.0,
            &mut last_fire,
        ));
        assert!(systems::fire_control::try_fire(
            &mut batteries,
            &mut pools,
            &mut score,
            target,
            FIRE_COOLDOWN_SECS + 0.01,
            &mut last_fire,
        ));
        // The rejected command costs nothing.
        assert_eq!(score.shots, 2);
        assert_eq!(pools.interceptors.len(), 2);
    }

    #[test]
    fn test_emptying_a_battery_starts_its_reload() {
        let mut batteries = ground_batteries();
        batteries[1].ammo = 1;
        // Only the middle battery can answer.
        batteries[0].reloading = true;
        batteries[2].reloading = true;
        let mut pools = Pools::new();
        let mut score = ScoreState::default();
        let mut last_fire = None;

        assert!(systems::fire_control::try_fire(
            &mut batteries,
            &mut pools,
            &mut score,
            Vec2::new(640.0, 400.0),
            0.0,
            &mut last_fire,
        ));
        assert_eq!(batteries[1].ammo, 0);
        assert!(batteries[1].reloading);

        // Everything reloading now, so the next command is a no-op.
        assert!(!systems::fire_control::try_fire(
            &mut batteries,
            &mut pools,
            &mut score,
            Vec2::new(640.0, 400.0),
            FIRE_COOLDOWN_SECS + 0.01,
            &mut last_fire,
        ));
    }

    #[test]
    fn test_completed_reload_restores_full_ammo() {
        let mut batteries = ground_batteries();
        batteries[0].ammo = 0;
        batteries[0].reloading = true;

        systems::fire_control::tick_reloads(&mut batteries, BATTERY_RELOAD_SECS / 2.0);
        assert!(batteries[0].reloading);
        assert_eq!(batteries[0].ammo, 0);

        systems::fire_control::tick_reloads(&mut batteries, BATTERY_RELOAD_SECS / 2.0);
        assert!(!batteries[0].reloading);
        assert_eq!(batteries[0].ammo, BATTERY_MAX_AMMO);
    }

    // ---- Detonation ----

    #[test]
    fn test_arrived_interceptor_becomes_friendly_explosion_and_resets_chain() {
        let mut pools = Pools::new();
        let mut score = ScoreState::default();
        score.chain = 4;
        let mut events = Vec::new();

        let target = Vec2::new(500.0, 400.0);
        pools.spawn_interceptor(Vec2::new(120.0, GROUND_Y), target);
        pools.interceptors[0].progress = 1.0;

        systems::detonation::run(&mut pools, &mut score, &mut events, 10);

        assert!(pools.interceptors.is_empty());
        assert_eq!(pools.explosions.len(), 1);
        assert_eq!(pools.explosions[0].allegiance, Allegiance::Friendly);
        assert_eq!(pools.explosions[0].center, target);
        assert_eq!(score.chain, 0);
    }

    #[test]
    fn test_uncontested_enemy_arrival_detonates_hostile() {
        let mut pools = Pools::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();

        let target = Vec2::new(280.0, GROUND_Y);
        pools.spawn_enemy(
            Vec2::new(300.0, WORLD_HEIGHT),
            target,
            ThreatTier::Standard,
            60.0,
        );
        pools.enemies[0].progress = 1.0;

        systems::detonation::run(&mut pools, &mut score, &mut events, 10);

        assert!(!pools.enemies[0].active);
        assert_eq!(pools.explosions.len(), 1);
        assert_eq!(pools.explosions[0].allegiance, Allegiance::Hostile);
        assert!(matches!(events.as_slice(), [GameEvent::Impact(_)]));
    }

    #[test]
    fn test_in_flight_entities_are_untouched() {
        let mut pools = Pools::new();
        let mut score = ScoreState::default();
        let mut events = Vec::new();

        pools.spawn_interceptor(Vec2::new(120.0, GROUND_Y), Vec2::new(500.0, 400.0));
        pools.spawn_enemy(
            Vec2::new(300.0, WORLD_HEIGHT),
            Vec2::new(280.0, GROUND_Y),
            ThreatTier::Swift,
            80.0,
        );
        pools.interceptors[0].progress = 0.5;
        pools.enemies[0].progress = 0.5;

        systems::detonation::run(&mut pools, &mut score, &mut events, 10);

        assert_eq!(pools.interceptors.len(), 1);
        assert!(pools.enemies[0].active);
        assert!(pools.explosions.is_empty());
    }

    // ---- Collision ----

    #[test]
    fn test_two_enemies_in_one_blast_both_die_and_chain_climbs_by_two() {
        let mut pools = Pools::new();
        let mut batteries = ground_batteries();
        let mut score = ScoreState::default();
        let mut rng = test_rng();
        let mut events = Vec::new();

        let center = Vec2::new(600.0, 400.0);
        live_friendly_blast(&mut pools, center);
        pools.spawn_enemy(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), ThreatTier::Standard, 60.0);
        pools.spawn_enemy(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), ThreatTier::Swift, 80.0);
        pools.enemies[0].position = center + Vec2::new(10.0, 0.0);
        pools.enemies[1].position = center - Vec2::new(10.0, 0.0);

        let chain_before = score.chain;
        systems::collision::run(
            &mut pools,
            &mut batteries,
            &mut score,
            &mut rng,
            &mut events,
            10,
        );

        assert!(pools.enemies.iter().all(|enemy| !enemy.active));
        assert_eq!(score.hits, 2);
        assert_eq!(score.chain, chain_before + 2);
        // First kill at chain 0, second at chain 1.
        let expected = ThreatTier::Standard.point_value()
            + ThreatTier::Swift.point_value()
            + CHAIN_BONUS_PER_LEVEL;
        assert_eq!(score.score, expected);
        let destroyed = events
            .iter()
            .filter(|event| matches!(event, GameEvent::EnemyDestroyed(_)))
            .count();
        assert_eq!(destroyed, 2);
    }

    #[test]
    fn test_overlapping_blasts_never_double_count_a_kill() {
        let mut pools = Pools::new();
        let mut batteries = ground_batteries();
        let mut score = ScoreState::default();
        let mut rng = test_rng();
        let mut events = Vec::new();

        let center = Vec2::new(600.0, 400.0);
        live_friendly_blast(&mut pools, center);
        live_friendly_blast(&mut pools, center + Vec2::new(5.0, 0.0));
        pools.spawn_enemy(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), ThreatTier::Heavy, 50.0);
        pools.enemies[0].position = center;

        systems::collision::run(
            &mut pools,
            &mut batteries,
            &mut score,
            &mut rng,
            &mut events,
            10,
        );

        assert_eq!(score.hits, 1);
        assert_eq!(score.score, ThreatTier::Heavy.point_value());
    }

    #[test]
    fn test_hostile_blasts_do_not_intercept() {
        let mut pools = Pools::new();
        let mut batteries = ground_batteries();
        let mut score = ScoreState::default();
        let mut rng = test_rng();
        let mut events = Vec::new();

        let center = Vec2::new(600.0, 400.0);
        let id = pools.spawn_hostile_explosion(center);
        pools
            .explosions
            .iter_mut()
            .find(|e| e.id == id)
            .unwrap()
            .radius = HOSTILE_EXPLOSION_MAX_RADIUS;
        pools.spawn_enemy(Vec2::new(0.0, 0.0), Vec2::new(0.0, 0.0), ThreatTier::Standard, 60.0);
        pools.enemies[0].position = center;

        systems::collision::run(
            &mut pools,
            &mut batteries,
            &mut score,
            &mut rng,
            &mut events,
            10,
        );

        assert!(pools.enemies[0].active);
        assert_eq!(score.hits, 0);
    }

    // ---- Ground damage ----

    #[test]
    fn test_hostile_blast_damages_ground_exactly_once() {
        let mut pools = Pools::new();
        let mut batteries = ground_batteries();
        let mut installations = vec![Installation::new(Vec2::new(120.0, GROUND_Y))];
        let mut events = Vec::new();

        // On top of installation 0 and battery 0.
        pools.spawn_hostile_explosion(Vec2::new(120.0, GROUND_Y));

        systems::damage::run(&mut pools, &mut installations, &mut batteries, &mut events, 5);
        assert!(!installations[0].active);
        assert_eq!(batteries[0].ammo, BATTERY_MAX_AMMO - BATTERY_SPLASH_AMMO_LOSS);

        // Second pass over the same explosion is a no-op.
        systems::damage::run(&mut pools, &mut installations, &mut batteries, &mut events, 6);
        assert_eq!(batteries[0].ammo, BATTERY_MAX_AMMO - BATTERY_SPLASH_AMMO_LOSS);
        assert_eq!(
            events
                .iter()
                .filter(|e| matches!(e, GameEvent::BatterySplashed(_)))
                .count(),
            1
        );
    }

    #[test]
    fn test_splash_to_zero_ammo_starts_reload() {
        let mut pools = Pools::new();
        let mut batteries = ground_batteries();
        batteries[0].ammo = 2;
        let mut installations = Vec::new();
        let mut events = Vec::new();

        pools.spawn_hostile_explosion(Vec2::new(120.0, GROUND_Y));
        systems::damage::run(&mut pools, &mut installations, &mut batteries, &mut events, 5);

        assert_eq!(batteries[0].ammo, 0);
        assert!(batteries[0].reloading);
    }

    #[test]
    fn test_distant_blast_leaves_ground_untouched() {
        let mut pools = Pools::new();
        let mut batteries = ground_batteries();
        let mut installations = vec![Installation::new(Vec2::new(280.0, GROUND_Y))];
        let mut events = Vec::new();

        pools.spawn_hostile_explosion(Vec2::new(640.0, 500.0));
        systems::damage::run(&mut pools, &mut installations, &mut batteries, &mut events, 5);

        assert!(installations[0].active);
        assert!(batteries.iter().all(|b| b.ammo == BATTERY_MAX_AMMO));
        assert!(events.is_empty());
    }

    // ---- Movement ----

    #[test]
    fn test_progress_is_monotone_and_clamped() {
        let mut pools = Pools::new();
        pools.spawn_enemy(
            Vec2::new(100.0, WORLD_HEIGHT),
            Vec2::new(100.0, GROUND_Y),
            ThreatTier::Standard,
            300.0,
        );

        let mut last = 0.0;
        for _ in 0..200 {
            systems::movement::run(&mut pools, 0.032);
            let progress = pools.enemies[0].progress;
            assert!(progress >= last);
            last = progress;
        }
        assert!(last >= 1.0);
        let enemy = &pools.enemies[0];
        assert!(enemy.position.distance(enemy.target) < 1e-3);
    }

    #[test]
    fn test_power_ups_fall_and_stop_at_ground() {
        let mut pools = Pools::new();
        pools.spawn_power_up(PowerUpKind::AmmoCache, Vec2::new(400.0, GROUND_Y + 5.0));

        systems::movement::run(&mut pools, 1.0);
        assert_eq!(pools.power_ups[0].position.y, GROUND_Y);
    }

    // ---- Wave director ----

    #[test]
    fn test_zero_delay_wave_schedules_one_burst() {
        // A zero inter-spawn delay is a legal table row: everything comes
        // due at wave start with no jitter.
        let config = WaveConfig {
            enemy_count: 5,
            base_speed: 60.0,
            spawn_delay_secs: 0.0,
            label: "all at once",
        };
        let installations = vec![Installation::new(Vec2::new(280.0, GROUND_Y))];
        let batteries = ground_batteries();
        let mut rng = test_rng();

        let mut schedule =
            SpawnSchedule::for_wave(&config, &installations, &batteries, &mut rng, 2.0);
        assert!(schedule.pending.iter().all(|spawn| spawn.due_at == 2.0));

        let mut pools = Pools::new();
        systems::wave_director::run(&mut pools, &mut schedule, 2.0);
        assert_eq!(pools.enemies.len(), 5);
        assert!(schedule.all_released());
    }

    // ---- Score ----

    #[test]
    fn test_chained_kills_pay_escalating_bonuses() {
        let mut score = ScoreState::default();
        assert_eq!(
            score.record_kill(ThreatTier::Standard),
            ThreatTier::Standard.point_value()
        );
        assert_eq!(
            score.record_kill(ThreatTier::Standard),
            ThreatTier::Standard.point_value() + CHAIN_BONUS_PER_LEVEL
        );
        assert_eq!(
            score.record_kill(ThreatTier::Standard),
            ThreatTier::Standard.point_value() + 2 * CHAIN_BONUS_PER_LEVEL
        );
        assert_eq!(score.chain, 3);
        assert_eq!(score.wave_chain_bonus, 3 * CHAIN_BONUS_PER_LEVEL);
    }

    #[test]
    fn test_finalize_applies_bonuses_and_cap() {
        let mut score = ScoreState::default();
        score.shots = 10;
        score.hits = 5;
        score.score = 1_000;

        let total = score.finalize(2, 3);
        assert_eq!(
            total,
            1_000
                + 2 * INSTALLATION_SURVIVAL_BONUS
                + (0.5 * ACCURACY_BONUS_MAX) as u32
                + 3 * WAVE_CLEAR_BONUS
        );
        assert_eq!(score.final_score, Some(total));

        let mut capped = ScoreState::default();
        capped.score = u32::MAX - 10;
        assert_eq!(capped.finalize(4, 8), SCORE_CAP);
    }

    // ---- Engine ----

    #[test]
    fn test_starts_idle_and_ignores_fire_before_start() {
        let mut engine = DefenseEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::Fire { x: 640.0, y: 400.0 });
        engine.tick(32.0);

        assert_eq!(engine.phase, GamePhase::Idle);
        assert_eq!(engine.score.shots, 0);
        assert!(engine.pools.interceptors.is_empty());
    }

    #[test]
    fn test_start_game_enters_first_wave() {
        let mut engine = DefenseEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(32.0);

        assert_eq!(engine.phase, GamePhase::WaveActive);
        assert_eq!(engine.wave_number, 1);
        let events = engine.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::WaveStarted(w) if w.wave_number == 1)));
    }

    #[test]
    fn test_losing_all_installations_ends_the_game() {
        let mut engine = DefenseEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(32.0);

        for installation in &mut engine.installations {
            installation.active = false;
        }
        engine.tick(32.0);

        assert_eq!(engine.phase, GamePhase::Defeat);
        assert!(engine.score.final_score.is_some());
        let events = engine.drain_events();
        assert!(events
            .iter()
            .any(|e| matches!(e, GameEvent::GameOver(g) if !g.won)));
    }

    #[test]
    fn test_terminal_phase_ignores_further_ticks_and_commands() {
        let mut engine = DefenseEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(32.0);
        for installation in &mut engine.installations {
            installation.active = false;
        }
        engine.tick(32.0);
        assert_eq!(engine.phase, GamePhase::Defeat);

        let frozen = engine.score.final_score;
        let tick = engine.time().tick;
        engine.queue_command(PlayerCommand::Fire { x: 640.0, y: 400.0 });
        engine.tick(32.0);

        assert_eq!(engine.phase, GamePhase::Defeat);
        assert_eq!(engine.score.final_score, frozen);
        assert_eq!(engine.time().tick, tick);
    }

    #[test]
    fn test_phase_listener_sees_transitions() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen: Rc<RefCell<Vec<(GamePhase, GamePhase)>>> = Rc::default();
        let sink = Rc::clone(&seen);

        let mut engine = DefenseEngine::new(SimConfig::default());
        engine.on_phase_change(move |from, to| sink.borrow_mut().push((from, to)));
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick(32.0);

        assert_eq!(
            seen.borrow().as_slice(),
            &[(GamePhase::Idle, GamePhase::WaveActive)]
        );
    }
}
