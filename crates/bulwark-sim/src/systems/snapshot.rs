//! Build a serializable `GameSnapshot` from current simulation state.

use bulwark_core::components::{Battery, Installation};
use bulwark_core::enums::GamePhase;
use bulwark_core::state::{
    BatteryView, EnemyView, ExplosionView, GameSnapshot, InstallationView, InterceptorView,
    ParticleView, PopupView, PowerUpView,
};
use bulwark_core::types::SimTime;

use crate::pools::Pools;
use crate::score::ScoreState;

#[allow(clippy::too_many_arguments)]
pub fn build(
    pools: &Pools,
    batteries: &[Battery],
    installations: &[Installation],
    score: &ScoreState,
    phase: GamePhase,
    wave_number: u32,
    wave_total: u32,
    time: SimTime,
) -> GameSnapshot {
    GameSnapshot {
        tick: time.tick,
        elapsed_secs: time.elapsed_secs,
        phase,
        wave_number,
        wave_total,
        score: score.view(),
        batteries: batteries
            .iter()
            .map(|battery| BatteryView {
                x: battery.position.x,
                y: battery.position.y,
                ammo: battery.ammo,
                max_ammo: battery.max_ammo,
                reloading: battery.reloading,
                reload_fraction: battery.reload_fraction(),
            })
            .collect(),
        installations: installations
            .iter()
            .map(|installation| InstallationView {
                x: installation.position.x,
                y: installation.position.y,
                active: installation.active,
            })
            .collect(),
        enemies: pools
            .enemies
            .iter()
            .map(|enemy| EnemyView {
                id: enemy.id,
                x: enemy.position.x,
                y: enemy.position.y,
                tier: enemy.tier,
                progress: enemy.progress,
            })
            .collect(),
        interceptors: pools
            .interceptors
            .iter()
            .map(|interceptor| InterceptorView {
                id: interceptor.id,
                x: interceptor.position.x,
                y: interceptor.position.y,
                target_x: interceptor.target.x,
                target_y: interceptor.target.y,
                progress: interceptor.progress,
            })
            .collect(),
        explosions: pools
            .explosions
            .iter()
            .map(|explosion| ExplosionView {
                id: explosion.id,
                x: explosion.center.x,
                y: explosion.center.y,
                radius: explosion.radius,
                allegiance: explosion.allegiance,
            })
            .collect(),
        particles: pools
            .particles
            .iter()
            .map(|particle| ParticleView {
                x: particle.position.x,
                y: particle.position.y,
                lifetime: particle.lifetime,
            })
            .collect(),
        popups: pools
            .popups
            .iter()
            .map(|popup| PopupView {
                x: popup.position.x,
                y: popup.position.y,
                amount: popup.amount,
                lifetime: popup.lifetime,
            })
            .collect(),
        power_ups: pools
            .power_ups
            .iter()
            .map(|power_up| PowerUpView {
                id: power_up.id,
                kind: power_up.kind,
                x: power_up.position.x,
                y: power_up.position.y,
            })
            .collect(),
    }
}
