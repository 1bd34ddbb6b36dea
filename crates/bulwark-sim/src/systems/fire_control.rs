//! Fire command handling and battery reload timers.

use glam::Vec2;

use bulwark_core::components::Battery;
use bulwark_core::constants::*;

use crate::pools::Pools;
use crate::score::ScoreState;

/// Attempt an interception launch at `target`. Returns whether a round
/// left a battery.
///
/// Rejected (silent no-op) when fired inside the cooldown window or when
/// every battery is empty or reloading. Otherwise the battery closest to
/// the target on the x axis answers; exact ties go to the lowest battery
/// index.
pub fn try_fire(
    batteries: &mut [Battery],
    pools: &mut Pools,
    score: &mut ScoreState,
    target: Vec2,
    now: f32,
    last_fire_at: &mut Option<f32>,
) -> bool {
    if let Some(last) = *last_fire_at {
        if now - last < FIRE_COOLDOWN_SECS {
            return false;
        }
    }

    let mut best: Option<(usize, f32)> = None;
    for (index, battery) in batteries.iter().enumerate() {
        if !battery.ready() {
            continue;
        }
        let dx = (battery.position.x - target.x).abs();
        // Strict comparison keeps the lowest index on exact ties.
        if best.map_or(true, |(_, best_dx)| dx < best_dx) {
            best = Some((index, dx));
        }
    }
    let Some((index, _)) = best else {
        return false;
    };

    let battery = &mut batteries[index];
    battery.ammo -= 1;
    if battery.ammo == 0 {
        battery.reloading = true;
        battery.reload_elapsed = 0.0;
    }

    pools.spawn_interceptor(battery.position, target);
    score.record_shot();
    *last_fire_at = Some(now);
    true
}

/// Advance reload timers. Reloads run independently per battery; a
/// completed reload restores full ammo.
pub fn tick_reloads(batteries: &mut [Battery], dt: f32) {
    for battery in batteries {
        if battery.reloading {
            battery.reload_elapsed += dt;
            if battery.reload_elapsed >= BATTERY_RELOAD_SECS {
                battery.rearm();
            }
        }
    }
}
