//! Arrival handling: interceptors become friendly explosions, enemy
//! rounds that were never intercepted detonate on the ground.

use glam::Vec2;

use bulwark_core::events::{GameEvent, ImpactEvent};

use crate::pools::Pools;
use crate::score::ScoreState;

pub fn run(pools: &mut Pools, score: &mut ScoreState, events: &mut Vec<GameEvent>, tick: u64) {
    // Interceptor arrivals. Spawning the friendly explosion is the one
    // and only place the chain counter resets.
    let mut arrivals: Vec<Vec2> = Vec::new();
    pools.interceptors.retain(|interceptor| {
        if interceptor.progress >= 1.0 {
            arrivals.push(interceptor.target);
            false
        } else {
            true
        }
    });
    for target in arrivals {
        pools.spawn_friendly_explosion(target);
        score.reset_chain();
    }

    // Uncontested enemy arrivals detonate hostile.
    let mut impacts: Vec<(u32, Vec2)> = Vec::new();
    for enemy in &mut pools.enemies {
        if enemy.active && enemy.progress >= 1.0 {
            enemy.active = false;
            impacts.push((enemy.id, enemy.target));
        }
    }
    for (enemy_id, at) in impacts {
        pools.spawn_hostile_explosion(at);
        events.push(GameEvent::Impact(ImpactEvent {
            enemy_id,
            x: at.x,
            y: at.y,
            tick,
        }));
    }
}
