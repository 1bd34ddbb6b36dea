//! Ground damage from hostile detonations.
//!
//! Each hostile explosion applies damage exactly once (the
//! `damage_dealt` flag): installations inside the larger radius are
//! destroyed outright and never come back; batteries inside the smaller
//! radius lose an ammo chunk but survive as structures.

use bulwark_core::components::{Battery, Installation};
use bulwark_core::constants::*;
use bulwark_core::enums::Allegiance;
use bulwark_core::events::{BatterySplashedEvent, GameEvent, InstallationDestroyedEvent};

use crate::pools::Pools;

pub fn run(
    pools: &mut Pools,
    installations: &mut [Installation],
    batteries: &mut [Battery],
    events: &mut Vec<GameEvent>,
    tick: u64,
) {
    for explosion in &mut pools.explosions {
        if explosion.allegiance != Allegiance::Hostile || explosion.damage_dealt {
            continue;
        }
        explosion.damage_dealt = true;

        for (index, installation) in installations.iter_mut().enumerate() {
            if installation.active
                && installation.position.distance(explosion.center) <= INSTALLATION_DAMAGE_RADIUS
            {
                installation.active = false;
                events.push(GameEvent::InstallationDestroyed(
                    InstallationDestroyedEvent {
                        installation_index: index as u32,
                        tick,
                    },
                ));
            }
        }

        for (index, battery) in batteries.iter_mut().enumerate() {
            if battery.position.distance(explosion.center) <= BATTERY_DAMAGE_RADIUS {
                let lost = battery.ammo.min(BATTERY_SPLASH_AMMO_LOSS);
                if lost > 0 {
                    battery.ammo -= lost;
                    if battery.ammo == 0 && !battery.reloading {
                        battery.reloading = true;
                        battery.reload_elapsed = 0.0;
                    }
                    events.push(GameEvent::BatterySplashed(BatterySplashedEvent {
                        battery_index: index as u32,
                        ammo_lost: lost,
                        tick,
                    }));
                }
            }
        }
    }
}
