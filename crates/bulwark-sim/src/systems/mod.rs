//! Per-frame systems that operate on the entity pools.
//!
//! Systems are plain functions over `&mut Pools` (plus whatever shared
//! state they mutate). The engine runs them in a fixed order each tick:
//! spawn release, kinematics, reload timers, detonation, collision,
//! ground damage, cleanup.

pub mod cleanup;
pub mod collision;
pub mod damage;
pub mod detonation;
pub mod fire_control;
pub mod movement;
pub mod snapshot;
pub mod wave_director;
