//! Time update.
//!
//! Writes the frame delta into [`WorldTime`](crate::resources::worldtime::WorldTime)
//! before every schedule run.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Store `dt` (seconds) as the delta of the coming tick. Negative or
/// non-finite values become zero so a bad clock never moves anything backwards.
pub fn update_world_time(world: &mut World, dt: f32) {
    let delta = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    world.resource_mut::<WorldTime>().delta = delta;
}
