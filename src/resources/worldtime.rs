//! Frame timing shared by the gameplay systems.
use bevy_ecs::prelude::Resource;

/// Seconds covered by the current tick.
///
/// Horizontal speeds and animation timers scale with `delta`; gravity and
/// jumps are per tick and ignore it.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct WorldTime {
    pub delta: f32,
}

impl WorldTime {
    pub fn new(delta: f32) -> Self {
        Self { delta }
    }
}
