//! Screen size resource.
//!
//! The playfield is a fixed 800×600 logical screen. Collision clamps the
//! player to its width; the windowed front end sizes the window from it.

use bevy_ecs::prelude::Resource;

pub const SCREEN_WIDTH: i32 = 800;
pub const SCREEN_HEIGHT: i32 = 600;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            w: SCREEN_WIDTH,
            h: SCREEN_HEIGHT,
        }
    }
}
