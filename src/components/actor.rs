//! Shared shape of the moving, animated entities (player and enemies).

use glam::Vec2;

use crate::components::hitbox::Hitbox;

/// An entity with a collision box and an animated sprite.
///
/// Renderers draw the current frame centered on [`Actor::visual_center`];
/// gameplay only ever looks at [`Actor::hitbox`].
pub trait Actor {
    fn hitbox(&self) -> &Hitbox;

    /// Id of the sprite frame to draw this tick.
    fn frame(&self) -> &'static str;

    /// Advance the active animation by `dt` seconds.
    fn animate(&mut self, dt: f32);

    fn visual_center(&self) -> Vec2 {
        self.hitbox().center()
    }
}
