//! Collectible coin marker.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::hitbox::Hitbox;

pub const COIN_SIZE: f32 = 64.0;
/// How far above its platform's top a coin's center floats.
pub const COIN_HOVER: f32 = 40.0;
pub const COIN_IMAGE: &str = "block_coin";

/// Tag component for coins. The collision box is the entity's [`Hitbox`].
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Coin;

impl Coin {
    /// Hitbox of the coin floating over `platform`.
    pub fn hitbox_over(platform: &Hitbox) -> Hitbox {
        Hitbox::from_center(
            Vec2::new(platform.center_x(), platform.top() - COIN_HOVER),
            COIN_SIZE,
            COIN_SIZE,
        )
    }
}
