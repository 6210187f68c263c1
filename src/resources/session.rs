//! Per-session scoring.

use bevy_ecs::prelude::Resource;

/// Points awarded for each collected coin.
pub const COIN_VALUE: u32 = 10;

#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    pub coins_collected: u32,
}

impl Session {
    pub fn collect_coin(&mut self) {
        self.coins_collected += 1;
        self.score += COIN_VALUE;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Marker resource: present once the player asked to leave the application.
#[derive(Resource, Debug, Clone, Copy)]
pub struct QuitRequested;
