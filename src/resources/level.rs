//! Level layout.
//!
//! A [`LevelLayout`] describes the static geometry of a level: platform
//! rectangles (the first one is the ground), the player spawn point, the exit
//! door and which platforms host an enemy. Coins are derived from the layout:
//! one above every platform except the ground.
//!
//! The built-in layout is used unless a JSON file is supplied:
//!
//! ```json
//! {
//!   "platforms": [ { "x": 0.0, "y": 550.0, "w": 800.0, "h": 50.0 } ],
//!   "spawn": [100.0, 450.0],
//!   "door_center": [650.0, 90.0],
//!   "enemy_platforms": []
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use log::info;
use serde::{Deserialize, Serialize};

use crate::components::hitbox::Hitbox;
use crate::components::player::{PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::error::ConfigError;
use crate::resources::screensize::ScreenSize;

/// Size of one terrain tile; platforms are drawn tile by tile.
pub const BLOCK_SIZE: f32 = 64.0;
/// Ledges are four tiles wide.
pub const PLATFORM_WIDTH: f32 = BLOCK_SIZE * 4.0;

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub platforms: Vec<Hitbox>,
    pub spawn: Vec2,
    pub door_center: Vec2,
    pub enemy_platforms: Vec<usize>,
}

impl Default for LevelLayout {
    fn default() -> Self {
        Self {
            platforms: vec![
                Hitbox::new(0.0, 550.0, 800.0, 50.0),
                Hitbox::new(100.0, 420.0, PLATFORM_WIDTH, 25.0),
                Hitbox::new(450.0, 320.0, PLATFORM_WIDTH, 25.0),
                Hitbox::new(100.0, 220.0, PLATFORM_WIDTH, 25.0),
                Hitbox::new(450.0, 130.0, PLATFORM_WIDTH, 25.0),
            ],
            spawn: Vec2::new(100.0, 450.0),
            door_center: Vec2::new(650.0, 90.0),
            enemy_platforms: vec![2, 3],
        }
    }
}

impl LevelLayout {
    /// Read and validate a layout from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>, screen: ScreenSize) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let layout: LevelLayout =
            serde_json::from_str(&json).map_err(|source| ConfigError::Level {
                path: path.to_path_buf(),
                source,
            })?;
        layout.validate(screen)?;
        info!(
            "Loaded level {:?}: {} platforms, {} enemies",
            path,
            layout.platforms.len(),
            layout.enemy_platforms.len()
        );
        Ok(layout)
    }

    /// Pretty JSON of this layout, the format [`LevelLayout::load_from_file`] reads.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Reject layouts the simulation cannot run.
    pub fn validate(&self, screen: ScreenSize) -> Result<(), ConfigError> {
        if self.platforms.is_empty() {
            return Err(ConfigError::NoPlatforms);
        }
        if let Some(&index) = self
            .enemy_platforms
            .iter()
            .find(|&&i| i >= self.platforms.len())
        {
            return Err(ConfigError::EnemyPlatformOutOfRange {
                index,
                count: self.platforms.len(),
            });
        }
        let spawn = self.spawn;
        if spawn.x < 0.0
            || spawn.y < 0.0
            || spawn.x + PLAYER_WIDTH > screen.w as f32
            || spawn.y + PLAYER_HEIGHT > screen.h as f32
        {
            return Err(ConfigError::SpawnOutsideScreen {
                x: spawn.x,
                y: spawn.y,
            });
        }
        Ok(())
    }

    /// Platforms that carry a coin: every one but the ground.
    pub fn coin_platforms(&self) -> &[Hitbox] {
        self.platforms.get(1..).unwrap_or(&[])
    }
}
