//! Configuration errors.
//!
//! Everything that can go wrong in this crate goes wrong at construction time:
//! a malformed level, an animator without frames, an unreadable config file.
//! Once a [`Game`](crate::game::Game) is built, ticking it cannot fail.

use std::path::PathBuf;

/// Error raised when building game objects from invalid input.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("animator needs at least one frame")]
    EmptyAnimation,

    #[error("animation interval must be finite and non-negative, got {0}")]
    InvalidInterval(f32),

    #[error("level has no platforms")]
    NoPlatforms,

    #[error("enemy platform index {index} out of range ({count} platforms)")]
    EnemyPlatformOutOfRange { index: usize, count: usize },

    #[error("spawn point ({x}, {y}) is outside the screen")]
    SpawnOutsideScreen { x: f32, y: f32 },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse level {}: {source}", path.display())]
    Level {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode level: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to load config file: {0}")]
    Ini(String),
}
