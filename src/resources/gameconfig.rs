//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! title = Coin Quest
//! target_fps = 60
//! vsync = true
//!
//! [audio]
//! muted = false
//!
//! [level]
//! path = ./assets/level.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Default safe values for startup
const DEFAULT_TITLE: &str = "Coin Quest";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_MUTED: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window title.
    pub title: String,
    /// Target frames per second. Physics is per tick, so this sets game speed.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start with audio muted.
    pub muted: bool,
    /// Optional JSON level replacing the built-in layout.
    pub level_path: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            muted: DEFAULT_MUTED,
            level_path: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Fixed simulation step matching the target frame rate.
    pub fn frame_time(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.load(&self.config_path).map_err(ConfigError::Ini)?;

        // [window] section
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").map_err(ConfigError::Ini)? {
            self.target_fps = u32::try_from(fps)
                .map_err(|_| ConfigError::Ini(format!("target_fps out of range: {fps}")))?;
        }
        if let Some(vsync) = config.getbool("window", "vsync").map_err(ConfigError::Ini)? {
            self.vsync = vsync;
        }

        // [audio] section
        if let Some(muted) = config.getbool("audio", "muted").map_err(ConfigError::Ini)? {
            self.muted = muted;
        }

        // [level] section
        if let Some(path) = config.get("level", "path") {
            self.level_path = Some(PathBuf::from(path));
        }

        info!(
            "Loaded config: title={:?}, fps={}, vsync={}, muted={}, level={:?}",
            self.title, self.target_fps, self.vsync, self.muted, self.level_path
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("audio", "muted", Some(self.muted.to_string()));
        if let Some(path) = &self.level_path {
            config.set("level", "path", Some(path.display().to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|source| ConfigError::Io {
                path: self.config_path.clone(),
                source,
            })?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
