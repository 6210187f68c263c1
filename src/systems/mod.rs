//! Game systems.
//!
//! This module groups all ECS systems and observers that advance the
//! simulation, plus the raylib front end when the feature is enabled.
//!
//! Submodules overview
//! - [`audio`] – cue emission, forwarding to the audio thread and runners
//! - [`collectibles`] – coin pickup, door unlock and the exit check
//! - [`enemy`] – enemy patrol and contact damage
//! - [`gamestate`] – pending transition check, run conditions, confirm key
//! - [`menu`] – pointer hit-testing and menu actions
//! - [`player`] – player movement and jumping
//! - [`time`] – update simulation time and delta
//! - `input` – poll raylib keyboard and mouse (feature `raylib`)
//! - `render` – draw a [`SceneView`](crate::view::SceneView) with raylib (feature `raylib`)
pub mod audio;
pub mod collectibles;
pub mod enemy;
pub mod gamestate;
#[cfg(feature = "raylib")]
pub mod input;
pub mod menu;
pub mod player;
#[cfg(feature = "raylib")]
pub mod render;
pub mod time;
