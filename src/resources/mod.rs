//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `audio` – bridge to the background audio thread and the mute flag
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – authoritative and pending game phase
//! - `input` – per-frame held state of the keys relevant to the game
//! - `level` – platform layout, spawn point, door and enemy placement
//! - `screensize` – logical screen dimensions
//! - `session` – score of the running session and the quit request
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by image id (feature `raylib`)
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod level;
pub mod screensize;
pub mod session;
pub mod systemsstore;
#[cfg(feature = "raylib")]
pub mod texturestore;
pub mod worldtime;
