//! Coin Quest library.
//!
//! The simulation core of a small 2D platformer: a player runs and jumps
//! across static platforms, collects coins while dodging patrolling enemies,
//! and wins by reaching the door that opens once every coin is taken.
//!
//! This module exposes the game's ECS components, resources, systems, and
//! events for use in integration tests and alternative front ends. Most
//! callers only need [`game::Game`].

pub mod components;
pub mod error;
pub mod events;
pub mod game;
pub mod physics;
pub mod resources;
pub mod systems;
pub mod view;
