//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world, plus the state types the player and enemies own.
//!
//! Submodules overview:
//! - [`actor`] – shared behavior of animated, colliding entities
//! - [`animation`] – cyclic frame animator and the idle/walking selector
//! - [`coin`] – collectible coin marker and its placement over a platform
//! - [`door`] – exit door, locked until every coin is collected
//! - [`enemy`] – patrolling enemy bound to a home platform
//! - [`hitbox`] – axis-aligned rectangle used for all collisions
//! - [`menu`] – main menu buttons and hit-testing
//! - [`platform`] – static platform tag with its layout order
//! - [`player`] – the player character and its per-tick update

pub mod actor;
pub mod animation;
pub mod coin;
pub mod door;
pub mod enemy;
pub mod hitbox;
pub mod menu;
pub mod platform;
pub mod player;
