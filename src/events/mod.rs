//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`audio`] – audio cues and commands for the background audio thread
//! - [`gamestate`] – phase transition event and its observer
//! - [`input`] – discrete key and pointer presses
//! - [`menu`] – menu button selections
pub mod audio;
pub mod gamestate;
pub mod input;
pub mod menu;
