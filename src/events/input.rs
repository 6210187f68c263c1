//! Discrete input events.
//!
//! Held movement is sampled into [`InputState`](crate::resources::input::InputState);
//! one-shot presses are triggered as events and handled immediately by
//! observers, so nothing is buffered across ticks.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Logical one-shot actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Jump (default: Space, Up, W).
    Jump,
    /// Leave the win screen (default: Space).
    Confirm,
}

/// Event emitted on a fresh press of an input action.
#[derive(Event, Debug, Clone, Copy)]
pub struct InputEvent {
    pub action: InputAction,
}

/// Primary pointer button pressed at `pos` (screen coordinates).
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerPressedEvent {
    pub pos: Vec2,
}
