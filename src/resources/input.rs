//! Per-frame input resource.
//!
//! Holds the sampled state of the logical actions the game cares about. The
//! front end (raylib poller, headless driver or a test) writes it before each
//! tick; gameplay systems only read the `active` ("held") state. Discrete
//! presses are delivered separately as
//! [`InputEvent`](crate::events::input::InputEvent)s.
use bevy_ecs::prelude::*;

use crate::components::player::MoveIntent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean action state for one frame.
pub struct BoolState {
    /// Whether the action is currently held.
    pub active: bool,
    /// Whether the action was pressed this frame.
    pub just_pressed: bool,
}

impl BoolState {
    /// Record this frame's held state, deriving the press edge from the
    /// previous frame.
    pub fn sample(&mut self, held: bool) {
        self.just_pressed = held && !self.active;
        self.active = held;
    }
}

/// Resource capturing the per-frame state of gameplay actions.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_right: BoolState,
    pub jump: BoolState,
    pub confirm: BoolState,
}

impl InputState {
    /// Sample one frame of held keys.
    pub fn sample(&mut self, keys: HeldKeys) {
        self.move_left.sample(keys.left);
        self.move_right.sample(keys.right);
        self.jump.sample(keys.jump);
        self.confirm.sample(keys.confirm);
    }

    /// Held horizontal direction for the player update.
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            left: self.move_left.active,
            right: self.move_right.active,
        }
    }
}

/// Raw held state of every key group, as polled by a front end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub confirm: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolstate_default() {
        let bs = BoolState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
    }

    #[test]
    fn sample_derives_press_edge() {
        let mut bs = BoolState::default();
        bs.sample(true);
        assert!(bs.active && bs.just_pressed);
        bs.sample(true);
        assert!(bs.active && !bs.just_pressed);
        bs.sample(false);
        assert!(!bs.active && !bs.just_pressed);
        bs.sample(true);
        assert!(bs.just_pressed);
    }

    #[test]
    fn move_intent_mirrors_held_axes() {
        let mut input = InputState::default();
        assert_eq!(input.move_intent(), MoveIntent::default());
        input.move_left.sample(true);
        input.move_right.sample(true);
        let intent = input.move_intent();
        assert!(intent.left && intent.right);
    }

    #[test]
    fn held_jump_only_presses_once() {
        let mut input = InputState::default();
        let keys = HeldKeys {
            jump: true,
            ..HeldKeys::default()
        };
        input.sample(keys);
        assert!(input.jump.just_pressed);
        input.sample(keys);
        assert!(input.jump.active && !input.jump.just_pressed);
    }
}
