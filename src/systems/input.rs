//! Raylib input polling.
//!
//! Key groups: left (Left, A), right (Right, D), jump (Space, Up, W) and
//! confirm (Space). The held state goes through
//! [`Game::sample_input`](crate::game::Game::sample_input), which turns fresh
//! presses into events.
use glam::Vec2;
use raylib::prelude::{KeyboardKey, MouseButton, RaylibHandle};

use crate::resources::input::HeldKeys;

const LEFT_KEYS: [KeyboardKey; 2] = [KeyboardKey::KEY_LEFT, KeyboardKey::KEY_A];
const RIGHT_KEYS: [KeyboardKey; 2] = [KeyboardKey::KEY_RIGHT, KeyboardKey::KEY_D];
const JUMP_KEYS: [KeyboardKey; 3] = [KeyboardKey::KEY_SPACE, KeyboardKey::KEY_UP, KeyboardKey::KEY_W];
const CONFIRM_KEYS: [KeyboardKey; 1] = [KeyboardKey::KEY_SPACE];

/// Poll the keyboard for the held state of every key group.
pub fn poll_held_keys(rl: &RaylibHandle) -> HeldKeys {
    let any_down = |keys: &[KeyboardKey]| keys.iter().any(|key| rl.is_key_down(*key));
    HeldKeys {
        left: any_down(&LEFT_KEYS),
        right: any_down(&RIGHT_KEYS),
        jump: any_down(&JUMP_KEYS),
        confirm: any_down(&CONFIRM_KEYS),
    }
}

/// Position of a left click this frame, if any.
pub fn poll_pointer_press(rl: &RaylibHandle) -> Option<Vec2> {
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let pos = rl.get_mouse_position();
        Some(Vec2::new(pos.x, pos.y))
    } else {
        None
    }
}
