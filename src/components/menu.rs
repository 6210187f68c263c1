//! Main menu component.
//!
//! A single entity carries the [`Menu`] with its buttons in hit-test order.
//! Pointer presses are resolved by [`Menu::item_at`]: first match wins, a
//! press outside every button matches nothing.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use serde::Serialize;

use crate::components::hitbox::Hitbox;

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 60.0;

/// What a menu button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum MenuAction {
    /// Start a new session.
    Start,
    /// Flip the global mute flag.
    ToggleAudio,
    /// Request application exit.
    Exit,
}

#[derive(Clone, Debug)]
pub struct MenuItem {
    pub action: MenuAction,
    pub hitbox: Hitbox,
}

#[derive(Component, Clone, Debug)]
pub struct Menu {
    pub items: Vec<MenuItem>,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(&[
            (MenuAction::Start, Vec2::new(300.0, 200.0)),
            (MenuAction::ToggleAudio, Vec2::new(300.0, 300.0)),
            (MenuAction::Exit, Vec2::new(300.0, 400.0)),
        ])
    }
}

impl Menu {
    /// Build a menu from `(action, top-left)` pairs, all buttons the same size.
    pub fn new(buttons: &[(MenuAction, Vec2)]) -> Self {
        let items = buttons
            .iter()
            .map(|(action, origin)| MenuItem {
                action: *action,
                hitbox: Hitbox::new(origin.x, origin.y, BUTTON_WIDTH, BUTTON_HEIGHT),
            })
            .collect();
        Self { items }
    }

    pub fn item_at(&self, point: Vec2) -> Option<MenuAction> {
        self.items
            .iter()
            .find(|item| item.hitbox.contains_point(point))
            .map(|item| item.action)
    }
}
