use bevy_ecs::prelude::*;

use crate::components::menu::MenuAction;

/// A menu button was hit.
#[derive(Event, Debug, Clone, Copy)]
pub struct MenuSelectionEvent {
    pub action: MenuAction,
}
