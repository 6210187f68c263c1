//! Menu observers.
//!
//! - [`menu_pointer_observer`] hit-tests pointer presses against the menu
//!   while in [`GamePhase::Menu`] and emits a [`MenuSelectionEvent`].
//! - [`menu_selection_observer`] performs the selected action.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::menu::{Menu, MenuAction};
use crate::events::gamestate::GameStateChangedEvent;
use crate::events::input::PointerPressedEvent;
use crate::events::menu::MenuSelectionEvent;
use crate::resources::audio::AudioSettings;
use crate::resources::gamestate::{GamePhase, GameState, NextGameState};
use crate::resources::session::QuitRequested;

pub fn menu_pointer_observer(
    trigger: On<PointerPressedEvent>,
    state: Res<GameState>,
    menus: Query<&Menu>,
    mut commands: Commands,
) {
    if state.get() != GamePhase::Menu {
        return;
    }
    let pos = trigger.event().pos;
    if let Some(action) = menus.iter().find_map(|menu| menu.item_at(pos)) {
        debug!("menu hit {:?} at ({}, {})", action, pos.x, pos.y);
        commands.trigger(MenuSelectionEvent { action });
    }
}

pub fn menu_selection_observer(
    trigger: On<MenuSelectionEvent>,
    mut next_state: ResMut<NextGameState>,
    mut audio: ResMut<AudioSettings>,
    mut commands: Commands,
) {
    match trigger.event().action {
        MenuAction::Start => {
            next_state.set(GamePhase::Playing);
            commands.trigger(GameStateChangedEvent {});
        }
        MenuAction::ToggleAudio => {
            let muted = audio.toggle();
            info!("Sound {}", if muted { "off" } else { "on" });
        }
        MenuAction::Exit => {
            info!("Exit requested from the menu");
            commands.insert_resource(QuitRequested);
        }
    }
}
