use crate::events::gamestate::GameStateChangedEvent;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::gamestate::{GamePhase, GameState, NextGameState, NextGameStates};
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    state.get() == GamePhase::Playing
}

/// Confirm on the win screen returns to the menu.
pub fn confirm_observer(
    trigger: On<InputEvent>,
    state: Res<GameState>,
    mut next_state: ResMut<NextGameState>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if event.action != InputAction::Confirm {
        return;
    }
    if state.get() == GamePhase::Won {
        next_state.set(GamePhase::Menu);
        commands.trigger(GameStateChangedEvent {});
    }
}
