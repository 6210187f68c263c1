//! Game phase transition event and observer.
//!
//! Systems request a change of [`GamePhase`] by updating [`NextGameState`].
//! Emitting a [`GameStateChangedEvent`] then triggers the observer in this
//! module, which validates the move, applies it to [`GameState`] and invokes
//! the enter hooks stored in [`SystemsStore`].
use crate::resources::gamestate::NextGameStates::Pending;
use crate::resources::gamestate::{GamePhase, GameState, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// Event used to indicate that a pending phase transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending phase transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`] and always clears it.
/// - Transitions outside Menu → Playing → Won → Menu are rejected with a warning.
/// - On success, updates [`GameState`] and runs the enter hooks of the new
///   phase.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: ResMut<NextGameState>,
    mut game_state: ResMut<GameState>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    let Pending(new_phase) = next_game_state.get() else {
        debug!("No phase change pending.");
        return;
    };
    next_game_state.reset();

    let old_phase = game_state.get();
    if !old_phase.can_transition_to(new_phase) {
        warn!("Rejected phase transition {:?} -> {:?}", old_phase, new_phase);
        return;
    }

    info!("Transitioning from {:?} to {:?}", old_phase, new_phase);
    game_state.set(new_phase);
    on_phase_enter(new_phase, &mut commands, &systems_store);
}

/// Internal: run the enter hooks registered for `phase`.
fn on_phase_enter(phase: GamePhase, commands: &mut Commands, systems_store: &SystemsStore) {
    let hooks = systems_store.enter_hooks(phase);
    if phase == GamePhase::Playing && hooks.is_empty() {
        warn!("No enter hook registered for {:?}", phase);
    }
    debug!("Entered {:?} ({} hooks)", phase, hooks.len());
    for id in hooks {
        commands.run_system(*id);
    }
}
