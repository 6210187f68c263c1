//! High-level game phase resources.
//!
//! [`GameState`] holds the authoritative phase; [`NextGameState`] holds a
//! transition requested by a system or observer. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! request is validated, applied and how enter hooks run.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// Top-level session mode gating which update logic runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Won,
}

impl GamePhase {
    /// The only legal moves are Menu → Playing → Won → Menu.
    pub fn can_transition_to(&self, next: GamePhase) -> bool {
        matches!(
            (self, next),
            (GamePhase::Menu, GamePhase::Playing)
                | (GamePhase::Playing, GamePhase::Won)
                | (GamePhase::Won, GamePhase::Menu)
        )
    }
}

/// Representation of a requested next phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GamePhase),
}

/// Authoritative current phase.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GamePhase,
}

impl GameState {
    /// Create a new state starting in [`GamePhase::Menu`].
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> GamePhase {
        self.current
    }
    /// Overwrite the phase without running hooks or checking the rules.
    /// The gamestate observer is the only caller outside of tests.
    pub fn set(&mut self, phase: GamePhase) {
        self.current = phase;
    }
}

/// Intent to change to a new phase.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Request a transition to `next`. The `check_pending_state` system (or
    /// the requester itself) fires the event that applies it.
    pub fn set(&mut self, next: GamePhase) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
