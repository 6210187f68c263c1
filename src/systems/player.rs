//! Player systems.
//!
//! - [`player_update_system`] moves the player one tick from the held
//!   direction keys and resolves collisions against every platform.
//! - [`jump_observer`] reacts to the jump press while a session is running.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::hitbox::Hitbox;
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::events::audio::AudioCue;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::gamestate::{GamePhase, GameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::Sfx;

/// Platform boxes in layout order, so resolution visits them deterministically.
pub fn sorted_platforms(platforms: &Query<(&Platform, &Hitbox)>) -> Vec<Hitbox> {
    let mut sorted: Vec<(Platform, Hitbox)> = platforms.iter().map(|(p, h)| (*p, *h)).collect();
    sorted.sort_by_key(|(p, _)| *p);
    sorted.into_iter().map(|(_, h)| h).collect()
}

pub fn player_update_system(
    mut players: Query<&mut Player>,
    platforms: Query<(&Platform, &Hitbox)>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
) {
    let boxes = sorted_platforms(&platforms);
    let intent = input.move_intent();
    for mut player in players.iter_mut() {
        player.update(time.delta, intent, &boxes, screen.w as f32);
    }
}

/// Jump on press. Ignored outside [`GamePhase::Playing`] and while airborne.
pub fn jump_observer(
    trigger: On<InputEvent>,
    state: Res<GameState>,
    mut players: Query<&mut Player>,
    mut sfx: Sfx,
) {
    let event = trigger.event();
    if event.action != InputAction::Jump {
        return;
    }
    if state.get() != GamePhase::Playing {
        return;
    }
    for mut player in players.iter_mut() {
        if player.jump() {
            debug!("jump from y={}", player.hitbox.top());
            sfx.play(AudioCue::Jump);
        }
    }
}
