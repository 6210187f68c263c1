//! Coin pickup and the exit door.
//!
//! Runs after movement, in this order: [`coin_pickup_system`],
//! [`door_unlock_system`], [`exit_door_system`]. Coin despawns are applied
//! between the first two so the door sees the updated coin set.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::coin::Coin;
use crate::components::door::Door;
use crate::components::hitbox::Hitbox;
use crate::components::player::Player;
use crate::events::audio::AudioCue;
use crate::resources::gamestate::{GamePhase, NextGameState};
use crate::resources::session::Session;
use crate::systems::audio::Sfx;

/// Remove every coin the player touches and score it.
///
/// Overlapping coins are collected into a list first, so removals never
/// disturb the iteration.
pub fn coin_pickup_system(
    mut commands: Commands,
    coins: Query<(Entity, &Hitbox), With<Coin>>,
    players: Query<&Player>,
    mut session: ResMut<Session>,
    mut sfx: Sfx,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let touched: Vec<Entity> = coins
        .iter()
        .filter(|(_, hitbox)| player.hitbox.overlaps(hitbox))
        .map(|(entity, _)| entity)
        .collect();

    for coin in touched {
        commands.entity(coin).despawn();
        session.collect_coin();
        sfx.play(AudioCue::Coin);
        debug!("coin collected, score={}", session.score);
    }
}

/// Open the door the first time the coin set is empty.
pub fn door_unlock_system(coins: Query<(), With<Coin>>, mut doors: Query<&mut Door>) {
    if !coins.is_empty() {
        return;
    }
    for mut door in doors.iter_mut() {
        if door.unlock() {
            info!("All coins collected, the door is open");
        }
    }
}

/// Request [`GamePhase::Won`] when the player stands in an open door.
pub fn exit_door_system(
    doors: Query<(&Door, &Hitbox)>,
    players: Query<&Player>,
    mut next_state: ResMut<NextGameState>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    if doors
        .iter()
        .any(|(door, hitbox)| door.open && player.hitbox.overlaps(hitbox))
    {
        info!("Player reached the open door");
        next_state.set(GamePhase::Won);
    }
}
