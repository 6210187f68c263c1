//! Enemy patrol and contact damage.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::enemy::Enemy;
use crate::components::player::Player;
use crate::events::audio::AudioCue;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::Sfx;

/// Move every enemy, then send the player back to spawn on contact.
///
/// There is no invulnerability window: a player still touching an enemy on
/// the next tick is hurt (and the cue plays) again.
pub fn enemy_patrol_system(
    mut enemies: Query<&mut Enemy>,
    mut players: Query<&mut Player>,
    time: Res<WorldTime>,
    mut sfx: Sfx,
) {
    for mut enemy in enemies.iter_mut() {
        enemy.update(time.delta);
        for mut player in players.iter_mut() {
            if player.hitbox.overlaps(&enemy.hitbox) {
                debug!(
                    "player hurt at ({}, {})",
                    player.hitbox.left(),
                    player.hitbox.top()
                );
                sfx.play(AudioCue::Hurt);
                player.respawn();
            }
        }
    }
}
