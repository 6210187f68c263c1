//! Game setup, the per-tick schedule and the [`Game`] facade.
//!
//! [`Game`] owns the ECS world and the update schedule. Front ends (the
//! raylib window, the headless runner, tests) talk to it only through its
//! methods: feed input, call [`Game::tick`] once per frame, read back a
//! [`SceneView`].

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use glam::Vec2;
use log::info;

use crate::components::coin::{COIN_IMAGE, Coin};
use crate::components::door::{DOOR_SIZE, Door};
use crate::components::enemy::Enemy;
use crate::components::hitbox::Hitbox;
use crate::components::menu::{Menu, MenuAction};
use crate::components::platform::Platform;
use crate::components::player::Player;
use crate::error::ConfigError;
use crate::events::audio::AudioCmd;
use crate::events::gamestate::observe_gamestate_change_event;
use crate::events::input::{InputAction, InputEvent, PointerPressedEvent};
use crate::events::menu::MenuSelectionEvent;
use crate::resources::audio::{AudioBridge, AudioSettings, setup_audio, shutdown_audio};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GamePhase, GameState, NextGameState};
use crate::resources::input::{HeldKeys, InputState};
use crate::resources::level::LevelLayout;
use crate::resources::screensize::ScreenSize;
use crate::resources::session::{QuitRequested, Session};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::{LogSink, forward_audio_cues, run_sink, update_audio_cues};
use crate::systems::collectibles::{coin_pickup_system, door_unlock_system, exit_door_system};
use crate::systems::enemy::enemy_patrol_system;
use crate::systems::gamestate::{check_pending_state, confirm_observer, state_is_playing};
use crate::systems::menu::{menu_pointer_observer, menu_selection_observer};
use crate::systems::player::{jump_observer, player_update_system};
use crate::systems::time::update_world_time;
use crate::view::{ButtonView, SceneView, SpriteView, button_label};

/// Entities the facade reads back directly.
#[derive(Debug, Clone, Copy)]
pub struct LevelEntities {
    pub player: Entity,
    pub door: Entity,
}

/// Spawn the persistent part of a level: platforms, enemies, the door, the
/// menu and the player. Coins are spawned per session by [`enter_play`].
pub fn spawn_level(world: &mut World, layout: &LevelLayout) -> Result<LevelEntities, ConfigError> {
    for (order, platform) in layout.platforms.iter().enumerate() {
        world.spawn((Platform { order }, *platform));
    }

    for &index in &layout.enemy_platforms {
        let home = layout
            .platforms
            .get(index)
            .ok_or(ConfigError::EnemyPlatformOutOfRange {
                index,
                count: layout.platforms.len(),
            })?;
        world.spawn(Enemy::on_platform(home)?);
    }

    let door = world
        .spawn((
            Door::default(),
            Hitbox::from_center(layout.door_center, DOOR_SIZE, DOOR_SIZE),
        ))
        .id();
    world.spawn(Menu::default());
    let player = world.spawn(Player::new(layout.spawn)?).id();

    info!(
        "Level spawned: {} platforms, {} enemies",
        layout.platforms.len(),
        layout.enemy_platforms.len()
    );
    Ok(LevelEntities { player, door })
}

/// One coin hovering over every platform except the ground.
pub fn spawn_coins(commands: &mut Commands, layout: &LevelLayout) {
    for platform in layout.coin_platforms() {
        commands.spawn((Coin, Coin::hitbox_over(platform)));
    }
}

/// Enter hook for [`GamePhase::Playing`]: start a fresh session.
///
/// Zeroes the score, closes the door, puts the player back on spawn and
/// replaces whatever coins are left with a full set.
pub fn enter_play(
    mut commands: Commands,
    layout: Res<LevelLayout>,
    coins: Query<Entity, With<Coin>>,
    mut doors: Query<&mut Door>,
    mut players: Query<&mut Player>,
    mut session: ResMut<Session>,
) {
    session.reset();
    for mut door in doors.iter_mut() {
        door.close();
    }
    for mut player in players.iter_mut() {
        player.reset();
    }
    for coin in coins.iter() {
        commands.entity(coin).despawn();
    }
    spawn_coins(&mut commands, &layout);
    info!(
        "Session started with {} coins",
        layout.coin_platforms().len()
    );
}

/// The per-tick schedule.
///
/// Gameplay runs only while playing, in a fixed order: player, enemies,
/// coins, door unlock, exit. Chaining inserts a sync point after the coin
/// pickup so its despawns are visible to the door. Cues are forwarded by
/// [`build_audio_schedule`], which runs after this one.
pub fn build_update_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(update_audio_cues);
    update.add_systems(
        (
            player_update_system,
            enemy_patrol_system,
            coin_pickup_system,
            door_unlock_system,
            exit_door_system,
        )
            .chain()
            .run_if(state_is_playing)
            .after(update_audio_cues),
    );
    update.add_systems(check_pending_state.after(exit_door_system));
    update
}

/// Hands queued cues to the audio thread. Kept apart from the update
/// schedule so shutdown can flush cues raised between ticks.
pub fn build_audio_schedule() -> Schedule {
    let mut audio = Schedule::default();
    audio.add_systems(forward_audio_cues);
    audio
}

pub struct Game {
    world: World,
    update: Schedule,
    audio: Schedule,
    entities: LevelEntities,
}

impl Game {
    /// Build a game in [`GamePhase::Menu`].
    ///
    /// `audio_runner` is started on its own thread and receives every cue.
    /// Fails when `layout` is not playable.
    pub fn new<F>(config: &GameConfig, layout: LevelLayout, audio_runner: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(Receiver<AudioCmd>) + Send + 'static,
    {
        let screen = ScreenSize::default();
        layout.validate(screen)?;

        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(screen);
        world.insert_resource(InputState::default());
        world.insert_resource(GameState::new());
        world.insert_resource(NextGameState::new());
        world.insert_resource(Session::default());
        world.insert_resource(config.clone());

        let entities = spawn_level(&mut world, &layout)?;
        world.insert_resource(layout);

        setup_audio(&mut world, config.muted, audio_runner);

        let mut systems_store = SystemsStore::new();
        let enter_play_id = world.register_system(enter_play);
        systems_store.on_enter(GamePhase::Playing, enter_play_id);
        world.insert_resource(systems_store);

        world.add_observer(observe_gamestate_change_event);
        world.add_observer(jump_observer);
        world.add_observer(confirm_observer);
        world.add_observer(menu_pointer_observer);
        world.add_observer(menu_selection_observer);
        world.flush();

        Ok(Self {
            world,
            update: build_update_schedule(),
            audio: build_audio_schedule(),
            entities,
        })
    }

    /// Game whose cues only go to the log.
    pub fn headless(config: &GameConfig, layout: LevelLayout) -> Result<Self, ConfigError> {
        Self::new(config, layout, |rx| run_sink(rx, LogSink))
    }

    /// Advance the simulation by one frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.update.run(&mut self.world);
        self.audio.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Sample held keys for the coming tick. Fresh presses of jump and
    /// confirm are delivered as events right away.
    pub fn sample_input(&mut self, keys: HeldKeys) {
        let input = {
            let mut input = self.world.resource_mut::<InputState>();
            input.sample(keys);
            *input
        };
        if input.jump.just_pressed {
            self.press(InputAction::Jump);
        }
        if input.confirm.just_pressed {
            self.press(InputAction::Confirm);
        }
    }

    pub fn press_jump(&mut self) {
        self.press(InputAction::Jump);
    }

    pub fn press_confirm(&mut self) {
        self.press(InputAction::Confirm);
    }

    fn press(&mut self, action: InputAction) {
        self.world.trigger(InputEvent { action });
        self.world.flush();
    }

    /// Primary pointer press at `pos` in screen coordinates.
    pub fn pointer_pressed(&mut self, pos: Vec2) {
        self.world.trigger(PointerPressedEvent { pos });
        self.world.flush();
    }

    /// Start a session as if PLAY had been clicked.
    pub fn start_session(&mut self) {
        self.world.trigger(MenuSelectionEvent {
            action: MenuAction::Start,
        });
        self.world.flush();
    }

    pub fn phase(&self) -> GamePhase {
        self.world.resource::<GameState>().get()
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<Session>().score
    }

    pub fn muted(&self) -> bool {
        self.world.resource::<AudioSettings>().muted
    }

    pub fn quit_requested(&self) -> bool {
        self.world.contains_resource::<QuitRequested>()
    }

    pub fn door_open(&self) -> bool {
        self.world
            .get::<Door>(self.entities.door)
            .is_some_and(|door| door.open)
    }

    pub fn player(&self) -> Option<&Player> {
        self.world.get::<Player>(self.entities.player)
    }

    pub fn player_mut(&mut self) -> Option<Mut<'_, Player>> {
        self.world.get_mut::<Player>(self.entities.player)
    }

    pub fn coins_remaining(&mut self) -> usize {
        self.world
            .query_filtered::<(), With<Coin>>()
            .iter(&self.world)
            .count()
    }

    /// Snapshot of everything a renderer needs for this frame.
    pub fn view(&mut self) -> SceneView {
        let phase = self.phase();
        let muted = self.muted();

        let mut platforms: Vec<(Platform, Hitbox)> = self
            .world
            .query::<(&Platform, &Hitbox)>()
            .iter(&self.world)
            .map(|(platform, hitbox)| (*platform, *hitbox))
            .collect();
        platforms.sort_by_key(|(platform, _)| *platform);

        let enemies = self
            .world
            .query::<&Enemy>()
            .iter(&self.world)
            .map(SpriteView::of_actor)
            .collect();

        let mut coins: Vec<SpriteView> = self
            .world
            .query_filtered::<&Hitbox, With<Coin>>()
            .iter(&self.world)
            .map(|hitbox| SpriteView::fixed(COIN_IMAGE, *hitbox))
            .collect();
        coins.sort_by(|a, b| a.bounds.x.total_cmp(&b.bounds.x));

        let door = match (
            self.world.get::<Door>(self.entities.door),
            self.world.get::<Hitbox>(self.entities.door),
        ) {
            (Some(door), Some(hitbox)) => Some(SpriteView::fixed(door.image(), *hitbox)),
            _ => None,
        };

        let buttons = if phase == GamePhase::Menu {
            self.world
                .query::<&Menu>()
                .iter(&self.world)
                .flat_map(|menu| menu.items.iter())
                .map(|item| ButtonView {
                    action: item.action,
                    label: button_label(item.action, muted),
                    bounds: item.hitbox,
                })
                .collect()
        } else {
            Vec::new()
        };

        SceneView {
            phase,
            score: self.score(),
            muted,
            platforms: platforms.into_iter().map(|(_, hitbox)| hitbox).collect(),
            player: self.player().map(SpriteView::of_actor),
            enemies,
            coins,
            door,
            buttons,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Stop the audio thread after it has played every queued cue,
    /// including cues raised since the last tick.
    pub fn shutdown(&mut self) {
        if !self.world.contains_resource::<AudioBridge>() {
            return;
        }
        self.audio.run(&mut self.world);
        shutdown_audio(&mut self.world);
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::headless(&GameConfig::new(), LevelLayout::default()).unwrap()
    }

    #[test]
    fn starts_in_menu_without_coins() {
        let mut game = game();
        assert_eq!(game.phase(), GamePhase::Menu);
        assert_eq!(game.coins_remaining(), 0);
        assert_eq!(game.view().buttons.len(), 3);
    }

    #[test]
    fn start_session_spawns_four_coins() {
        let mut game = game();
        game.start_session();
        assert_eq!(game.phase(), GamePhase::Playing);
        assert_eq!(game.coins_remaining(), 4);
        assert!(game.view().buttons.is_empty());
    }

    #[test]
    fn menu_does_not_simulate() {
        let mut game = game();
        let before = game.player().unwrap().hitbox;
        for _ in 0..10 {
            game.tick(1.0 / 60.0);
        }
        assert_eq!(game.player().unwrap().hitbox, before);
    }

    #[test]
    fn invalid_layout_is_rejected() {
        let layout = LevelLayout {
            enemy_platforms: vec![9],
            ..LevelLayout::default()
        };
        assert!(matches!(
            Game::headless(&GameConfig::new(), layout),
            Err(ConfigError::EnemyPlatformOutOfRange { index: 9, .. })
        ));
    }
}
