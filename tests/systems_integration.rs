//! System-level integration tests: individual systems and observers run
//! through a `bevy_ecs::Schedule` on a hand-built world.

use bevy_ecs::prelude::*;
use glam::Vec2;

use coinquest::components::coin::Coin;
use coinquest::components::door::Door;
use coinquest::components::enemy::Enemy;
use coinquest::components::hitbox::Hitbox;
use coinquest::components::platform::Platform;
use coinquest::components::player::Player;
use coinquest::events::audio::AudioCue;
use coinquest::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use coinquest::resources::audio::AudioSettings;
use coinquest::resources::gamestate::{GamePhase, GameState, NextGameState, NextGameStates};
use coinquest::resources::input::InputState;
use coinquest::resources::screensize::ScreenSize;
use coinquest::resources::session::Session;
use coinquest::resources::systemsstore::SystemsStore;
use coinquest::resources::worldtime::WorldTime;
use coinquest::systems::collectibles::{coin_pickup_system, door_unlock_system, exit_door_system};
use coinquest::systems::enemy::enemy_patrol_system;
use coinquest::systems::player::player_update_system;

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::new(delta));
    world.insert_resource(ScreenSize { w: 800, h: 600 });
    world.insert_resource(InputState::default());
    world.insert_resource(AudioSettings::default());
    world.insert_resource(Session::default());
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.init_resource::<Messages<AudioCue>>();
    world
}

fn cue_count(world: &World) -> usize {
    world.resource::<Messages<AudioCue>>().len()
}

#[test]
fn enemy_overlap_hurts_on_every_tick() {
    let mut world = make_world(1.0 / 60.0);
    let home = Hitbox::new(100.0, 220.0, 256.0, 25.0);
    let enemy = Enemy::on_platform(&home).unwrap();
    let spawn = Vec2::new(300.0, 100.0);
    let mut player = Player::new(spawn).unwrap();
    player.hitbox.set_top_left(enemy.hitbox.center());
    let player = world.spawn(player).id();
    world.spawn(enemy);

    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_patrol_system);
    schedule.run(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().hitbox.top(), 100.0);
    assert_eq!(cue_count(&world), 1);

    // Put it back on the enemy: hurt again, no grace period.
    let center = {
        let mut enemies = world.query::<&Enemy>();
        enemies.single(&world).unwrap().hitbox.center()
    };
    world
        .get_mut::<Player>(player)
        .unwrap()
        .hitbox
        .set_top_left(center);
    schedule.run(&mut world);
    assert_eq!(world.get::<Player>(player).unwrap().hitbox.left(), 300.0);
    assert_eq!(cue_count(&world), 2);
}

#[test]
fn muted_hurt_still_respawns_without_a_cue() {
    let mut world = make_world(1.0 / 60.0);
    world.resource_mut::<AudioSettings>().muted = true;
    let home = Hitbox::new(100.0, 220.0, 256.0, 25.0);
    let enemy = Enemy::on_platform(&home).unwrap();
    let mut player = Player::new(Vec2::new(300.0, 100.0)).unwrap();
    player.hitbox.set_top_left(enemy.hitbox.center());
    let player = world.spawn(player).id();
    world.spawn(enemy);

    let mut schedule = Schedule::default();
    schedule.add_systems(enemy_patrol_system);
    schedule.run(&mut world);

    assert_eq!(world.get::<Player>(player).unwrap().hitbox.top(), 100.0);
    assert_eq!(cue_count(&world), 0);
}

#[test]
fn overlapping_coins_are_all_collected_in_one_tick() {
    let mut world = make_world(1.0 / 60.0);
    world.spawn(Player::new(Vec2::new(100.0, 100.0)).unwrap());
    world.spawn((Coin, Hitbox::new(90.0, 90.0, 64.0, 64.0)));
    world.spawn((Coin, Hitbox::new(110.0, 110.0, 64.0, 64.0)));
    world.spawn((Coin, Hitbox::new(600.0, 100.0, 64.0, 64.0)));
    let door = world
        .spawn((Door::default(), Hitbox::new(700.0, 0.0, 64.0, 64.0)))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems((coin_pickup_system, door_unlock_system).chain());
    schedule.run(&mut world);

    assert_eq!(world.resource::<Session>().score, 20);
    assert_eq!(cue_count(&world), 2);
    let remaining = world
        .query_filtered::<(), With<Coin>>()
        .iter(&world)
        .count();
    assert_eq!(remaining, 1);
    assert!(!world.get::<Door>(door).unwrap().open);
}

#[test]
fn door_unlocks_in_the_tick_the_last_coin_goes() {
    let mut world = make_world(1.0 / 60.0);
    world.spawn(Player::new(Vec2::new(100.0, 100.0)).unwrap());
    world.spawn((Coin, Hitbox::new(90.0, 90.0, 64.0, 64.0)));
    let door = world
        .spawn((Door::default(), Hitbox::new(700.0, 0.0, 64.0, 64.0)))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems((coin_pickup_system, door_unlock_system).chain());
    schedule.run(&mut world);
    assert!(world.get::<Door>(door).unwrap().open);

    // Nothing left to collect: no more score, the door stays open.
    schedule.run(&mut world);
    assert_eq!(world.resource::<Session>().score, 10);
    assert!(world.get::<Door>(door).unwrap().open);
}

#[test]
fn exit_requires_an_open_door() {
    let mut world = make_world(1.0 / 60.0);
    world.spawn(Player::new(Vec2::new(100.0, 100.0)).unwrap());
    let door = world
        .spawn((Door::default(), Hitbox::new(110.0, 110.0, 64.0, 64.0)))
        .id();

    let mut schedule = Schedule::default();
    schedule.add_systems(exit_door_system);
    schedule.run(&mut world);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        NextGameStates::Unchanged
    );

    world.get_mut::<Door>(door).unwrap().unlock();
    schedule.run(&mut world);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        NextGameStates::Pending(GamePhase::Won)
    );
}

#[test]
fn player_lands_on_the_ledge_before_the_ground() {
    let mut world = make_world(1.0 / 60.0);
    world.spawn((Platform { order: 1 }, Hitbox::new(100.0, 420.0, 256.0, 25.0)));
    world.spawn((Platform { order: 0 }, Hitbox::new(0.0, 550.0, 800.0, 50.0)));
    let player = world.spawn(Player::new(Vec2::new(120.0, 355.0)).unwrap()).id();

    let mut schedule = Schedule::default();
    schedule.add_systems(player_update_system);
    for _ in 0..10 {
        schedule.run(&mut world);
    }

    let player = world.get::<Player>(player).unwrap();
    assert!(player.on_ground);
    assert_eq!(player.hitbox.bottom(), 420.0);
}

#[test]
fn held_direction_moves_the_player() {
    let mut world = make_world(0.1);
    world.spawn((Platform { order: 0 }, Hitbox::new(0.0, 550.0, 800.0, 50.0)));
    let player = world.spawn(Player::new(Vec2::new(100.0, 490.0)).unwrap()).id();
    world.resource_mut::<InputState>().move_right.sample(true);

    let mut schedule = Schedule::default();
    schedule.add_systems(player_update_system);
    schedule.run(&mut world);

    // 250 units per second for 0.1 s.
    let left = world.get::<Player>(player).unwrap().hitbox.left();
    assert!((left - 125.0).abs() < 1e-4);
}

#[test]
fn illegal_phase_change_is_rejected_and_cleared() {
    let mut world = make_world(1.0 / 60.0);
    world.insert_resource(SystemsStore::new());
    world.add_observer(observe_gamestate_change_event);
    world.flush();

    world.resource_mut::<NextGameState>().set(GamePhase::Won);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    assert_eq!(world.resource::<GameState>().get(), GamePhase::Menu);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        NextGameStates::Unchanged
    );
}

#[test]
fn legal_phase_change_runs_the_enter_hook() {
    #[derive(Resource, Default)]
    struct Entered(u32);

    fn mark_entered(mut entered: ResMut<Entered>) {
        entered.0 += 1;
    }

    let mut world = make_world(1.0 / 60.0);
    world.init_resource::<Entered>();
    let mut store = SystemsStore::new();
    let id = world.register_system(mark_entered);
    store.on_enter(GamePhase::Playing, id);
    world.insert_resource(store);
    world.add_observer(observe_gamestate_change_event);
    world.flush();

    world.resource_mut::<NextGameState>().set(GamePhase::Playing);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    assert_eq!(world.resource::<GameState>().get(), GamePhase::Playing);
    assert_eq!(world.resource::<Entered>().0, 1);
}
