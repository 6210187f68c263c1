//! Coin Quest entry point.
//!
//! A small 2D platformer: collect every coin, then reach the door.
//!
//! - Windowed front end (cargo feature `raylib`): window, keyboard and mouse
//!   input, textures and sounds from `assets/`.
//! - Headless front end: starts a session, runs a fixed number of frames and
//!   prints the final scene as JSON.
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features raylib
//! cargo run -- --headless --frames 300
//! ```

// Do not create console on Windows
#![cfg_attr(
    all(target_os = "windows", feature = "raylib"),
    windows_subsystem = "windows"
)]

use std::path::PathBuf;

use clap::Parser;
use log::{error, info};

use coinquest::error::ConfigError;
use coinquest::game::Game;
use coinquest::resources::gameconfig::GameConfig;
use coinquest::resources::level::LevelLayout;
use coinquest::resources::screensize::ScreenSize;

/// Coin Quest
#[derive(Parser)]
#[command(version, about = "Collect every coin, then reach the door.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON level replacing the built-in layout.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Start with audio muted.
    #[arg(long)]
    mute: bool,

    /// Run without a window even when built with raylib.
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in headless mode.
    #[arg(long, value_name = "N", default_value_t = 600)]
    frames: u32,

    /// Write the built-in level as JSON and exit.
    /// Prints to stdout unless a path is given.
    #[arg(long, value_name = "PATH")]
    dump_level: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    // Early-exit: dump the level and quit (no window/audio needed)
    if let Some(maybe_path) = cli.dump_level {
        return dump_level(maybe_path);
    }

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if config.config_path.exists() {
        config.load_from_file()?;
    } else {
        info!(
            "No config file at {}, using defaults",
            config.config_path.display()
        );
    }
    if cli.level.is_some() {
        config.level_path = cli.level;
    }
    if cli.mute {
        config.muted = true;
    }

    let layout = match &config.level_path {
        Some(path) => LevelLayout::load_from_file(path, ScreenSize::default())?,
        None => LevelLayout::default(),
    };

    #[cfg(feature = "raylib")]
    {
        if !cli.headless {
            return window::run(&config, layout);
        }
    }
    #[cfg(not(feature = "raylib"))]
    {
        if !cli.headless {
            info!("Built without the raylib feature, running headless");
        }
    }

    run_headless(&config, layout, cli.frames)
}

fn dump_level(path: Option<PathBuf>) -> Result<(), ConfigError> {
    let json = LevelLayout::default()
        .to_json()
        .map_err(ConfigError::Encode)?;
    match path {
        Some(path) => {
            std::fs::write(&path, json).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            println!("Level written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn run_headless(config: &GameConfig, layout: LevelLayout, frames: u32) -> Result<(), ConfigError> {
    let mut game = Game::headless(config, layout)?;
    let dt = config.frame_time();
    game.start_session();

    for frame in 1..=frames {
        game.tick(dt);
        if frame % config.target_fps.max(1) == 0 {
            info!(
                "frame {}: phase={:?} score={} coins left={}",
                frame,
                game.phase(),
                game.score(),
                game.coins_remaining()
            );
        }
    }

    let view = game.view();
    game.shutdown();
    match serde_json::to_string_pretty(&view) {
        Ok(json) => println!("{json}"),
        Err(e) => error!("failed to serialize scene: {e}"),
    }
    Ok(())
}

#[cfg(feature = "raylib")]
mod window {
    use log::info;

    use coinquest::error::ConfigError;
    use coinquest::game::Game;
    use coinquest::resources::gameconfig::GameConfig;
    use coinquest::resources::level::LevelLayout;
    use coinquest::resources::screensize::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use coinquest::resources::texturestore::TextureStore;
    use coinquest::systems::audio::raylib_audio_thread;
    use coinquest::systems::input::{poll_held_keys, poll_pointer_press};
    use coinquest::systems::render::draw_scene;

    pub fn run(config: &GameConfig, layout: LevelLayout) -> Result<(), ConfigError> {
        let mut builder = raylib::init();
        builder
            .size(SCREEN_WIDTH, SCREEN_HEIGHT)
            .title(&config.title);
        if config.vsync {
            builder.vsync();
        }
        let (mut rl, thread) = builder.build();
        rl.set_target_fps(config.target_fps);
        // Disable ESC to exit
        rl.set_exit_key(None);

        let textures = TextureStore::load_all(&mut rl, &thread);
        let mut game = Game::new(config, layout, raylib_audio_thread)?;

        // --------------- Main loop ---------------
        while !rl.window_should_close() && !game.quit_requested() {
            game.sample_input(poll_held_keys(&rl));
            if let Some(pos) = poll_pointer_press(&rl) {
                game.pointer_pressed(pos);
            }

            // Fixed step: gravity and jump are per tick.
            game.tick(config.frame_time());

            let view = game.view();
            let mut d = rl.begin_drawing(&thread);
            draw_scene(&mut d, &view, &textures);
        }

        info!("Shutting down");
        game.shutdown();
        Ok(())
    }
}
