//! Texture cache for the windowed front end.
//!
//! Images are looked up by sprite id and loaded from
//! `assets/images/<id>.png`. Missing files are logged once and the renderer
//! falls back to a flat rectangle for that id.

use log::{debug, warn};
use raylib::prelude::{RaylibHandle, RaylibThread, Texture2D};
use rustc_hash::FxHashMap;

pub const IMAGE_DIR: &str = "assets/images";

/// Every image id the game can show.
pub const IMAGE_IDS: [&str; 11] = [
    "character_beige_idle",
    "character_beige_front",
    "character_beige_walk_a",
    "character_beige_walk_b",
    "slime_normal_walk_a",
    "slime_normal_walk_b",
    "block_coin",
    "door_closed",
    "door_open",
    "terrain_grass_block",
    "background",
];

#[derive(Default)]
pub struct TextureStore {
    pub map: FxHashMap<&'static str, Texture2D>,
}

impl TextureStore {
    /// Load every id in [`IMAGE_IDS`] that has a file on disk.
    pub fn load_all(rl: &mut RaylibHandle, thread: &RaylibThread) -> Self {
        let mut store = Self::default();
        for id in IMAGE_IDS {
            let path = format!("{}/{}.png", IMAGE_DIR, id);
            match rl.load_texture(thread, &path) {
                Ok(texture) => {
                    debug!("loaded texture '{}'", path);
                    store.map.insert(id, texture);
                }
                Err(e) => warn!("texture '{}' not loaded: {}", path, e),
            }
        }
        store
    }

    pub fn get(&self, id: &str) -> Option<&Texture2D> {
        self.map.get(id)
    }
}
