//! Raylib rendering of a [`SceneView`].
//!
//! Everything is drawn in screen space, back to front: background, platform
//! tiles, door, coins, enemies, player, then the HUD or the menu. A sprite
//! without a loaded texture is drawn as a flat rectangle over its bounds.
use raylib::core::text::measure_text;
use raylib::prelude::*;

use crate::components::hitbox::Hitbox;
use crate::resources::gamestate::GamePhase;
use crate::resources::level::BLOCK_SIZE;
use crate::resources::texturestore::TextureStore;
use crate::view::{SceneView, SpriteView};

const PLATFORM_TILE: &str = "terrain_grass_block";
const HUD_FONT: i32 = 24;
const BUTTON_FONT: i32 = 28;
const WIN_FONT: i32 = 48;

pub fn draw_scene(d: &mut RaylibDrawHandle, view: &SceneView, textures: &TextureStore) {
    d.clear_background(Color::SKYBLUE);
    if let Some(background) = textures.get("background") {
        d.draw_texture(background, 0, 0, Color::WHITE);
    }

    match view.phase {
        GamePhase::Menu => draw_menu(d, view),
        GamePhase::Playing => {
            draw_world(d, view, textures);
            d.draw_text(&view.hud_text(), 20, 20, HUD_FONT, Color::BLACK);
        }
        GamePhase::Won => {
            draw_world(d, view, textures);
            if let Some((title, hint)) = view.banner() {
                draw_centered(d, title, 250, WIN_FONT, Color::GOLD);
                draw_centered(d, hint, 320, HUD_FONT, Color::BLACK);
            }
        }
    }
}

fn draw_world(d: &mut RaylibDrawHandle, view: &SceneView, textures: &TextureStore) {
    for platform in &view.platforms {
        draw_platform(d, platform, textures);
    }
    if let Some(door) = &view.door {
        draw_sprite(d, door, textures, Color::BROWN);
    }
    for coin in &view.coins {
        draw_sprite(d, coin, textures, Color::GOLD);
    }
    for enemy in &view.enemies {
        draw_sprite(d, enemy, textures, Color::RED);
    }
    if let Some(player) = &view.player {
        draw_sprite(d, player, textures, Color::BLUE);
    }
}

/// Tile the platform with terrain blocks, clipped to its rectangle.
fn draw_platform(d: &mut RaylibDrawHandle, platform: &Hitbox, textures: &TextureStore) {
    let Some(tile) = textures.get(PLATFORM_TILE) else {
        d.draw_rectangle(
            platform.x as i32,
            platform.y as i32,
            platform.w as i32,
            platform.h as i32,
            Color::DARKGREEN,
        );
        return;
    };

    let mut x = platform.left();
    while x < platform.right() {
        let width = BLOCK_SIZE.min(platform.right() - x);
        let height = BLOCK_SIZE.min(platform.h);
        let src = Rectangle::new(
            0.0,
            0.0,
            tile.width as f32 * width / BLOCK_SIZE,
            tile.height as f32 * height / BLOCK_SIZE,
        );
        let dest = Rectangle::new(x, platform.top(), width, height);
        d.draw_texture_pro(tile, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        x += BLOCK_SIZE;
    }
}

/// Draw `sprite` centered on its visual center, or `fallback` over its bounds.
fn draw_sprite(d: &mut RaylibDrawHandle, sprite: &SpriteView, textures: &TextureStore, fallback: Color) {
    match textures.get(sprite.image) {
        Some(tex) => {
            let (w, h) = (tex.width as f32, tex.height as f32);
            let src = Rectangle::new(0.0, 0.0, w, h);
            let dest = Rectangle::new(sprite.center.x, sprite.center.y, w, h);
            let origin = Vector2::new(w / 2.0, h / 2.0);
            d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
        }
        None => {
            let b = sprite.bounds;
            d.draw_rectangle(b.x as i32, b.y as i32, b.w as i32, b.h as i32, fallback);
        }
    }
}

fn draw_menu(d: &mut RaylibDrawHandle, view: &SceneView) {
    for button in &view.buttons {
        let b = button.bounds;
        d.draw_rectangle(b.x as i32, b.y as i32, b.w as i32, b.h as i32, Color::DARKGRAY);
        d.draw_rectangle_lines(b.x as i32, b.y as i32, b.w as i32, b.h as i32, Color::WHITE);
        let text_w = measure_text(button.label, BUTTON_FONT);
        d.draw_text(
            button.label,
            (b.center_x() as i32) - text_w / 2,
            (b.center().y as i32) - BUTTON_FONT / 2,
            BUTTON_FONT,
            Color::WHITE,
        );
    }
}

fn draw_centered(d: &mut RaylibDrawHandle, text: &str, y: i32, size: i32, color: Color) {
    let width = d.get_screen_width();
    let text_w = measure_text(text, size);
    d.draw_text(text, (width - text_w) / 2, y, size, color);
}
