//! Read-only snapshot of the scene for renderers.
//!
//! [`SceneView`] is rebuilt from the world after every tick. It carries the
//! image id, visual center and bounds of everything on screen plus the text a
//! front end shows, so drawing never needs access to the ECS world. The
//! headless binary prints it as JSON.

use glam::Vec2;
use serde::Serialize;

use crate::components::actor::Actor;
use crate::components::hitbox::Hitbox;
use crate::components::menu::MenuAction;
use crate::resources::gamestate::GamePhase;

pub const WIN_TITLE: &str = "YOU WIN!";
pub const WIN_HINT: &str = "SPACE for the menu";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    pub image: &'static str,
    pub center: Vec2,
    pub bounds: Hitbox,
}

impl SpriteView {
    pub fn of_actor<A: Actor>(actor: &A) -> Self {
        Self {
            image: actor.frame(),
            center: actor.visual_center(),
            bounds: *actor.hitbox(),
        }
    }

    /// Static sprite drawn centered on its bounds.
    pub fn fixed(image: &'static str, bounds: Hitbox) -> Self {
        Self {
            image,
            center: bounds.center(),
            bounds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonView {
    pub action: MenuAction,
    pub label: &'static str,
    pub bounds: Hitbox,
}

/// Caption of a menu button. The sound button shows the current state.
pub fn button_label(action: MenuAction, muted: bool) -> &'static str {
    match action {
        MenuAction::Start => "PLAY",
        MenuAction::ToggleAudio if muted => "SOUND: OFF",
        MenuAction::ToggleAudio => "SOUND: ON",
        MenuAction::Exit => "EXIT",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneView {
    pub phase: GamePhase,
    pub score: u32,
    pub muted: bool,
    /// Platform rectangles in layout order; index 0 is the ground.
    pub platforms: Vec<Hitbox>,
    pub player: Option<SpriteView>,
    pub enemies: Vec<SpriteView>,
    /// Remaining coins, left to right.
    pub coins: Vec<SpriteView>,
    pub door: Option<SpriteView>,
    /// Menu buttons; empty outside [`GamePhase::Menu`].
    pub buttons: Vec<ButtonView>,
}

impl SceneView {
    pub fn hud_text(&self) -> String {
        format!("Coins: {}", self.score)
    }

    /// Title and hint of the win screen, if it is showing.
    pub fn banner(&self) -> Option<(&'static str, &'static str)> {
        (self.phase == GamePhase::Won).then_some((WIN_TITLE, WIN_HINT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(phase: GamePhase) -> SceneView {
        SceneView {
            phase,
            score: 30,
            muted: false,
            platforms: vec![],
            player: None,
            enemies: vec![],
            coins: vec![],
            door: None,
            buttons: vec![],
        }
    }

    #[test]
    fn hud_shows_score() {
        assert_eq!(empty(GamePhase::Playing).hud_text(), "Coins: 30");
    }

    #[test]
    fn banner_only_on_win_screen() {
        assert_eq!(empty(GamePhase::Playing).banner(), None);
        assert_eq!(
            empty(GamePhase::Won).banner(),
            Some(("YOU WIN!", "SPACE for the menu"))
        );
    }

    #[test]
    fn sound_label_follows_mute_flag() {
        assert_eq!(button_label(MenuAction::ToggleAudio, false), "SOUND: ON");
        assert_eq!(button_label(MenuAction::ToggleAudio, true), "SOUND: OFF");
        assert_eq!(button_label(MenuAction::Start, true), "PLAY");
    }

    #[test]
    fn fixed_sprite_is_centered() {
        let sprite = SpriteView::fixed("block_coin", Hitbox::new(0.0, 0.0, 64.0, 64.0));
        assert_eq!(sprite.center, Vec2::new(32.0, 32.0));
    }
}
