//! The player character.
//!
//! [`Player`] owns its hitbox, vertical velocity, grounded flag and the two
//! animators (idle and walk). [`Player::update`] runs one tick of movement:
//! horizontal intent, collision resolution, animation selection.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use crate::components::actor::Actor;
use crate::components::animation::{AnimationState, Animator};
use crate::components::hitbox::Hitbox;
use crate::error::ConfigError;
use crate::physics::{JUMP_IMPULSE, resolve_horizontal, resolve_vertical};

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 60.0;
/// Horizontal speed in units per second.
pub const PLAYER_SPEED: f32 = 250.0;

const IDLE_FRAMES: [&str; 2] = ["character_beige_idle", "character_beige_front"];
const IDLE_INTERVAL: f32 = 0.4;
const WALK_FRAMES: [&str; 2] = ["character_beige_walk_a", "character_beige_walk_b"];
const WALK_INTERVAL: f32 = 0.1;

/// Held horizontal direction keys sampled for this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Horizontal displacement for this tick. Left wins when both are held.
    pub fn dx(&self, speed: f32, dt: f32) -> f32 {
        if self.left {
            -speed * dt
        } else if self.right {
            speed * dt
        } else {
            0.0
        }
    }
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    pub hitbox: Hitbox,
    pub vel_y: f32,
    pub on_ground: bool,
    pub speed: f32,
    pub state: AnimationState,
    pub spawn: Vec2,
    visual_center: Vec2,
    idle_anim: Animator,
    walk_anim: Animator,
}

impl Player {
    /// Create a player whose hitbox top-left sits on `spawn`.
    pub fn new(spawn: Vec2) -> Result<Self, ConfigError> {
        let hitbox = Hitbox::new(spawn.x, spawn.y, PLAYER_WIDTH, PLAYER_HEIGHT);
        Ok(Self {
            hitbox,
            vel_y: 0.0,
            on_ground: false,
            speed: PLAYER_SPEED,
            state: AnimationState::Idle,
            spawn,
            visual_center: hitbox.center(),
            idle_anim: Animator::new(&IDLE_FRAMES, IDLE_INTERVAL)?,
            walk_anim: Animator::new(&WALK_FRAMES, WALK_INTERVAL)?,
        })
    }

    /// Jump if standing on a platform. Returns whether the jump happened so
    /// the caller can emit the jump cue; airborne calls change nothing.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vel_y = JUMP_IMPULSE;
        self.on_ground = false;
        true
    }

    /// One tick of movement against `platforms`.
    pub fn update(&mut self, dt: f32, intent: MoveIntent, platforms: &[Hitbox], screen_width: f32) {
        let dx = intent.dx(self.speed, dt);

        resolve_horizontal(&mut self.hitbox, dx, platforms, screen_width);
        let vertical = resolve_vertical(&mut self.hitbox, self.vel_y, platforms);
        self.vel_y = vertical.vel_y;
        self.on_ground = vertical.on_ground;

        self.state = if dx != 0.0 {
            AnimationState::Walking
        } else {
            AnimationState::Idle
        };
        self.animate(dt);
        self.visual_center = self.hitbox.center();
    }

    /// Teleport the hitbox back to the spawn point. Velocity is kept: a hit
    /// while falling keeps falling from the spawn point. Grounding is cleared
    /// until the next update lands the player again.
    pub fn respawn(&mut self) {
        self.hitbox.set_top_left(self.spawn);
        self.on_ground = false;
        self.visual_center = self.hitbox.center();
    }

    /// Full reset for a new session.
    pub fn reset(&mut self) {
        self.respawn();
        self.vel_y = 0.0;
        self.state = AnimationState::Idle;
    }

    fn active_animator(&self) -> &Animator {
        match self.state {
            AnimationState::Idle => &self.idle_anim,
            AnimationState::Walking => &self.walk_anim,
        }
    }
}

impl Actor for Player {
    fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }

    fn frame(&self) -> &'static str {
        self.active_animator().current()
    }

    fn animate(&mut self, dt: f32) {
        match self.state {
            AnimationState::Idle => self.idle_anim.advance(dt),
            AnimationState::Walking => self.walk_anim.advance(dt),
        }
    }

    fn visual_center(&self) -> Vec2 {
        self.visual_center
    }
}
