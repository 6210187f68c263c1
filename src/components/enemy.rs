//! Patrolling enemy.
//!
//! An enemy lives on a home platform: it starts with its left edge on the
//! platform's center and walks back and forth between the platform edges.

use bevy_ecs::prelude::Component;

use crate::components::actor::Actor;
use crate::components::animation::Animator;
use crate::components::hitbox::Hitbox;
use crate::error::ConfigError;

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 30.0;
/// Patrol speed in units per second.
pub const ENEMY_SPEED: f32 = 120.0;

const WALK_FRAMES: [&str; 2] = ["slime_normal_walk_a", "slime_normal_walk_b"];
const WALK_INTERVAL: f32 = 0.15;

#[derive(Component, Debug, Clone)]
pub struct Enemy {
    pub hitbox: Hitbox,
    pub limit_left: f32,
    pub limit_right: f32,
    /// +1 moving right, -1 moving left.
    pub dir: f32,
    pub speed: f32,
    anim: Animator,
}

impl Enemy {
    /// Place an enemy on `platform`, patrolling its full width.
    pub fn on_platform(platform: &Hitbox) -> Result<Self, ConfigError> {
        Ok(Self {
            hitbox: Hitbox::new(
                platform.center_x(),
                platform.top() - ENEMY_HEIGHT,
                ENEMY_WIDTH,
                ENEMY_HEIGHT,
            ),
            limit_left: platform.left(),
            limit_right: platform.right(),
            dir: 1.0,
            speed: ENEMY_SPEED,
            anim: Animator::new(&WALK_FRAMES, WALK_INTERVAL)?,
        })
    }

    /// Move one tick and bounce off the patrol bounds.
    ///
    /// The direction only flips against the edge being walked towards, so an
    /// enemy that stays past a bound for a tick does not jitter in place.
    pub fn update(&mut self, dt: f32) {
        self.hitbox.x += self.dir * self.speed * dt;
        if self.dir > 0.0 && self.hitbox.right() >= self.limit_right {
            self.dir = -1.0;
        } else if self.dir < 0.0 && self.hitbox.left() <= self.limit_left {
            self.dir = 1.0;
        }
        self.animate(dt);
    }
}

impl Actor for Enemy {
    fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }

    fn frame(&self) -> &'static str {
        self.anim.current()
    }

    fn animate(&mut self, dt: f32) {
        self.anim.advance(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn home() -> Hitbox {
        Hitbox::new(100.0, 220.0, 256.0, 25.0)
    }

    #[test]
    fn starts_on_platform_center_moving_right() {
        let e = Enemy::on_platform(&home()).unwrap();
        assert_eq!(e.hitbox.left(), 228.0);
        assert_eq!(e.hitbox.bottom(), 220.0);
        assert_eq!(e.limit_left, 100.0);
        assert_eq!(e.limit_right, 356.0);
        assert_eq!(e.dir, 1.0);
    }

    #[test]
    fn reverses_exactly_at_the_bounds() {
        let mut e = Enemy::on_platform(&home()).unwrap();
        let dt = 0.05; // 6 units per tick
        let mut flips = 0;
        for _ in 0..400 {
            let before = e.dir;
            e.update(dt);
            if e.dir != before {
                flips += 1;
                if before > 0.0 {
                    assert!(e.hitbox.right() >= 356.0);
                } else {
                    assert!(e.hitbox.left() <= 100.0);
                }
            } else if e.dir > 0.0 {
                assert!(e.hitbox.right() < 356.0);
            } else {
                assert!(e.hitbox.left() > 100.0);
            }
        }
        assert!(flips >= 4);
    }

    #[test]
    fn right_edge_hit_reverses_direction() {
        let mut e = Enemy::on_platform(&home()).unwrap();
        e.hitbox.set_right(350.0);
        e.update(0.05);
        assert_eq!(e.hitbox.right(), 356.0);
        assert_eq!(e.dir, -1.0);
    }

    #[test]
    fn animates_every_tick() {
        let mut e = Enemy::on_platform(&home()).unwrap();
        let first = e.frame();
        e.update(0.15);
        assert_ne!(e.frame(), first);
    }
}
