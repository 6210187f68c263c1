//! Gravity and separation-of-axes collision resolution against static platforms.
//!
//! The player moves in two passes per tick: [`resolve_horizontal`] first, then
//! [`resolve_vertical`]. Platforms are visited in slice order and every
//! correction is applied in sequence, so with overlapping platforms the last
//! one wins. Level platforms never overlap each other.
//!
//! Gravity is applied per tick, not per second: the simulation speed depends
//! on the frame rate, exactly like the fixed 60 Hz loop it was tuned for.

use crate::components::hitbox::Hitbox;

/// Velocity added every tick while airborne (or resting).
pub const GRAVITY_PER_TICK: f32 = 0.8;
/// Maximum downward speed in units per tick.
pub const TERMINAL_FALL_SPEED: f32 = 12.0;
/// Vertical velocity set by a jump. Negative is up.
pub const JUMP_IMPULSE: f32 = -18.0;

/// Outcome of a vertical pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalResolution {
    pub vel_y: f32,
    pub on_ground: bool,
}

/// Apply one tick of gravity, clamped to the terminal fall speed.
pub fn integrate_gravity(vel_y: f32) -> f32 {
    (vel_y + GRAVITY_PER_TICK).min(TERMINAL_FALL_SPEED)
}

/// Move `hitbox` by `dx`, keep it within `[0, screen_width]` and push it out
/// of any platform it ends up inside, opposite to the direction of motion.
///
/// A zero displacement never pushes, even when already overlapping.
pub fn resolve_horizontal(hitbox: &mut Hitbox, dx: f32, platforms: &[Hitbox], screen_width: f32) {
    hitbox.x += dx;

    if hitbox.left() < 0.0 {
        hitbox.set_left(0.0);
    }
    if hitbox.right() > screen_width {
        hitbox.set_right(screen_width);
    }

    for platform in platforms {
        if hitbox.overlaps(platform) {
            if dx > 0.0 {
                hitbox.set_right(platform.left());
            }
            if dx < 0.0 {
                hitbox.set_left(platform.right());
            }
        }
    }
}

/// Integrate gravity into `vel_y`, move `hitbox` vertically and snap it to
/// whichever platform surface it crossed.
///
/// Landing (falling into a platform) zeroes the velocity and reports
/// `on_ground`; bumping a ceiling while rising zeroes the velocity only.
/// `on_ground` is computed fresh: it is false unless a landing happened here.
pub fn resolve_vertical(hitbox: &mut Hitbox, vel_y: f32, platforms: &[Hitbox]) -> VerticalResolution {
    let mut vel_y = integrate_gravity(vel_y);
    hitbox.y += vel_y;
    let mut on_ground = false;

    for platform in platforms {
        if hitbox.overlaps(platform) {
            if vel_y > 0.0 {
                hitbox.set_bottom(platform.top());
                vel_y = 0.0;
                on_ground = true;
            } else if vel_y < 0.0 {
                hitbox.set_top(platform.bottom());
                vel_y = 0.0;
            }
        }
    }

    VerticalResolution { vel_y, on_ground }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ground() -> Hitbox {
        Hitbox::new(0.0, 550.0, 800.0, 50.0)
    }

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn gravity_accumulates_and_clamps() {
        assert!(approx_eq(integrate_gravity(0.0), 0.8));
        assert_eq!(integrate_gravity(11.5), TERMINAL_FALL_SPEED);
        assert_eq!(integrate_gravity(TERMINAL_FALL_SPEED), TERMINAL_FALL_SPEED);
        assert!(approx_eq(integrate_gravity(JUMP_IMPULSE), -17.2));
    }

    #[test]
    fn horizontal_clamps_to_screen() {
        let mut hb = Hitbox::new(2.0, 100.0, 40.0, 60.0);
        resolve_horizontal(&mut hb, -10.0, &[], 800.0);
        assert_eq!(hb.left(), 0.0);

        let mut hb = Hitbox::new(755.0, 100.0, 40.0, 60.0);
        resolve_horizontal(&mut hb, 10.0, &[], 800.0);
        assert_eq!(hb.right(), 800.0);
    }

    #[test]
    fn moving_right_into_wall_stops_at_its_left_edge() {
        let wall = Hitbox::new(200.0, 0.0, 50.0, 600.0);
        let mut hb = Hitbox::new(155.0, 100.0, 40.0, 60.0);
        resolve_horizontal(&mut hb, 10.0, &[wall], 800.0);
        assert_eq!(hb.right(), 200.0);
    }

    #[test]
    fn moving_left_into_wall_stops_at_its_right_edge() {
        let wall = Hitbox::new(200.0, 0.0, 50.0, 600.0);
        let mut hb = Hitbox::new(255.0, 100.0, 40.0, 60.0);
        resolve_horizontal(&mut hb, -10.0, &[wall], 800.0);
        assert_eq!(hb.left(), 250.0);
    }

    #[test]
    fn zero_displacement_never_pushes() {
        let wall = Hitbox::new(200.0, 0.0, 50.0, 600.0);
        let mut hb = Hitbox::new(190.0, 100.0, 40.0, 60.0);
        resolve_horizontal(&mut hb, 0.0, &[wall], 800.0);
        assert_eq!(hb.left(), 190.0);
    }

    #[test]
    fn walking_along_a_floor_does_not_collide() {
        let mut hb = Hitbox::new(100.0, 490.0, 40.0, 60.0);
        resolve_horizontal(&mut hb, 4.0, &[ground()], 800.0);
        assert_eq!(hb.left(), 104.0);
    }

    #[test]
    fn falling_lands_on_platform_top() {
        let mut hb = Hitbox::new(100.0, 485.0, 40.0, 60.0);
        let res = resolve_vertical(&mut hb, 7.0, &[ground()]);
        assert!(res.on_ground);
        assert_eq!(res.vel_y, 0.0);
        assert_eq!(hb.bottom(), 550.0);
    }

    #[test]
    fn rising_bumps_platform_bottom() {
        let ledge = Hitbox::new(100.0, 420.0, 256.0, 25.0);
        let mut hb = Hitbox::new(120.0, 455.0, 40.0, 60.0);
        let res = resolve_vertical(&mut hb, JUMP_IMPULSE, &[ledge]);
        assert!(!res.on_ground);
        assert_eq!(res.vel_y, 0.0);
        assert_eq!(hb.top(), 445.0);
    }

    #[test]
    fn resting_player_stays_grounded() {
        let mut hb = Hitbox::new(100.0, 490.0, 40.0, 60.0);
        for _ in 0..10 {
            let res = resolve_vertical(&mut hb, 0.0, &[ground()]);
            assert!(res.on_ground);
            assert_eq!(hb.bottom(), 550.0);
        }
    }

    #[test]
    fn free_fall_is_not_grounded() {
        let mut hb = Hitbox::new(100.0, 100.0, 40.0, 60.0);
        let res = resolve_vertical(&mut hb, 3.0, &[ground()]);
        assert!(!res.on_ground);
        assert!(approx_eq(res.vel_y, 3.8));
    }
}
