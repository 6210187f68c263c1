//! Cyclic sprite animation.
//!
//! An [`Animator`] walks an ordered list of frame ids on a fixed interval and
//! wraps around forever. Renderers only ever see [`Animator::current`].

use serde::Serialize;
use smallvec::SmallVec;

use crate::error::ConfigError;

/// Which animator an actor is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum AnimationState {
    #[default]
    Idle,
    Walking,
}

#[derive(Debug, Clone)]
pub struct Animator {
    frames: SmallVec<[&'static str; 4]>,
    interval: f32,
    index: usize,
    elapsed: f32,
}

impl Animator {
    /// Build an animator over `frames`, switching every `interval` seconds.
    ///
    /// Fails with [`ConfigError::EmptyAnimation`] when `frames` is empty and
    /// with [`ConfigError::InvalidInterval`] for negative or non-finite intervals.
    pub fn new(frames: &[&'static str], interval: f32) -> Result<Self, ConfigError> {
        if frames.is_empty() {
            return Err(ConfigError::EmptyAnimation);
        }
        if !interval.is_finite() || interval < 0.0 {
            return Err(ConfigError::InvalidInterval(interval));
        }
        Ok(Self {
            frames: SmallVec::from_slice(frames),
            interval,
            index: 0,
            elapsed: 0.0,
        })
    }

    /// Accumulate `dt` seconds. At most one frame step per call; the
    /// accumulator is zeroed (not reduced by the interval) when it fires.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            self.index = (self.index + 1) % self.frames.len();
        }
    }

    pub fn current(&self) -> &'static str {
        self.frames[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_frame_list() {
        assert!(matches!(
            Animator::new(&[], 0.1),
            Err(ConfigError::EmptyAnimation)
        ));
    }

    #[test]
    fn rejects_bad_interval() {
        assert!(matches!(
            Animator::new(&["a"], -1.0),
            Err(ConfigError::InvalidInterval(_))
        ));
        assert!(matches!(
            Animator::new(&["a"], f32::NAN),
            Err(ConfigError::InvalidInterval(_))
        ));
    }

    #[test]
    fn starts_on_first_frame() {
        let anim = Animator::new(&["walk_a", "walk_b"], 0.1).unwrap();
        assert_eq!(anim.current(), "walk_a");
        assert_eq!(anim.frame_count(), 2);
    }

    #[test]
    fn steps_once_interval_is_reached() {
        let mut anim = Animator::new(&["idle", "front"], 0.4).unwrap();
        anim.advance(0.25);
        assert_eq!(anim.current(), "idle");
        anim.advance(0.25);
        assert_eq!(anim.current(), "front");
    }

    #[test]
    fn accumulator_resets_to_zero_on_step() {
        let mut anim = Animator::new(&["a", "b", "c"], 0.15).unwrap();
        // Overshoot is discarded, not carried into the next frame.
        anim.advance(0.29);
        assert_eq!(anim.index(), 1);
        anim.advance(0.1);
        assert_eq!(anim.index(), 1);
        anim.advance(0.06);
        assert_eq!(anim.index(), 2);
    }

    #[test]
    fn wraps_around_indefinitely() {
        let mut anim = Animator::new(&["a", "b"], 0.1).unwrap();
        let seen: Vec<&str> = (0..5)
            .map(|_| {
                anim.advance(0.1);
                anim.current()
            })
            .collect();
        assert_eq!(seen, vec!["b", "a", "b", "a", "b"]);
    }

    #[test]
    fn single_frame_stays_put() {
        let mut anim = Animator::new(&["block_coin"], 0.1).unwrap();
        for _ in 0..10 {
            anim.advance(0.2);
        }
        assert_eq!(anim.current(), "block_coin");
    }
}
