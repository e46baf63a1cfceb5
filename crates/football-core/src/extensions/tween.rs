// extensions/tween.rs
//
// Time-based interpolation of a point. The game keeps one for the ball: the
// state machine moves the ball instantly, the tween moves what is displayed.
//
// Usage:
//   let mut tween = Tween::new(from, to, 1.0, Easing::Standard);
//   let shown = tween.tick(dt);

use glam::Vec2;
use super::easing::{Easing, ease_vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: Vec2,
    pub to: Vec2,
    /// Duration in seconds.
    pub duration: f32,
    pub elapsed: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: Vec2, to: Vec2, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
            easing,
        }
    }

    /// Start a new tween from wherever this one currently is.
    /// Used when the target changes mid-flight so the ball never jumps.
    pub fn retarget(&self, to: Vec2, duration: f32) -> Self {
        Self::new(self.value(), to, duration, self.easing)
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn tick(&mut self, dt: f32) -> Vec2 {
        self.elapsed = (self.elapsed + dt).min(self.duration.max(0.0));
        self.value()
    }

    pub fn value(&self) -> Vec2 {
        ease_vec2(self.from, self.to, self.progress(), self.easing)
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }
}
