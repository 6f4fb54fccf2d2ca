//! Easing curves and timestamp-driven tweens.

use glam::Vec3;
use keyframe::{ease, functions};
use serde::{Deserialize, Serialize};

/// Easing function type for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EaseType {
    /// Constant speed interpolation
    Linear,
    /// Fast start, slow end
    QuadOut,
    /// Symmetric cubic: slow start and end, zero slope at both ends
    #[default]
    CubicInOut,
}

impl EaseType {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    ///
    /// Input outside the unit range is clamped, so the result is always in
    /// `[0, 1]` with `f(0) = 0` and `f(1) = 1`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = (t as f64).clamp(0.0, 1.0);
        let result = match self {
            EaseType::Linear => ease(functions::Linear, 0.0, 1.0, t),
            EaseType::QuadOut => ease(functions::EaseOutQuad, 0.0, 1.0, t),
            EaseType::CubicInOut => ease(functions::EaseInOutCubic, 0.0, 1.0, t),
        };
        result as f32
    }
}

/// Trait for types that can be interpolated (tweened).
pub trait Tweenable: Copy {
    /// Linear interpolation between two values.
    /// `t` should be 0.0 to 1.0, where 0.0 returns `a` and 1.0 returns `b`.
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Tweenable for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

impl Tweenable for Vec3 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a.lerp(b, t)
    }
}

/// A value moving from `start` to `target` over a fixed wall-clock window.
///
/// Unlike a delta-accumulating animation, a tween is sampled with an
/// absolute timestamp, so skipped or uneven frames never change where it
/// ends up.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T: Tweenable> {
    start: T,
    target: T,
    /// Timestamp the tween started at (milliseconds)
    start_ms: f64,
    /// Length of the tween (milliseconds)
    duration_ms: f64,
    easing: EaseType,
}

impl<T: Tweenable> Tween<T> {
    pub fn new(start: T, target: T, start_ms: f64, duration_ms: f64, easing: EaseType) -> Self {
        Self {
            start,
            target,
            start_ms,
            duration_ms: duration_ms.max(0.0),
            easing,
        }
    }

    /// Linear progress in `[0, 1]`: `min(elapsed / duration, 1)`.
    ///
    /// A zero-length tween is complete immediately.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Value at `now_ms`. Exactly `target` once progress reaches 1.
    pub fn sample(&self, now_ms: f64) -> T {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return self.target;
        }
        T::lerp(self.start, self.target, self.easing.apply(progress))
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn start(&self) -> T {
        self.start
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Remaining time in milliseconds.
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.start_ms + self.duration_ms - now_ms).max(0.0)
    }
}
