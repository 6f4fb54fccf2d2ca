//! Easing and tweening used by camera transitions.

mod tweens;

pub use tweens::{EaseType, Tween, Tweenable};
