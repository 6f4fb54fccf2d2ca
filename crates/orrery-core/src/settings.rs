//! Tunables shared by the core and the application config layer.

use serde::{Deserialize, Serialize};

use crate::animation::EaseType;

/// How the starting look-at point is captured when a transition begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LookAtCapture {
    /// Project the view direction outward by the camera's distance from the
    /// origin. Approximate, and degenerate for a camera at the origin.
    #[default]
    Projected,
    /// Use the look-at target the camera was last pointed at.
    Tracked,
}

/// Camera navigation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Length of a preset transition in milliseconds
    pub transition_ms: f64,
    /// Easing applied to transition progress
    pub easing: EaseType,
    pub look_at_capture: LookAtCapture,
    /// Default radius for "orbit current target"
    pub orbit_radius: f32,
    /// Default angular speed for "orbit current target" (rad/s)
    pub orbit_speed: f32,
    /// Time spent on each guided tour stop in milliseconds
    pub tour_dwell_ms: f64,
    /// Fraction of the current distance moved per zoom step
    pub zoom_step: f32,
    /// Closest the free camera may zoom toward the origin
    pub min_distance: f32,
    /// Farthest the free camera may zoom away from the origin
    pub max_distance: f32,
    /// Free-look smoothing time constant in seconds.
    /// A value of 0.325 reaches ~5% of the remaining distance per 60 Hz frame.
    pub follow_smoothness: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            transition_ms: 2000.0,
            easing: EaseType::CubicInOut,
            look_at_capture: LookAtCapture::Projected,
            orbit_radius: 10.0,
            orbit_speed: 0.5,
            tour_dwell_ms: 4000.0,
            zoom_step: 0.1,
            min_distance: 5.0,
            max_distance: 200.0,
            follow_smoothness: 0.325,
        }
    }
}

/// Scene population and time settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    /// Seed for belt and comet placement
    pub seed: u64,
    pub asteroid_count: usize,
    pub kuiper_count: usize,
    pub comet_count: usize,
    /// Background point stars
    pub star_count: usize,
    /// Time scale at startup
    pub initial_time_scale: f32,
    /// Upper bound for the time scale slider
    pub max_time_scale: f32,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            seed: 0x5EED_0F_0A,
            asteroid_count: 800,
            kuiper_count: 200,
            comet_count: 3,
            star_count: crate::starfield::STAR_COUNT,
            initial_time_scale: 1.0,
            max_time_scale: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_settings() {
        let settings = CameraSettings::default();
        assert_eq!(settings.transition_ms, 2000.0);
        assert_eq!(settings.tour_dwell_ms, 4000.0);
        assert_eq!(settings.look_at_capture, LookAtCapture::Projected);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let settings: CameraSettings =
            ron::from_str("(transition_ms: 1500.0, look_at_capture: Tracked)").unwrap();
        assert_eq!(settings.transition_ms, 1500.0);
        assert_eq!(settings.look_at_capture, LookAtCapture::Tracked);
        assert_eq!(settings.orbit_radius, 10.0);
    }
}
