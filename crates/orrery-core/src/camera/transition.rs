//! A single in-flight camera move between two viewpoints.

use glam::Vec3;

use super::presets::OVERVIEW;
use super::view::{Camera, ViewPoint};
use crate::animation::{EaseType, Tween};
use crate::settings::LookAtCapture;

/// The pose a transition starts from.
pub fn capture_view(camera: &Camera, capture: LookAtCapture) -> ViewPoint {
    let look_at = match capture {
        LookAtCapture::Projected => camera.approximate_look_at(),
        LookAtCapture::Tracked => camera.look_target(),
    };
    ViewPoint {
        eye: camera.position(),
        look_at,
    }
}

/// Where a transition is headed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewTarget {
    /// A named preset
    Preset(String),
    /// The fixed startup view used by reset
    Default,
}

impl ViewTarget {
    /// Whether arriving here pins the camera. Every preset does except the overview.
    pub fn locks(&self) -> bool {
        matches!(self, ViewTarget::Preset(id) if id != OVERVIEW)
    }

    pub fn preset_id(&self) -> Option<&str> {
        match self {
            ViewTarget::Preset(id) => Some(id),
            ViewTarget::Default => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ViewTarget::Preset(id) => id,
            ViewTarget::Default => "default",
        }
    }
}

/// Eye and look-at interpolation captured when the move was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionState {
    target: ViewTarget,
    eye: Tween<Vec3>,
    look_at: Tween<Vec3>,
}

impl TransitionState {
    pub fn new(
        target: ViewTarget,
        start: ViewPoint,
        destination: ViewPoint,
        start_ms: f64,
        duration_ms: f64,
        easing: EaseType,
    ) -> Self {
        Self {
            target,
            eye: Tween::new(start.eye, destination.eye, start_ms, duration_ms, easing),
            look_at: Tween::new(
                start.look_at,
                destination.look_at,
                start_ms,
                duration_ms,
                easing,
            ),
        }
    }

    pub fn target(&self) -> &ViewTarget {
        &self.target
    }

    pub fn start(&self) -> ViewPoint {
        ViewPoint {
            eye: self.eye.start(),
            look_at: self.look_at.start(),
        }
    }

    pub fn start_ms(&self) -> f64 {
        self.eye.start_ms()
    }

    pub fn duration_ms(&self) -> f64 {
        self.eye.duration_ms()
    }

    pub fn progress(&self, now_ms: f64) -> f32 {
        self.eye.progress(now_ms)
    }

    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        self.eye.remaining_ms(now_ms)
    }

    /// Pose at `now_ms`.
    pub fn sample(&self, now_ms: f64) -> ViewPoint {
        ViewPoint {
            eye: self.eye.sample(now_ms),
            look_at: self.look_at.sample(now_ms),
        }
    }

    /// Move the camera to the pose at `now_ms`. Returns `true` once the
    /// camera has arrived.
    pub fn apply(&self, camera: &mut Camera, now_ms: f64) -> bool {
        let pose = self.sample(now_ms);
        camera.set_position(pose.eye);
        camera.look_at(pose.look_at);
        self.eye.is_finished(now_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun_transition() -> TransitionState {
        TransitionState::new(
            ViewTarget::Preset("sun".to_string()),
            ViewPoint {
                eye: Vec3::new(0.0, 20.0, 45.0),
                look_at: Vec3::ZERO,
            },
            ViewPoint {
                eye: Vec3::new(0.0, 8.0, 15.0),
                look_at: Vec3::ZERO,
            },
            0.0,
            2000.0,
            EaseType::CubicInOut,
        )
    }

    #[test]
    fn test_capture_modes() {
        let camera = Camera::new(Vec3::new(12.0, 5.0, 12.0), Vec3::new(9.0, 0.0, 0.0));

        let tracked = capture_view(&camera, LookAtCapture::Tracked);
        assert_eq!(tracked.eye, Vec3::new(12.0, 5.0, 12.0));
        assert_eq!(tracked.look_at, Vec3::new(9.0, 0.0, 0.0));

        let projected = capture_view(&camera, LookAtCapture::Projected);
        assert_eq!(projected.look_at, camera.approximate_look_at());
    }

    #[test]
    fn test_lock_rules() {
        assert!(ViewTarget::Preset("mars".to_string()).locks());
        assert!(!ViewTarget::Preset(OVERVIEW.to_string()).locks());
        assert!(!ViewTarget::Default.locks());
    }

    #[test]
    fn test_halfway_pose() {
        let transition = sun_transition();
        let pose = transition.sample(1000.0);
        assert!((pose.eye - Vec3::new(0.0, 14.0, 30.0)).length() < 1e-4);
    }

    #[test]
    fn test_progress_and_remaining() {
        let transition = sun_transition();
        assert_eq!(transition.progress(500.0), 0.25);
        assert_eq!(transition.remaining_ms(500.0), 1500.0);
        assert_eq!(transition.remaining_ms(2500.0), 0.0);
    }

    #[test]
    fn test_apply_reports_completion() {
        let transition = sun_transition();
        let mut camera = Camera::default();

        assert!(!transition.apply(&mut camera, 1999.0));
        assert!(transition.apply(&mut camera, 2000.0));
        assert_eq!(camera.position(), Vec3::new(0.0, 8.0, 15.0));
        assert_eq!(camera.look_target(), Vec3::ZERO);
    }
}
