//! Pointer-driven drift and wheel zoom for the unlocked free camera.

use glam::{Vec2, Vec3};

use super::view::Camera;
use crate::settings::CameraSettings;

/// Pointer offset units per screen pixel.
pub const POINTER_SCALE: f32 = 0.008;

/// Pointer state for free-look.
///
/// The camera only drifts after the pointer has moved since the last mode
/// change, so a camera left behind by an orbit or transition stays put.
#[derive(Debug, Clone, Default)]
pub struct FreeLook {
    /// Last pointer offset from the viewport center, in pixels scaled by
    /// [`POINTER_SCALE`]. +y points down the screen.
    pointer: Option<Vec2>,
}

impl FreeLook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer offset for a cursor at `pixel` in a viewport of `size` pixels.
    pub fn offset_from_pixels(pixel: Vec2, size: Vec2) -> Vec2 {
        (pixel - size * 0.5) * POINTER_SCALE
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn pointer_moved(&mut self, offset: Vec2) {
        self.pointer = Some(offset);
    }

    /// Forget the pointer until it moves again.
    pub fn clear(&mut self) {
        self.pointer = None;
    }

    /// Point the camera drifts toward for the current pointer, if any.
    pub fn goal(&self, camera: &Camera) -> Option<Vec3> {
        self.pointer.map(|p| {
            Vec3::new(
                p.x * 10.0,
                -p.y * 10.0 + 20.0,
                camera.position().z,
            )
        })
    }

    /// Ease the camera toward the pointer goal and face the origin.
    ///
    /// Uses exponential smoothing so the response does not depend on frame
    /// rate. Returns whether the camera was written.
    pub fn apply(&self, camera: &mut Camera, dt: f32, settings: &CameraSettings) -> bool {
        let Some(goal) = self.goal(camera) else {
            return false;
        };
        let t = 1.0 - (-dt / settings.follow_smoothness.max(0.001)).exp();
        let position = camera.position().lerp(goal, t);
        camera.set_position(position);
        camera.look_at(Vec3::ZERO);
        true
    }
}

/// Move the camera along its position vector by `steps` wheel notches.
///
/// Positive `steps` zoom in. Each notch covers `zoom_step` of the current
/// distance from the origin. A zoom that would leave the configured distance
/// range is dropped. Returns whether the camera moved.
pub fn zoom(camera: &mut Camera, steps: f32, settings: &CameraSettings) -> bool {
    let position = camera.position();
    let distance = position.length();
    let factor = 1.0 - settings.zoom_step * steps;
    if distance <= f32::EPSILON || steps == 0.0 || factor <= 0.0 {
        return false;
    }
    let target = distance * factor;
    if !(settings.min_distance..=settings.max_distance).contains(&target) {
        return false;
    }
    camera.set_position(position * factor);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pointer_no_write() {
        let free_look = FreeLook::new();
        let mut camera = Camera::new(Vec3::new(3.0, 4.0, 5.0), Vec3::new(3.0, 0.0, 0.0));
        let before = camera.clone();
        assert!(!free_look.apply(&mut camera, 0.016, &CameraSettings::default()));
        assert_eq!(camera, before);
    }

    #[test]
    fn test_offset_from_pixels() {
        let offset =
            FreeLook::offset_from_pixels(Vec2::new(1060.0, 440.0), Vec2::new(1920.0, 1080.0));
        assert!((offset - Vec2::new(0.8, -0.8)).length() < 1e-5);
    }

    #[test]
    fn test_drift_is_about_five_percent_per_frame() {
        let mut free_look = FreeLook::new();
        free_look.pointer_moved(Vec2::new(1.0, 0.0));
        let mut camera = Camera::default();

        free_look.apply(&mut camera, 1.0 / 60.0, &CameraSettings::default());

        // Goal x is 10, starting from 0
        let x = camera.position().x;
        assert!((x - 0.5).abs() < 0.01, "x = {x}");
        assert_eq!(camera.position().z, 45.0);
        assert_eq!(camera.look_target(), Vec3::ZERO);
    }

    #[test]
    fn test_clear_stops_drift() {
        let mut free_look = FreeLook::new();
        free_look.pointer_moved(Vec2::new(0.5, -0.5));
        free_look.clear();
        assert!(free_look.pointer().is_none());
    }

    #[test]
    fn test_zoom_steps() {
        let settings = CameraSettings::default();
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);

        assert!(zoom(&mut camera, 1.0, &settings));
        assert!((camera.distance_from_origin() - 90.0).abs() < 1e-3);

        assert!(zoom(&mut camera, -1.0, &settings));
        assert!((camera.distance_from_origin() - 99.0).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_out_of_range_is_dropped() {
        let settings = CameraSettings::default();

        let mut near = Camera::new(Vec3::new(0.0, 0.0, 5.2), Vec3::ZERO);
        assert!(!zoom(&mut near, 1.0, &settings));
        assert_eq!(near.position(), Vec3::new(0.0, 0.0, 5.2));

        let mut far = Camera::new(Vec3::new(0.0, 190.0, 0.0), Vec3::ZERO);
        assert!(!zoom(&mut far, -1.0, &settings));
        assert_eq!(far.position(), Vec3::new(0.0, 190.0, 0.0));
    }

    #[test]
    fn test_zoom_at_origin_is_ignored() {
        let mut camera = Camera::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(!zoom(&mut camera, 1.0, &CameraSettings::default()));
        assert_eq!(camera.position(), Vec3::ZERO);
    }
}
