//! Continuous camera orbit around a preset's look-at point.

use std::f64::consts::TAU;

use glam::Vec3;

use super::view::Camera;

/// Height of the orbiting camera above its center.
pub const ORBIT_HEIGHT: f32 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    preset_id: String,
    center: Vec3,
    radius: f32,
    /// Radians per second
    angular_speed: f32,
    /// Current angle, kept in `[0, 2π)`
    angle: f64,
}

impl OrbitState {
    pub fn new(preset_id: impl Into<String>, center: Vec3, radius: f32, angular_speed: f32) -> Self {
        Self {
            preset_id: preset_id.into(),
            center,
            radius,
            angular_speed,
            angle: 0.0,
        }
    }

    pub fn preset_id(&self) -> &str {
        &self.preset_id
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Step the angle by `angular_speed * dt`, wrapped to one turn.
    pub fn advance(&mut self, dt: f32) {
        self.angle = (self.angle + self.angular_speed as f64 * dt as f64).rem_euclid(TAU);
    }

    /// Camera position for the current angle.
    pub fn eye(&self) -> Vec3 {
        let (sin, cos) = (self.angle as f32).sin_cos();
        self.center + Vec3::new(cos * self.radius, ORBIT_HEIGHT, sin * self.radius)
    }

    pub fn apply(&self, camera: &mut Camera) {
        camera.set_position(self.eye());
        camera.look_at(self.center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_on_circle() {
        let mut orbit = OrbitState::new("earth", Vec3::new(9.0, 0.0, 0.0), 10.0, 0.5);
        for _ in 0..100 {
            orbit.advance(0.1);
            let offset = orbit.eye() - orbit.center();
            assert!((offset.y - ORBIT_HEIGHT).abs() < 1e-5);
            let flat = Vec3::new(offset.x, 0.0, offset.z).length();
            assert!((flat - 10.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_angle_stays_wrapped() {
        let mut orbit = OrbitState::new("earth", Vec3::ZERO, 10.0, 3.0);
        for _ in 0..1_000_000 {
            orbit.advance(0.016);
        }
        assert!((0.0..TAU).contains(&orbit.angle()));
    }

    #[test]
    fn test_negative_speed_wraps() {
        let mut orbit = OrbitState::new("earth", Vec3::ZERO, 10.0, -1.0);
        orbit.advance(0.5);
        assert!((orbit.angle() - (TAU - 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_apply_faces_center() {
        let mut orbit = OrbitState::new("mars", Vec3::new(12.0, 0.0, 0.0), 10.0, 0.5);
        orbit.advance(1.0);
        let mut camera = Camera::default();
        orbit.apply(&mut camera);
        assert_eq!(camera.look_target(), Vec3::new(12.0, 0.0, 0.0));
        let to_center = (orbit.center() - camera.position()).normalize();
        assert!((camera.world_direction() - to_center).length() < 1e-5);
    }
}
