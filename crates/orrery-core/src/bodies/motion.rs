//! Closed-form circular orbits.
//!
//! Everything here is a pure function of absolute simulated time, so there
//! is no accumulated state to drift.

use std::f64::consts::TAU;

use glam::{Affine3A, Vec3};

/// Vertical placement of an orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Elevation {
    /// Constant height above the orbital plane
    Flat(f32),
    /// Comet-style bobbing: `sin(inclination + angle * 0.1) * radius * 0.3`,
    /// using the unwrapped angle.
    Inclined { inclination: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalMotion {
    pub radius: f32,
    /// Radians per simulated second
    pub angular_speed: f32,
    /// Angle at `t = 0`
    pub phase: f32,
    pub elevation: Elevation,
}

impl OrbitalMotion {
    /// A body that stays at its parent's origin.
    pub const STATIONARY: OrbitalMotion = OrbitalMotion {
        radius: 0.0,
        angular_speed: 0.0,
        phase: 0.0,
        elevation: Elevation::Flat(0.0),
    };

    pub fn circular(radius: f32, angular_speed: f32) -> Self {
        Self {
            radius,
            angular_speed,
            phase: 0.0,
            elevation: Elevation::Flat(0.0),
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_elevation(mut self, elevation: Elevation) -> Self {
        self.elevation = elevation;
        self
    }

    fn unwrapped_angle(&self, t: f64) -> f64 {
        self.phase as f64 + t * self.angular_speed as f64
    }

    /// Orbital angle at simulated time `t`, in `[0, 2π)`.
    pub fn angle(&self, t: f64) -> f32 {
        self.unwrapped_angle(t).rem_euclid(TAU) as f32
    }

    pub fn height(&self, t: f64) -> f32 {
        match self.elevation {
            Elevation::Flat(h) => h,
            Elevation::Inclined { inclination } => {
                let angle = self.unwrapped_angle(t);
                ((inclination as f64 + angle * 0.1).sin() * self.radius as f64 * 0.3) as f32
            }
        }
    }

    /// Position relative to the parent frame.
    pub fn local_position(&self, t: f64) -> Vec3 {
        let (sin, cos) = self.angle(t).sin_cos();
        Vec3::new(cos * self.radius, self.height(t), sin * self.radius)
    }

    /// Orbit frame relative to the parent: turn by the orbital angle about
    /// +Y, then step out along x.
    ///
    /// The rotation is negated so the frame origin lands on
    /// `(cos a * r, h, sin a * r)` in the parent's right-handed axes.
    pub fn local_frame(&self, t: f64) -> Affine3A {
        Affine3A::from_rotation_y(-self.angle(t))
            * Affine3A::from_translation(Vec3::new(self.radius, self.height(t), 0.0))
    }

    /// Time for one full revolution, if the body moves at all.
    pub fn period(&self) -> Option<f64> {
        (self.angular_speed != 0.0).then(|| TAU / (self.angular_speed as f64).abs())
    }
}

/// Self-rotation angle at simulated time `t`, in `[0, 2π)`.
pub fn spin_angle(rotation_speed: f32, t: f64) -> f32 {
    (rotation_speed as f64 * t).rem_euclid(TAU) as f32
}
