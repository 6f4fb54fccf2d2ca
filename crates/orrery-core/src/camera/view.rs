//! Perspective camera with an explicit view direction.

use glam::{Mat4, Vec3};

/// Eye position and look-at point pair.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewPoint {
    pub eye: Vec3,
    pub look_at: Vec3,
}

/// A retained-scene style camera: it stores where it is and which way it
/// faces. The point it was last aimed at is kept alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    /// Unit view direction
    forward: Vec3,
    /// Point passed to the last `look_at`
    look_target: Vec3,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 20.0, 45.0), Vec3::ZERO)
    }
}

impl Camera {
    pub fn new(position: Vec3, look_at: Vec3) -> Self {
        let mut camera = Self {
            position,
            forward: Vec3::NEG_Z,
            look_target: look_at,
            fov_y: 75f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        };
        camera.look_at(look_at);
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Turn the camera toward `target`.
    ///
    /// Aiming at the camera's own position keeps the previous direction.
    pub fn look_at(&mut self, target: Vec3) {
        let direction = target - self.position;
        if direction.length_squared() > f32::EPSILON {
            self.forward = direction.normalize();
        }
        self.look_target = target;
    }

    /// Unit vector the camera is facing.
    pub fn world_direction(&self) -> Vec3 {
        self.forward
    }

    pub fn look_target(&self) -> Vec3 {
        self.look_target
    }

    /// Distance of the eye from the world origin.
    pub fn distance_from_origin(&self) -> f32 {
        self.position.length()
    }

    /// Guess at the current look-at point: the view direction projected
    /// outward by the camera's distance from the origin.
    ///
    /// Collapses onto the eye when the camera sits at the origin.
    pub fn approximate_look_at(&self) -> Vec3 {
        self.position + self.forward * self.distance_from_origin()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(f32::EPSILON), self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
