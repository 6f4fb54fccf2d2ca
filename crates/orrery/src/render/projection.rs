//! World to screen projection for the 2D scene painter

use egui::{Pos2, Rect};
use glam::{Mat4, Vec3};
use orrery_core::Camera;

/// A point on screen plus its distance in front of the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    /// View-space depth along the camera's forward axis
    pub depth: f32,
}

/// Projects world points through the camera into a viewport rectangle
/// given in egui points.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    view_projection: Mat4,
    eye: Vec3,
    forward: Vec3,
    near: f32,
    viewport: Rect,
    /// Screen points per world unit at depth 1
    focal: f32,
}

impl Projector {
    pub fn new(camera: &Camera, viewport: Rect) -> Self {
        let aspect = viewport.width() / viewport.height().max(1.0);
        Self {
            view_projection: camera.view_projection(aspect),
            eye: camera.position(),
            forward: camera.world_direction(),
            near: camera.near,
            viewport,
            focal: viewport.height() * 0.5 / (camera.fov_y * 0.5).tan(),
        }
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// `None` for points behind the near plane.
    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let depth = (point - self.eye).dot(self.forward);
        if depth <= self.near {
            return None;
        }

        let ndc = self.view_projection.project_point3(point);
        let pos = Pos2::new(
            self.viewport.left() + (ndc.x + 1.0) * 0.5 * self.viewport.width(),
            self.viewport.top() + (1.0 - ndc.y) * 0.5 * self.viewport.height(),
        );
        Some(Projected { pos, depth })
    }

    /// On-screen radius of a sphere of `radius` world units at `depth`.
    pub fn screen_radius(&self, radius: f32, depth: f32) -> f32 {
        radius * self.focal / depth.max(self.near)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(1280.0, 720.0))
    }

    #[test]
    fn test_look_at_point_lands_in_center() {
        let camera = Camera::new(Vec3::new(0.0, 20.0, 45.0), Vec3::ZERO);
        let projector = Projector::new(&camera, viewport());
        let projected = projector.project(Vec3::ZERO).unwrap();

        assert!((projected.pos - viewport().center()).length() < 1e-2);
        assert!((projected.depth - Vec3::new(0.0, 20.0, 45.0).length()).abs() < 1e-3);
    }

    #[test]
    fn test_points_behind_are_culled() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let projector = Projector::new(&camera, viewport());
        assert_eq!(projector.project(Vec3::new(0.0, 0.0, 20.0)), None);
    }

    #[test]
    fn test_right_and_up_map_to_screen_axes() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let projector = Projector::new(&camera, viewport());
        let center = viewport().center();

        let right = projector.project(Vec3::X).unwrap();
        assert!(right.pos.x > center.x);
        let up = projector.project(Vec3::Y).unwrap();
        assert!(up.pos.y < center.y);
    }

    #[test]
    fn test_screen_radius_matches_projection() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let projector = Projector::new(&camera, viewport());
        let center = projector.project(Vec3::ZERO).unwrap();
        let edge = projector.project(Vec3::new(0.0, 1.0, 0.0)).unwrap();

        let radius = projector.screen_radius(1.0, center.depth);
        assert!((radius - (center.pos.y - edge.pos.y)).abs() < 0.5);
        // Twice as far, half the size
        assert!((projector.screen_radius(1.0, 20.0) * 2.0 - radius).abs() < 1e-3);
    }
}
