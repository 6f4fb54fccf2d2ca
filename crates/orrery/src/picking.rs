//! Ray casting from the cursor into the scene

use glam::{Vec2, Vec3};
use orrery_core::{BodyId, BodyKind, Camera, SolarSystem};

/// Which bodies a pick considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// Hover tooltips: the Sun, planets and the Moon
    Hover,
    /// Clicks: everything except the distant Kuiper belt
    Select,
}

impl PickTarget {
    fn accepts(self, kind: BodyKind) -> bool {
        match self {
            PickTarget::Hover => matches!(kind, BodyKind::Star | BodyKind::Planet | BodyKind::Moon),
            PickTarget::Select => kind != BodyKind::KuiperObject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    /// Ray through a cursor position given in physical pixels.
    pub fn from_screen(camera: &Camera, cursor: Vec2, viewport: Vec2) -> Option<Self> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let ndc = Vec2::new(
            cursor.x / viewport.x * 2.0 - 1.0,
            1.0 - cursor.y / viewport.y * 2.0, // Flip Y
        );

        let inverse = camera.view_projection(viewport.x / viewport.y).inverse();
        let near = inverse.project_point3(ndc.extend(0.0));
        let far = inverse.project_point3(ndc.extend(1.0));
        let direction = (far - near).try_normalize()?;

        Some(Self {
            origin: camera.position(),
            direction,
        })
    }

    /// Distance along the ray to the first hit on a sphere, if any.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_center = self.origin - center;
        let b = to_center.dot(self.direction);
        let c = to_center.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }

        let root = discriminant.sqrt();
        let near = -b - root;
        let far = -b + root;
        if near >= 0.0 {
            Some(near)
        } else if far >= 0.0 {
            // Origin inside the sphere
            Some(0.0)
        } else {
            None
        }
    }
}

/// Closest body hit by `ray`.
pub fn pick(system: &SolarSystem, ray: &Ray, target: PickTarget) -> Option<BodyId> {
    system
        .iter()
        .filter(|(_, body, _)| target.accepts(body.kind))
        .filter_map(|(id, body, transform)| {
            ray.intersect_sphere(transform.position, body.size)
                .map(|distance| (id, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
