//! The body table and its per-tick transforms.

use std::f32::consts::TAU;

use ahash::AHashMap;
use glam::{Affine3A, Vec3};

use super::body::{Body, BodyId, BodyTransform};
use super::motion::spin_angle;
use crate::error::CatalogError;

/// Segments used for orbit path polylines.
pub const ORBIT_PATH_SEGMENTS: usize = 64;

/// Every body in the scene plus where each one is at the current
/// simulated time.
#[derive(Debug, Clone)]
pub struct SolarSystem {
    bodies: Vec<Body>,
    transforms: Vec<BodyTransform>,
    by_key: AHashMap<String, BodyId>,
    sim_time: f64,
}

impl SolarSystem {
    /// Bodies must be listed after their parents.
    pub fn new(bodies: Vec<Body>) -> Result<Self, CatalogError> {
        let mut by_key = AHashMap::with_capacity(bodies.len());
        for (i, body) in bodies.iter().enumerate() {
            if body.parent.is_some_and(|p| p.index() >= i) {
                return Err(CatalogError::ParentOrder(body.key.clone()));
            }
            if by_key.insert(body.key.clone(), BodyId(i as u32)).is_some() {
                return Err(CatalogError::Duplicate {
                    name: "bodies",
                    key: body.key.clone(),
                });
            }
        }

        let mut system = Self {
            transforms: vec![BodyTransform::default(); bodies.len()],
            bodies,
            by_key,
            sim_time: 0.0,
        };
        system.update(0.0);
        Ok(system)
    }

    /// Recompute every transform for simulated time `t` (seconds).
    ///
    /// Parents are visited before children, so a child composes with a
    /// frame that is already current.
    pub fn update(&mut self, t: f64) {
        self.sim_time = t;
        for (i, body) in self.bodies.iter().enumerate() {
            let parent_frame = body
                .parent
                .map_or(Affine3A::IDENTITY, |p| self.transforms[p.index()].frame);
            let frame = parent_frame * body.motion.local_frame(t);
            self.transforms[i] = BodyTransform {
                frame,
                position: frame.transform_point3(Vec3::ZERO),
                orbit_angle: body.motion.angle(t),
                spin: spin_angle(body.rotation_speed, t),
            };
        }
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn find(&self, key: &str) -> Option<BodyId> {
        self.by_key.get(key).copied()
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn transform(&self, id: BodyId) -> Option<&BodyTransform> {
        self.transforms.get(id.index())
    }

    pub fn position(&self, id: BodyId) -> Option<Vec3> {
        self.transform(id).map(|t| t.position)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &Body, &BodyTransform)> {
        self.bodies
            .iter()
            .zip(&self.transforms)
            .enumerate()
            .map(|(i, (body, transform))| (BodyId(i as u32), body, transform))
    }

    /// Closed polyline along the body's orbit in world space, with
    /// `segments + 1` points (the last repeats the first).
    pub fn orbit_path(&self, id: BodyId, segments: usize) -> Option<Vec<Vec3>> {
        let body = self.body(id)?;
        if body.motion.radius <= 0.0 || segments == 0 {
            return None;
        }
        let parent_frame = body
            .parent
            .and_then(|p| self.transform(p))
            .map_or(Affine3A::IDENTITY, |t| t.frame);
        let radius = body.motion.radius;

        let points = (0..=segments)
            .map(|i| {
                let angle = i as f32 / segments as f32 * TAU;
                let (sin, cos) = angle.sin_cos();
                parent_frame.transform_point3(Vec3::new(cos * radius, 0.0, sin * radius))
            })
            .collect();
        Some(points)
    }

    /// Unit vector pointing from the Sun through the body, the direction a
    /// comet tail streams.
    pub fn tail_direction(&self, id: BodyId) -> Option<Vec3> {
        self.position(id).map(Vec3::normalize_or_zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::body::BodyKind;
    use crate::bodies::motion::OrbitalMotion;

    fn earth_moon() -> SolarSystem {
        let sun = Body::new("sun", "Sun", BodyKind::Star, 2.5).with_rotation(0.5);
        let earth = Body::new("earth", "Earth", BodyKind::Planet, 0.7)
            .with_motion(OrbitalMotion::circular(9.0, 1.0))
            .with_rotation(10.0);
        let moon = Body::new("moon", "Moon", BodyKind::Moon, 0.5)
            .with_motion(OrbitalMotion::circular(2.0, 8.0))
            .with_rotation(8.0)
            .with_parent(BodyId(1));
        SolarSystem::new(vec![sun, earth, moon]).unwrap()
    }

    #[test]
    fn test_moon_stays_near_earth() {
        let mut system = earth_moon();
        let earth = system.find("earth").unwrap();
        let moon = system.find("moon").unwrap();

        for i in 0..200 {
            system.update(i as f64 * 0.13);
            let d = system.position(moon).unwrap() - system.position(earth).unwrap();
            assert!((d.length() - 2.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_moon_angle_composes_with_parent() {
        let mut system = earth_moon();
        let earth = system.find("earth").unwrap();
        let moon = system.find("moon").unwrap();

        // Earth at a quarter turn, moon at zero local angle
        let t = std::f64::consts::FRAC_PI_2;
        system.update(t);
        let earth_pos = system.position(earth).unwrap();
        assert!((earth_pos - Vec3::new(0.0, 0.0, 9.0)).length() < 1e-4);

        // Moon local angle 8 * π/2 = 4π, a whole number of turns, so it sits
        // one moon-radius further out along the Earth's direction
        let moon_pos = system.position(moon).unwrap();
        assert!((moon_pos - Vec3::new(0.0, 0.0, 11.0)).length() < 1e-3);
    }

    #[test]
    fn test_parent_must_come_first() {
        let moon = Body::new("moon", "Moon", BodyKind::Moon, 0.5).with_parent(BodyId(1));
        let earth = Body::new("earth", "Earth", BodyKind::Planet, 0.7);
        assert!(matches!(
            SolarSystem::new(vec![moon, earth]),
            Err(CatalogError::ParentOrder(key)) if key == "moon"
        ));
    }

    #[test]
    fn test_duplicate_keys_rejected() {
        let a = Body::new("sun", "Sun", BodyKind::Star, 2.5);
        let b = a.clone();
        assert!(matches!(
            SolarSystem::new(vec![a, b]),
            Err(CatalogError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_orbit_path_is_closed_circle() {
        let system = earth_moon();
        let earth = system.find("earth").unwrap();
        let path = system.orbit_path(earth, ORBIT_PATH_SEGMENTS).unwrap();
        assert_eq!(path.len(), ORBIT_PATH_SEGMENTS + 1);
        assert!((path[0] - path[ORBIT_PATH_SEGMENTS]).length() < 1e-4);
        assert!(path.iter().all(|p| (p.length() - 9.0).abs() < 1e-4));

        let sun = system.find("sun").unwrap();
        assert!(system.orbit_path(sun, ORBIT_PATH_SEGMENTS).is_none());
    }

    #[test]
    fn test_tail_points_away_from_sun() {
        let mut system = earth_moon();
        system.update(1.0);
        let earth = system.find("earth").unwrap();
        let tail = system.tail_direction(earth).unwrap();
        let pos = system.position(earth).unwrap();
        assert!(tail.dot(pos) > 0.0);
        assert!((tail.length() - 1.0).abs() < 1e-5);
    }
}
