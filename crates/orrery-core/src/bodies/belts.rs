//! Bulk-generated bodies: belts and comets.
//!
//! Each member gets a random starting angle and radius and then moves exactly
//! like any other body.

use std::f32::consts::TAU;

use super::body::{Body, BodyKind};
use super::motion::{Elevation, OrbitalMotion};
use super::rng::SceneRng;
use crate::appearance::Rgb;

/// Parameters for an annulus of small bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltSpec {
    pub key_prefix: &'static str,
    pub kind: BodyKind,
    pub count: usize,
    pub inner_radius: f32,
    pub outer_radius: f32,
    /// Members are scattered up to this far above and below the plane
    pub half_height: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Orbital speed range in rad/s
    pub min_speed: f32,
    pub max_speed: f32,
    /// Self-rotation range is `[-max_spin, max_spin)` rad/s
    pub max_spin: f32,
    pub hue: f32,
    pub saturation: f32,
    pub min_lightness: f32,
    pub max_lightness: f32,
}

/// Between Mars and Jupiter.
pub const ASTEROID_BELT: BeltSpec = BeltSpec {
    key_prefix: "asteroid",
    kind: BodyKind::Asteroid,
    count: 800,
    inner_radius: 13.0,
    outer_radius: 18.0,
    half_height: 1.0,
    min_size: 0.02,
    max_size: 0.1,
    min_speed: 0.024,
    max_speed: 0.036,
    max_spin: 0.6,
    hue: 0.1,
    saturation: 0.3,
    min_lightness: 0.3,
    max_lightness: 0.6,
};

/// Beyond Neptune.
pub const KUIPER_BELT: BeltSpec = BeltSpec {
    key_prefix: "kuiper",
    kind: BodyKind::KuiperObject,
    count: 200,
    inner_radius: 30.0,
    outer_radius: 50.0,
    half_height: 2.5,
    min_size: 0.03,
    max_size: 0.08,
    min_speed: 0.005,
    max_speed: 0.015,
    max_spin: 0.0,
    hue: 0.15,
    saturation: 0.2,
    min_lightness: 0.2,
    max_lightness: 0.4,
};

impl BeltSpec {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Generate the belt members.
    pub fn populate<R: SceneRng + ?Sized>(&self, rng: &mut R) -> Vec<Body> {
        let name = self.kind.label();
        (0..self.count)
            .map(|i| {
                let phase = rng.gen_between(0.0, TAU);
                let radius = rng.gen_between(self.inner_radius, self.outer_radius);
                let height = rng.gen_centered(self.half_height);
                let size = rng.gen_between(self.min_size, self.max_size);
                let speed = rng.gen_between(self.min_speed, self.max_speed);
                let spin = rng.gen_centered(self.max_spin);
                let lightness = rng.gen_between(self.min_lightness, self.max_lightness);

                Body::new(
                    format!("{}_{i}", self.key_prefix),
                    format!("{name} {}", i + 1),
                    self.kind,
                    size,
                )
                .with_motion(
                    OrbitalMotion::circular(radius, speed)
                        .with_phase(phase)
                        .with_elevation(Elevation::Flat(height)),
                )
                .with_rotation(spin)
                .with_colour(Rgb::from_hsl(self.hue, self.saturation, lightness))
            })
            .collect()
    }
}

/// Comets on wide, bobbing orbits.
pub fn comets<R: SceneRng + ?Sized>(count: usize, rng: &mut R) -> Vec<Body> {
    (0..count)
        .map(|i| {
            let radius = rng.gen_between(25.0, 45.0);
            let phase = rng.gen_between(0.0, TAU);
            let inclination = rng.gen_centered(0.25);
            let speed = rng.gen_between(0.6, 1.8);

            Body::new(
                format!("comet_{i}"),
                format!("Comet {}", i + 1),
                BodyKind::Comet,
                0.1,
            )
            .with_motion(
                OrbitalMotion::circular(radius, speed)
                    .with_phase(phase)
                    .with_elevation(Elevation::Inclined { inclination }),
            )
            .with_colour(Rgb::from_hex(0x444444))
            .with_description("Icy wanderer with a tail that always points away from the Sun")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    use super::*;

    #[test]
    fn test_asteroids_stay_in_annulus() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let belt = ASTEROID_BELT.populate(&mut rng);
        assert_eq!(belt.len(), 800);

        for body in &belt {
            let motion = body.motion;
            assert!((13.0..=18.0).contains(&motion.radius));
            assert!((0.024..=0.036).contains(&motion.angular_speed));
            assert!((0.02..=0.1).contains(&body.size));
            let Elevation::Flat(h) = motion.elevation else {
                panic!("belt members orbit flat");
            };
            assert!(h.abs() <= 1.0);
            assert!(body.parent.is_none());
        }
    }

    #[test]
    fn test_kuiper_count_override() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let belt = KUIPER_BELT.with_count(12).populate(&mut rng);
        assert_eq!(belt.len(), 12);
        assert!(belt.iter().all(|b| b.kind == BodyKind::KuiperObject));
        assert!(belt.iter().all(|b| b.rotation_speed == 0.0));
        assert_eq!(belt[3].key, "kuiper_3");
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = ASTEROID_BELT.populate(&mut Xoshiro256StarStar::seed_from_u64(99));
        let b = ASTEROID_BELT.populate(&mut Xoshiro256StarStar::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_comets() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(3);
        let comets = comets(3, &mut rng);
        assert_eq!(comets.len(), 3);
        for comet in &comets {
            assert!((25.0..=45.0).contains(&comet.motion.radius));
            assert!(matches!(
                comet.motion.elevation,
                Elevation::Inclined { inclination } if inclination.abs() <= 0.25
            ));
        }
    }
}
