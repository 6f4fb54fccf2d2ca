//! Background stars.
//!
//! A fixed cloud of point stars around the origin, plus an optional sky
//! backdrop tinted from the star map texture. The points are always drawn;
//! the backdrop only once its texture has loaded.

use glam::Vec3;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use crate::appearance::{Appearance, Rgb};
use crate::bodies::SceneRng;
use crate::settings::SceneSettings;

pub const STARFIELD_TEXTURE: &str = "textures/stars.jpg";
pub const STAR_COUNT: usize = 1000;
/// Stars fill a cube of this half-extent around the origin.
pub const STARFIELD_HALF_EXTENT: f32 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Vec3>,
    backdrop: Appearance,
}

impl Starfield {
    /// Scatter `count` stars uniformly through the starfield cube.
    pub fn generate<R: SceneRng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let stars = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_centered(STARFIELD_HALF_EXTENT),
                    rng.gen_centered(STARFIELD_HALF_EXTENT),
                    rng.gen_centered(STARFIELD_HALF_EXTENT),
                )
            })
            .collect();
        Self {
            stars,
            backdrop: Appearance::Pending {
                fallback: Rgb([0, 0, 0]),
            },
        }
    }

    /// Stars for the scene seed. Draws from a jumped stream so the belts
    /// keep their layout when the star count changes.
    pub fn from_settings(settings: &SceneSettings) -> Self {
        let mut rng = Xoshiro256StarStar::seed_from_u64(settings.seed);
        rng.jump();
        Self::generate(settings.star_count, &mut rng)
    }

    pub fn stars(&self) -> &[Vec3] {
        &self.stars
    }

    pub fn backdrop(&self) -> Appearance {
        self.backdrop
    }

    /// Sky colour to fill behind the stars, once the texture has loaded.
    pub fn sky_tint(&self) -> Option<Rgb> {
        match self.backdrop {
            Appearance::Textured { tint } => Some(tint),
            _ => None,
        }
    }

    /// Texture still to load, if any.
    pub fn pending_texture(&self) -> Option<&'static str> {
        self.backdrop.is_pending().then_some(STARFIELD_TEXTURE)
    }

    pub fn resolve<E: std::fmt::Display>(&mut self, outcome: Result<Rgb, E>) -> Result<(), E> {
        self.backdrop.resolve(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(seed: u64, star_count: usize) -> SceneSettings {
        SceneSettings {
            seed,
            star_count,
            ..SceneSettings::default()
        }
    }

    #[test]
    fn test_default_count_and_bounds() {
        let starfield = Starfield::from_settings(&SceneSettings::default());
        assert_eq!(starfield.stars().len(), STAR_COUNT);
        for star in starfield.stars() {
            assert!(star.abs().max_element() <= STARFIELD_HALF_EXTENT);
        }
    }

    #[test]
    fn test_same_seed_same_sky() {
        let a = Starfield::from_settings(&settings(9, 50));
        let b = Starfield::from_settings(&settings(9, 50));
        let c = Starfield::from_settings(&settings(10, 50));
        assert_eq!(a.stars(), b.stars());
        assert_ne!(a.stars(), c.stars());
    }

    #[test]
    fn test_backdrop_lifecycle() {
        let mut starfield = Starfield::from_settings(&settings(1, 10));
        assert_eq!(starfield.pending_texture(), Some(STARFIELD_TEXTURE));
        assert_eq!(starfield.sky_tint(), None);

        starfield.resolve::<String>(Ok(Rgb([5, 6, 20]))).unwrap();
        assert_eq!(starfield.pending_texture(), None);
        assert_eq!(starfield.sky_tint(), Some(Rgb([5, 6, 20])));
    }

    #[test]
    fn test_failed_backdrop_keeps_points_only() {
        let mut starfield = Starfield::from_settings(&settings(1, 10));
        assert!(starfield.resolve(Err("missing")).is_err());
        assert_eq!(starfield.pending_texture(), None);
        assert_eq!(starfield.sky_tint(), None);
        assert_eq!(starfield.stars().len(), 10);
    }
}
