//! RNG abstraction for scene generation
//!
//! Belt and comet placement only needs uniform floats, so anything that
//! implements `rand::Rng` works. The app seeds a `Xoshiro256StarStar` from
//! config so every run lays out the same scene.

/// Random number source used while populating the scene
pub trait SceneRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Uniform value in `[low, high)`
    fn gen_between(&mut self, low: f32, high: f32) -> f32 {
        low + self.gen_f32() * (high - low)
    }

    /// Uniform value in `[-half_extent, half_extent)`
    fn gen_centered(&mut self, half_extent: f32) -> f32 {
        (self.gen_f32() - 0.5) * 2.0 * half_extent
    }
}

impl<T: ?Sized + rand::Rng> SceneRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_gen_between_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);
        for _ in 0..1000 {
            let val = rng.gen_between(13.0, 18.0);
            assert!((13.0..=18.0).contains(&val));
        }
    }

    #[test]
    fn test_gen_centered_range() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(12345);
        let mut seen_negative = false;
        let mut seen_positive = false;
        for _ in 0..1000 {
            let val = rng.gen_centered(2.5);
            assert!((-2.5..=2.5).contains(&val));
            seen_negative |= val < 0.0;
            seen_positive |= val > 0.0;
        }
        assert!(seen_negative && seen_positive);
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut rng1 = Xoshiro256StarStar::seed_from_u64(42);
        let mut rng2 = Xoshiro256StarStar::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(rng1.gen_f32(), rng2.gen_f32());
        }
    }
}
