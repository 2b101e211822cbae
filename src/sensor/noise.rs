//! Seedable noise source for sensor and odometry simulation.
//!
//! Noise is uniform, not Gaussian: the noise-percent tuning knob is
//! calibrated against a uniform error band.

use rand::prelude::*;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Uniform};

/// Noise generator with configurable seed for reproducibility
#[derive(Clone, Debug)]
pub struct NoiseGenerator {
    rng: SmallRng,
}

impl NoiseGenerator {
    /// Create a new noise generator
    ///
    /// If seed is 0, uses random entropy for non-deterministic behavior.
    /// Otherwise, uses the provided seed for reproducible results.
    pub fn new(seed: u64) -> Self {
        let rng = if seed == 0 {
            SmallRng::from_entropy()
        } else {
            SmallRng::seed_from_u64(seed)
        };
        Self { rng }
    }

    /// Uniform random in [0, 1)
    #[inline]
    pub fn uniform(&mut self) -> f32 {
        Uniform::new(0.0f32, 1.0).sample(&mut self.rng)
    }

    /// Uniform random in [-scale, scale)
    #[inline]
    pub fn symmetric(&mut self, scale: f32) -> f32 {
        if scale == 0.0 {
            return 0.0;
        }
        (self.uniform() * 2.0 - 1.0) * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_seed() {
        let mut noise1 = NoiseGenerator::new(42);
        let mut noise2 = NoiseGenerator::new(42);

        for _ in 0..100 {
            assert_eq!(noise1.symmetric(3.0), noise2.symmetric(3.0));
        }
    }

    #[test]
    fn test_zero_scale() {
        let mut noise = NoiseGenerator::new(42);
        for _ in 0..10 {
            assert_eq!(noise.symmetric(0.0), 0.0);
        }
    }

    #[test]
    fn test_symmetric_bounds() {
        let mut noise = NoiseGenerator::new(7);
        let mut saw_negative = false;
        let mut saw_positive = false;
        for _ in 0..1000 {
            let v = noise.symmetric(2.5);
            assert!((-2.5..2.5).contains(&v));
            saw_negative |= v < 0.0;
            saw_positive |= v > 0.0;
        }
        assert!(saw_negative && saw_positive);
    }
}
