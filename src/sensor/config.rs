//! Range sensor configuration.

use serde::{Deserialize, Serialize};

/// Upper bound for the live-tunable ray count.
pub const MAX_RAY_COUNT: usize = 3600;

/// Range sensor configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SensorConfig {
    /// Rays per full revolution
    #[serde(default = "default_ray_count")]
    pub ray_count: usize,

    /// Maximum range in world units
    #[serde(default = "default_max_range")]
    pub max_range: f32,

    /// Radial noise band as a percentage of `max_range` (0 disables noise)
    #[serde(default = "default_noise_percent")]
    pub noise_percent: f32,

    /// Noise seed (0 = entropy)
    #[serde(default)]
    pub seed: u64,
}

fn default_ray_count() -> usize {
    120
}
fn default_max_range() -> f32 {
    400.0
}
fn default_noise_percent() -> f32 {
    1.0
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            ray_count: default_ray_count(),
            max_range: default_max_range(),
            noise_percent: default_noise_percent(),
            seed: 0,
        }
    }
}

impl SensorConfig {
    /// Noise-free configuration, handy for deterministic scenarios
    pub fn noiseless(ray_count: usize, max_range: f32) -> Self {
        Self {
            ray_count,
            max_range,
            noise_percent: 0.0,
            seed: 0,
        }
    }

    /// Absolute noise band in world units
    #[inline]
    pub fn noise_scale(&self) -> f32 {
        self.noise_percent / 100.0 * self.max_range
    }
}
