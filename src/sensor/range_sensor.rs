//! Rotating range sensor simulated by ray casting against wall segments.
//!
//! Each scan sweeps `ray_count` rays evenly around the robot, starting at
//! the robot heading:
//!
//! ```text
//! ray i angle = pose.theta + i * 2π / ray_count
//! ```
//!
//! Every ray is a segment of length `max_range` tested against every wall.
//! The closest crossing wins; ties keep the wall tested first. Rays that
//! cross nothing report a miss at exactly `max_range`.
//!
//! Noise is radial: the reported distance of a hit is perturbed and the
//! reported point is recomputed along the same ray angle. Misses are never
//! perturbed.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::{Pose2D, Wall, WorldPoint};

use super::config::{MAX_RAY_COUNT, SensorConfig};
use super::noise::NoiseGenerator;

/// Result of a single ray.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeHit {
    /// Reported end point in world coordinates
    pub point: WorldPoint,
    /// Reported distance from the sensor origin
    pub distance: f32,
    /// World angle of the ray (radians)
    pub angle: f32,
    /// Did the ray stop on a wall? `false` means a max-range return.
    pub hit: bool,
}

impl RangeHit {
    /// Max-range return along `angle`.
    pub fn miss(origin: WorldPoint, angle: f32, max_range: f32) -> Self {
        Self {
            point: origin.point_at(angle, max_range),
            distance: max_range,
            angle,
            hit: false,
        }
    }

    /// Obstacle return at `distance` along `angle`.
    pub fn hit(origin: WorldPoint, angle: f32, distance: f32) -> Self {
        Self {
            point: origin.point_at(angle, distance),
            distance,
            angle,
            hit: true,
        }
    }
}

/// Range sensor simulator
#[derive(Clone, Debug)]
pub struct RangeSensor {
    config: SensorConfig,
    noise: NoiseGenerator,
}

impl RangeSensor {
    /// Create a sensor seeded from `config.seed`
    pub fn new(config: SensorConfig) -> Self {
        let noise = NoiseGenerator::new(config.seed);
        Self::with_noise(config, noise)
    }

    /// Create a sensor with an explicit noise source
    pub fn with_noise(mut config: SensorConfig, noise: NoiseGenerator) -> Self {
        config.ray_count = config.ray_count.clamp(1, MAX_RAY_COUNT);
        config.noise_percent = config.noise_percent.clamp(0.0, 100.0);
        Self { config, noise }
    }

    /// Current configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Set the ray count for subsequent scans (clamped to [1, 3600]).
    pub fn set_ray_count(&mut self, ray_count: usize) {
        self.config.ray_count = ray_count.clamp(1, MAX_RAY_COUNT);
    }

    /// Set the noise percent for subsequent scans (clamped to [0, 100]).
    pub fn set_noise_percent(&mut self, noise_percent: f32) {
        self.config.noise_percent = noise_percent.clamp(0.0, 100.0);
    }

    /// Sweep all rays from `pose` against `walls`.
    ///
    /// Returns one [`RangeHit`] per ray in increasing ray index order.
    pub fn scan(&mut self, pose: Pose2D, walls: &[Wall]) -> Vec<RangeHit> {
        let origin = pose.position();
        let ray_count = self.config.ray_count;
        let angle_step = TAU / ray_count as f32;
        let noise_scale = self.config.noise_scale();

        let mut hits = Vec::with_capacity(ray_count);
        for i in 0..ray_count {
            let angle = pose.theta + i as f32 * angle_step;
            let mut reading = self.cast_ray(origin, angle, walls);

            if reading.hit && noise_scale > 0.0 {
                let distance = (reading.distance + self.noise.symmetric(noise_scale))
                    .clamp(0.0, self.config.max_range);
                reading = RangeHit::hit(origin, angle, distance);
            }

            hits.push(reading);
        }

        hits
    }

    /// Cast a single noise-free ray.
    pub fn cast_ray(&self, origin: WorldPoint, angle: f32, walls: &[Wall]) -> RangeHit {
        let max_range = self.config.max_range;
        let ray_end = origin.point_at(angle, max_range);

        match closest_crossing(origin, ray_end, walls) {
            Some((_, t)) => RangeHit::hit(origin, angle, t * max_range),
            None => RangeHit::miss(origin, angle, max_range),
        }
    }
}

/// Index and ray fraction of the nearest wall crossed by `origin→ray_end`.
///
/// Equal fractions keep the earlier wall.
fn closest_crossing(
    origin: WorldPoint,
    ray_end: WorldPoint,
    walls: &[Wall],
) -> Option<(usize, f32)> {
    let mut closest: Option<(usize, f32)> = None;
    for (idx, wall) in walls.iter().enumerate() {
        if let Some(t) = wall.crossing(origin, ray_end)
            && closest.is_none_or(|(_, best)| t < best)
        {
            closest = Some((idx, t));
        }
    }
    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn noiseless(ray_count: usize) -> RangeSensor {
        RangeSensor::new(SensorConfig::noiseless(ray_count, 400.0))
    }

    #[test]
    fn test_scan_length_and_angles() {
        let mut sensor = noiseless(8);
        let pose = Pose2D::new(0.0, 0.0, 0.5);
        let hits = sensor.scan(pose, &[]);

        assert_eq!(hits.len(), 8);
        assert_relative_eq!(hits[0].angle, 0.5);
        assert_relative_eq!(hits[2].angle, 0.5 + TAU / 4.0, epsilon = 1e-5);
    }

    #[test]
    fn test_miss_is_exact_max_range() {
        let mut sensor = RangeSensor::new(SensorConfig {
            noise_percent: 50.0,
            seed: 3,
            ..SensorConfig::noiseless(36, 250.0)
        });
        for hit in sensor.scan(Pose2D::new(10.0, 10.0, 0.0), &[]) {
            assert!(!hit.hit);
            assert_eq!(hit.distance, 250.0);
        }
    }

    #[test]
    fn test_closest_wall_wins() {
        let sensor = noiseless(1);
        let walls = [
            Wall::from_coords(300.0, -50.0, 300.0, 50.0),
            Wall::from_coords(200.0, -50.0, 200.0, 50.0),
        ];
        let hit = sensor.cast_ray(WorldPoint::ZERO, 0.0, &walls);
        assert!(hit.hit);
        assert_relative_eq!(hit.distance, 200.0, epsilon = 1e-3);
        assert_relative_eq!(hit.point.x, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_equal_distance_keeps_first_wall() {
        // Both walls cross the ray at (200, 0)
        let upright = Wall::from_coords(200.0, -50.0, 200.0, 50.0);
        let slanted = Wall::from_coords(150.0, -50.0, 250.0, 50.0);
        let ray_end = WorldPoint::new(400.0, 0.0);

        let (idx, t) = closest_crossing(WorldPoint::ZERO, ray_end, &[upright, slanted])
            .expect("ray crosses both walls");
        assert_eq!(idx, 0);
        assert_relative_eq!(t, 0.5);

        let (idx, _) = closest_crossing(WorldPoint::ZERO, ray_end, &[slanted, upright])
            .expect("ray crosses both walls");
        assert_eq!(idx, 0);

        let hit = noiseless(1).cast_ray(WorldPoint::ZERO, 0.0, &[slanted, upright]);
        assert_relative_eq!(hit.distance, 200.0);
    }

    #[test]
    fn test_noise_is_radial_and_bounded() {
        let mut sensor = RangeSensor::new(SensorConfig {
            noise_percent: 2.0,
            seed: 11,
            ..SensorConfig::noiseless(1, 400.0)
        });
        let wall = [Wall::from_coords(300.0, 100.0, 300.0, 500.0)];
        let pose = Pose2D::new(100.0, 300.0, 0.0);

        for _ in 0..50 {
            let hit = sensor.scan(pose, &wall)[0];
            assert!(hit.hit);
            // 2% of 400 = ±8 units
            assert!((hit.distance - 200.0).abs() <= 8.0 + 1e-3);
            // Angle untouched, point stays on the ray
            assert_relative_eq!(hit.angle, 0.0);
            assert_relative_eq!(hit.point.y, 300.0, epsilon = 1e-3);
            assert_relative_eq!(hit.point.x, 100.0 + hit.distance, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_tuning_is_clamped() {
        let mut sensor = noiseless(10);
        sensor.set_ray_count(0);
        assert_eq!(sensor.config().ray_count, 1);
        sensor.set_noise_percent(250.0);
        assert_eq!(sensor.config().noise_percent, 100.0);
    }
}
