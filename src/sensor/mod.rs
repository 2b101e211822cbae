//! Simulated range sensor.
//!
//! - [`RangeSensor`]: casts a fan of rays against wall segments
//! - [`RangeHit`]: per-ray result (point, distance, angle, hit flag)
//! - [`SensorConfig`]: ray count, range, noise band
//! - [`NoiseGenerator`]: seedable uniform noise shared with odometry drift

mod config;
mod noise;
mod range_sensor;

pub use config::{MAX_RAY_COUNT, SensorConfig};
pub use noise::NoiseGenerator;
pub use range_sensor::{RangeHit, RangeSensor};
