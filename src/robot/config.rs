//! Robot geometry, motion limits and odometry drift configuration.

use serde::{Deserialize, Serialize};

use crate::core::Pose2D;

/// Upper bound for the speed multiplier tuning input
pub const MAX_SPEED_MULTIPLIER: f32 = 10.0;

/// Upper bound for the drift tuning input
pub const MAX_DRIFT: f32 = 100.0;

/// Robot configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotConfig {
    /// Collision radius (world units)
    #[serde(default = "default_radius")]
    pub radius: f32,

    /// Maximum forward speed (world units per tick)
    #[serde(default = "default_max_speed")]
    pub max_speed: f32,

    /// Maximum turn rate (radians per tick)
    #[serde(default = "default_max_turn_rate")]
    pub max_turn_rate: f32,

    /// Scales `max_speed`, clamped to [0, 10]
    #[serde(default = "default_speed_multiplier")]
    pub speed_multiplier: f32,

    /// Waypoint counts as reached inside this distance
    #[serde(default = "default_arrival_radius")]
    pub arrival_radius: f32,

    /// Heading error (radians) above which the robot turns in place
    #[serde(default = "default_turn_in_place_threshold")]
    pub turn_in_place_threshold: f32,

    /// Fraction of max speed used while following a path
    #[serde(default = "default_cruise_fraction")]
    pub cruise_fraction: f32,

    /// Proportional gain on heading error
    #[serde(default = "default_steering_gain")]
    pub steering_gain: f32,

    /// Odometry drift magnitude in percent, clamped to [0, 100]. 0 disables drift.
    #[serde(default)]
    pub drift: f32,

    /// Turn noise amplitude (radians per tick) at 100% drift
    #[serde(default = "default_turn_noise")]
    pub turn_noise: f32,

    /// Forward noise amplitude (world units per tick) at 100% drift
    #[serde(default = "default_forward_noise")]
    pub forward_noise: f32,

    /// Displacement direction jitter amplitude (radians) at 100% drift
    #[serde(default = "default_heading_jitter")]
    pub heading_jitter: f32,

    /// Positions kept in the trail history
    #[serde(default = "default_trail_capacity")]
    pub trail_capacity: usize,

    /// Initial pose
    #[serde(default = "default_start")]
    pub start: Pose2D,

    /// Seed for odometry noise (0 = entropy)
    #[serde(default)]
    pub seed: u64,
}

fn default_radius() -> f32 {
    12.0
}
fn default_max_speed() -> f32 {
    3.0
}
fn default_max_turn_rate() -> f32 {
    0.08
}
fn default_speed_multiplier() -> f32 {
    1.0
}
fn default_arrival_radius() -> f32 {
    15.0
}
fn default_turn_in_place_threshold() -> f32 {
    0.5
}
fn default_cruise_fraction() -> f32 {
    0.8
}
fn default_steering_gain() -> f32 {
    1.0
}
fn default_turn_noise() -> f32 {
    0.05
}
fn default_forward_noise() -> f32 {
    1.0
}
fn default_heading_jitter() -> f32 {
    0.05
}
fn default_trail_capacity() -> usize {
    500
}
fn default_start() -> Pose2D {
    Pose2D::new(100.0, 300.0, 0.0)
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            max_speed: default_max_speed(),
            max_turn_rate: default_max_turn_rate(),
            speed_multiplier: default_speed_multiplier(),
            arrival_radius: default_arrival_radius(),
            turn_in_place_threshold: default_turn_in_place_threshold(),
            cruise_fraction: default_cruise_fraction(),
            steering_gain: default_steering_gain(),
            drift: 0.0,
            turn_noise: default_turn_noise(),
            forward_noise: default_forward_noise(),
            heading_jitter: default_heading_jitter(),
            trail_capacity: default_trail_capacity(),
            start: default_start(),
            seed: 0,
        }
    }
}

impl RobotConfig {
    /// Forward speed limit after the multiplier
    pub fn effective_max_speed(&self) -> f32 {
        self.max_speed * self.speed_multiplier
    }

    /// Drift as a fraction in [0, 1]
    pub fn drift_scale(&self) -> f32 {
        self.drift / MAX_DRIFT
    }
}
