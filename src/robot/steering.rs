//! Proportional steering toward a waypoint.

use crate::core::{Pose2D, WorldPoint, angle_diff};

use super::config::RobotConfig;

/// Drive command for one tick: forward speed and turn rate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriveCommand {
    /// World units per tick (positive = forward)
    pub forward: f32,
    /// Radians per tick (positive = counter-clockwise)
    pub turn: f32,
}

impl DriveCommand {
    /// Create a new drive command.
    pub fn new(forward: f32, turn: f32) -> Self {
        Self { forward, turn }
    }

    /// Zero command (stop).
    pub fn stop() -> Self {
        Self::default()
    }

    /// Check if this is a stop command.
    pub fn is_stop(&self) -> bool {
        self.forward == 0.0 && self.turn == 0.0
    }
}

/// Heading controller for waypoint following.
///
/// 1. Compute the bearing from the robot to the target
/// 2. Turn proportionally to the heading error, clamped to the turn limit
/// 3. Hold still while the error is large, otherwise cruise
#[derive(Clone, Copy, Debug)]
pub struct Steering {
    gain: f32,
    max_turn_rate: f32,
    turn_in_place_threshold: f32,
    cruise_speed: f32,
}

impl Steering {
    /// Build from the current robot configuration.
    pub fn new(config: &RobotConfig) -> Self {
        Self {
            gain: config.steering_gain,
            max_turn_rate: config.max_turn_rate,
            turn_in_place_threshold: config.turn_in_place_threshold,
            cruise_speed: config.cruise_fraction * config.effective_max_speed(),
        }
    }

    /// Command that drives `pose` toward `target`.
    pub fn steer(&self, pose: Pose2D, target: WorldPoint) -> DriveCommand {
        let bearing = pose.position().angle_to(&target);
        let error = angle_diff(pose.theta, bearing);

        let turn = (error * self.gain).clamp(-self.max_turn_rate, self.max_turn_rate);
        let forward = if error.abs() > self.turn_in_place_threshold {
            0.0
        } else {
            self.cruise_speed
        };

        DriveCommand::new(forward, turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_straight_ahead_cruises() {
        let steering = Steering::new(&RobotConfig::default());
        let cmd = steering.steer(Pose2D::new(0.0, 0.0, 0.0), WorldPoint::new(100.0, 0.0));
        assert_relative_eq!(cmd.forward, 0.8 * 3.0);
        assert_relative_eq!(cmd.turn, 0.0);
    }

    #[test]
    fn test_sharp_turn_in_place() {
        let steering = Steering::new(&RobotConfig::default());
        let cmd = steering.steer(Pose2D::new(0.0, 0.0, 0.0), WorldPoint::new(0.0, 100.0));
        assert_eq!(cmd.forward, 0.0);
        // Error of π/2 saturates the turn limit
        assert_relative_eq!(cmd.turn, 0.08);

        let cmd = steering.steer(Pose2D::new(0.0, 0.0, FRAC_PI_2), WorldPoint::new(100.0, 0.0));
        assert_relative_eq!(cmd.turn, -0.08);
    }

    #[test]
    fn test_small_error_is_proportional() {
        let steering = Steering::new(&RobotConfig::default());
        let cmd = steering.steer(Pose2D::new(0.0, 0.0, 0.0), WorldPoint::new(100.0, 3.0));
        let error = 3.0f32.atan2(100.0);
        assert_relative_eq!(cmd.turn, error, epsilon = 1e-6);
        assert!(cmd.forward > 0.0);
    }
}
