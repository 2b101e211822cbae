//! Robot pose type.

use serde::{Deserialize, Serialize};

use super::math::normalize_angle;
use super::point::WorldPoint;

/// Robot pose: position plus heading.
///
/// `theta` is in radians with 0 pointing along +X.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position
    pub x: f32,
    /// Y position
    pub y: f32,
    /// Heading (radians)
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self { x, y, theta }
    }

    /// Position component
    #[inline]
    pub fn position(self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }

    /// Same pose with the heading wrapped to [-π, π)
    #[inline]
    pub fn normalized(self) -> Self {
        Self::new(self.x, self.y, normalize_angle(self.theta))
    }

    /// Compare two poses within position and heading tolerances
    pub fn approx_eq(self, other: Pose2D, pos_epsilon: f32, angle_epsilon: f32) -> bool {
        (self.x - other.x).abs() <= pos_epsilon
            && (self.y - other.y).abs() <= pos_epsilon
            && normalize_angle(self.theta - other.theta).abs() <= angle_epsilon
    }
}
