//! Angle utilities.
//!
//! All angles are in radians, counter-clockwise positive, with 0 along +X.

use std::f32::consts::{PI, TAU};

/// Normalize angle to [-π, π).
///
/// # Example
/// ```
/// use vastu_sim::core::math::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert!((normalize_angle(PI / 2.0) - PI / 2.0).abs() < 1e-6);
/// assert!(normalize_angle(2.0 * PI).abs() < 1e-5);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let mut a = angle % TAU;
    if a >= PI {
        a -= TAU;
    } else if a < -PI {
        a += TAU;
    }
    a
}

/// Shortest signed angular difference from `from` to `to`, in [-π, π).
///
/// Positive result means counter-clockwise rotation from `from` to `to`.
#[inline]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}
