//! Core value types for the simulator.
//!
//! ## Coordinates
//! - [`WorldPoint`]: continuous world coordinates
//! - [`GridCoord`]: integer cell indices, `col = floor(x / s)`, `row = floor(y / s)`
//!
//! ## Robot State
//! - [`Pose2D`]: position (x, y) and heading (theta), theta = 0 along +X
//!
//! ## Environment
//! - [`Wall`]: directed line segment the sensor and the collision check test against
//!
//! ## Geometry
//! - [`geometry`]: segment intersection, closest point, circle/segment overlap
//! - [`math`]: angle wrapping

pub mod geometry;
pub mod math;
mod point;
mod pose;
mod wall;

pub use math::{angle_diff, normalize_angle};
pub use point::{GridCoord, WorldPoint};
pub use pose::Pose2D;
pub use wall::Wall;
