//! Robot kinematics: true and believed poses, collisions, steering.
//!
//! ## Key Components
//!
//! - [`Robot`]: Owns both poses, the active path and the trail
//! - [`Steering`]: Proportional heading controller for waypoints
//! - [`RobotConfig`]: Geometry, limits and drift amplitudes
//! - [`DriveInput`] / [`DriveMode`] / [`MotionOutcome`]: per-tick I/O

mod config;
mod kinematics;
mod state;
mod steering;

pub use config::{MAX_DRIFT, MAX_SPEED_MULTIPLIER, RobotConfig};
pub use kinematics::Robot;
pub use state::{DriveInput, DriveMode, MotionOutcome, Trail};
pub use steering::{DriveCommand, Steering};
