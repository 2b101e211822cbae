//! # VastuSim
//!
//! 2D robot simulator: range sensing, belief-grid mapping, A* planning and
//! frontier exploration.
//!
//! ## Overview
//!
//! A robot with a rotating range sensor drives through a set of wall
//! segments and builds a belief map of what it has seen. Each cell is:
//!
//! - **Unknown** - Not yet observed
//! - **Free** - A ray passed through it
//! - **Occupied** - A ray stopped in it (sticky until the map is reset)
//!
//! The robot tracks two poses: the true pose moved by physics and a believed
//! pose moved by a noisy replay of the same commands (odometry drift).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_sim::{DriveInput, SimConfig, Simulation, Wall};
//!
//! let walls = vec![Wall::from_coords(300.0, 100.0, 300.0, 500.0)];
//! let mut sim = Simulation::new(SimConfig::default(), walls)?;
//!
//! sim.set_exploring(true);
//! for _ in 0..1000 {
//!     let report = sim.tick(DriveInput::default());
//!     if report.exploration_finished {
//!         break;
//!     }
//! }
//! println!("{}", sim.grid().to_ascii());
//! ```
//!
//! ## Coordinate System
//!
//! - World units are continuous; cell `(col, row)` covers
//!   `[col*s, (col+1)*s) x [row*s, (row+1)*s)` for cell size `s`
//! - Theta: radians, CCW positive from +X axis

#![warn(missing_docs)]

// Core types
pub mod core;

// Range sensor and noise
pub mod sensor;

// Belief grid
pub mod grid;

// A* path planning
pub mod pathfinding;

// Frontier detection
pub mod exploration;

// Robot kinematics
pub mod robot;

// Control loop
pub mod sim;

// Unified configuration
pub mod config;

// Error types
pub mod error;

pub use crate::config::SimConfig;
pub use crate::core::{GridCoord, Pose2D, Wall, WorldPoint};
pub use crate::error::{Result, SimError};
pub use crate::exploration::{Frontier, FrontierDetector};
pub use crate::grid::{BeliefCell, BeliefGrid, CellCounts, ObserveResult};
pub use crate::pathfinding::{PathFailure, PathPlanner, PathResult};
pub use crate::robot::{DriveInput, DriveMode, MotionOutcome, Robot};
pub use crate::sensor::{RangeHit, RangeSensor};
pub use crate::sim::{Simulation, TickReport, WallSource};
