//! Path planning on the belief grid.
//!
//! ```rust,ignore
//! use vastu_sim::pathfinding::{PathPlanner, PlannerConfig};
//!
//! let planner = PathPlanner::new(grid.storage(), PlannerConfig::default());
//!
//! let result = planner.plan(start, goal);
//! if result.success() {
//!     println!("Path found with {} waypoints", result.path_world.len());
//! }
//! ```

pub mod astar;

pub use astar::{PathFailure, PathPlanner, PathResult, PlannerConfig, find_path};
