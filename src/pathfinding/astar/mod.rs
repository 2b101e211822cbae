//! A* pathfinding algorithm.
//!
//! Implements A* search on the belief grid with:
//! - 8-connected movement, no corner cutting past occupied cells
//! - Proximity penalty for cells near obstacles
//! - Euclidean heuristic in cell units

mod planner;
mod types;

pub use planner::PathPlanner;
pub use types::{PathFailure, PathResult, PlannerConfig};

use crate::core::WorldPoint;
use crate::grid::GridStorage;

/// Quick path finding with default configuration
pub fn find_path(storage: &GridStorage, start: WorldPoint, goal: WorldPoint) -> Vec<WorldPoint> {
    PathPlanner::with_defaults(storage).find_path(start, goal)
}
