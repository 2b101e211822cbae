//! A* pathfinding types.

use crate::core::{GridCoord, WorldPoint};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A node in the A* open set
#[derive(Clone, Copy, Debug)]
pub(super) struct AStarNode {
    pub index: usize,
    pub g_cost: f32, // Cost from start
    pub f_cost: f32, // g_cost + heuristic
    pub seq: u32,    // Insertion order, breaks f_cost ties
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; earlier insertion wins ties
        other
            .f_cost
            .total_cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* planner configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Chebyshev radius (cells) searched for nearby obstacles
    #[serde(default = "default_proximity_radius")]
    pub proximity_radius: i32,
    /// Cost added per occupied cell within `proximity_radius`
    #[serde(default = "default_proximity_weight")]
    pub proximity_weight: f32,
    /// Diagonal movement cost (sqrt(2))
    #[serde(default = "default_diagonal_cost")]
    pub diagonal_cost: f32,
}

fn default_proximity_radius() -> i32 {
    2
}
fn default_proximity_weight() -> f32 {
    5.0
}
fn default_diagonal_cost() -> f32 {
    std::f32::consts::SQRT_2
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            proximity_radius: default_proximity_radius(),
            proximity_weight: default_proximity_weight(),
            diagonal_cost: default_diagonal_cost(),
        }
    }
}

impl PlannerConfig {
    /// Plain shortest paths, no wall clearance penalty
    pub fn without_proximity() -> Self {
        Self {
            proximity_weight: 0.0,
            ..Default::default()
        }
    }
}

/// Result of A* pathfinding
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Visited cells after the start cell, ending at the goal (empty if no path)
    pub path_grid: Vec<GridCoord>,
    /// Cell centres of `path_grid`
    pub path_world: Vec<WorldPoint>,
    /// Total path cost including proximity penalties
    pub cost: f32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path_grid: Vec::new(),
            path_world: Vec::new(),
            cost: f32::INFINITY,
            nodes_expanded,
            failure_reason: Some(reason),
        }
    }

    /// Whether a path was found
    pub fn success(&self) -> bool {
        self.failure_reason.is_none()
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathFailure {
    /// Start or goal is out of bounds
    OutOfBounds,
    /// Goal cell is believed occupied
    GoalBlocked,
    /// No path exists between start and goal
    NoPath,
}
