//! A* planner implementation.
//!
//! Search state is kept in flat vectors keyed by the grid's cell index, so
//! membership tests and score lookups are O(1) array reads.

use crate::core::{GridCoord, WorldPoint};
use crate::grid::GridStorage;
use log::{debug, trace};
use std::collections::BinaryHeap;

use super::types::{AStarNode, PathFailure, PathResult, PlannerConfig};

/// 8-connected moves: (dx, dy, diagonal)
const MOVES: [(i32, i32, bool); 8] = [
    (1, 0, false),
    (-1, 0, false),
    (0, 1, false),
    (0, -1, false),
    (1, 1, true),
    (1, -1, true),
    (-1, 1, true),
    (-1, -1, true),
];

/// Marker for "no predecessor" in the came-from table
const NO_PARENT: usize = usize::MAX;

/// A* path planner over a belief grid snapshot.
///
/// Unknown cells are traversable; only Occupied cells block.
pub struct PathPlanner<'a> {
    storage: &'a GridStorage,
    config: PlannerConfig,
}

impl<'a> PathPlanner<'a> {
    /// Create a new planner
    pub fn new(storage: &'a GridStorage, config: PlannerConfig) -> Self {
        Self { storage, config }
    }

    /// Create with default configuration
    pub fn with_defaults(storage: &'a GridStorage) -> Self {
        Self::new(storage, PlannerConfig::default())
    }

    /// Waypoints from `start` to `goal` (world coordinates).
    ///
    /// Returns cell centres from the first step after the start cell through
    /// the goal cell. Empty means no path.
    pub fn find_path(&self, start: WorldPoint, goal: WorldPoint) -> Vec<WorldPoint> {
        self.plan(start, goal).path_world
    }

    /// Plan from `start` to `goal` (world coordinates).
    pub fn plan(&self, start: WorldPoint, goal: WorldPoint) -> PathResult {
        let start = self.storage.world_to_grid(start);
        let goal = self.storage.world_to_grid(goal);
        self.plan_grid(start, goal)
    }

    /// Plan from `start` to `goal` (grid coordinates).
    pub fn plan_grid(&self, start: GridCoord, goal: GridCoord) -> PathResult {
        trace!(
            "[AStar] plan: start=({},{}) goal=({},{})",
            start.x, start.y, goal.x, goal.y
        );

        let (Some(start_idx), Some(goal_idx)) = (
            self.storage.coord_to_index(start),
            self.storage.coord_to_index(goal),
        ) else {
            debug!("[AStar] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        };

        if self.storage.get_index(goal_idx).is_occupied() {
            debug!("[AStar] FAILED: GoalBlocked at ({},{})", goal.x, goal.y);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        if start_idx == goal_idx {
            return self.reconstruct_path(&[], goal_idx, 0.0, 0);
        }

        let cell_count = self.storage.cell_count();
        let mut g_scores = vec![f32::INFINITY; cell_count];
        let mut came_from = vec![NO_PARENT; cell_count];
        let mut closed = vec![false; cell_count];
        let mut penalties: Vec<Option<f32>> = vec![None; cell_count];

        let mut open_set = BinaryHeap::new();
        let mut seq: u32 = 0;

        g_scores[start_idx] = 0.0;
        open_set.push(AStarNode {
            index: start_idx,
            g_cost: 0.0,
            f_cost: start.euclidean_distance(&goal),
            seq,
        });

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            if closed[current.index] {
                continue;
            }
            closed[current.index] = true;
            nodes_expanded += 1;

            // Goal reached
            if current.index == goal_idx {
                return self.reconstruct_path(&came_from, goal_idx, current.g_cost, nodes_expanded);
            }

            let coord = self.storage.index_to_coord(current.index);

            for &(dx, dy, diagonal) in &MOVES {
                let neighbor = GridCoord::new(coord.x + dx, coord.y + dy);
                let Some(n_idx) = self.storage.coord_to_index(neighbor) else {
                    continue;
                };
                if closed[n_idx] || self.storage.get_index(n_idx).is_occupied() {
                    continue;
                }

                // No corner cutting past occupied cells
                if diagonal
                    && (self.storage.is_occupied(GridCoord::new(coord.x + dx, coord.y))
                        || self.storage.is_occupied(GridCoord::new(coord.x, coord.y + dy)))
                {
                    continue;
                }

                let move_cost = if diagonal {
                    self.config.diagonal_cost
                } else {
                    1.0
                };
                let penalty = *penalties[n_idx].get_or_insert_with(|| self.proximity_penalty(neighbor));

                let tentative_g = current.g_cost + move_cost + penalty;
                if tentative_g < g_scores[n_idx] {
                    g_scores[n_idx] = tentative_g;
                    came_from[n_idx] = current.index;

                    seq += 1;
                    open_set.push(AStarNode {
                        index: n_idx,
                        g_cost: tentative_g,
                        f_cost: tentative_g + neighbor.euclidean_distance(&goal),
                        seq,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Occupied cells within the proximity radius, times the weight.
    fn proximity_penalty(&self, coord: GridCoord) -> f32 {
        if self.config.proximity_weight <= 0.0 {
            return 0.0;
        }
        let r = self.config.proximity_radius;
        let mut count = 0u32;
        for dy in -r..=r {
            for dx in -r..=r {
                if self.storage.is_occupied(GridCoord::new(coord.x + dx, coord.y + dy)) {
                    count += 1;
                }
            }
        }
        count as f32 * self.config.proximity_weight
    }

    /// Walk the came-from table back from the goal, dropping the start cell.
    fn reconstruct_path(
        &self,
        came_from: &[usize],
        goal_idx: usize,
        cost: f32,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut indices = vec![goal_idx];
        let mut current = goal_idx;
        while let Some(&prev) = came_from.get(current)
            && prev != NO_PARENT
        {
            indices.push(prev);
            current = prev;
        }
        // The last index is the start cell unless start == goal
        if indices.len() > 1 {
            indices.pop();
        }
        indices.reverse();

        let path_grid: Vec<GridCoord> = indices
            .iter()
            .map(|&idx| self.storage.index_to_coord(idx))
            .collect();
        let path_world: Vec<WorldPoint> = path_grid
            .iter()
            .map(|c| self.storage.grid_to_world(*c))
            .collect();

        trace!(
            "[AStar] SUCCESS: path length={} cells, cost={:.2}, nodes_expanded={}",
            path_grid.len(),
            cost,
            nodes_expanded
        );

        PathResult {
            path_grid,
            path_world,
            cost,
            nodes_expanded,
            failure_reason: None,
        }
    }
}
