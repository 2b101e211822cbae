//! Frontier detection for autonomous exploration.
//!
//! Identifies boundaries between free and unexplored space, clusters them
//! into frontier regions, and scores them for selection. Nothing is kept
//! between calls; each detection reads the current grid from scratch.

use std::collections::VecDeque;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, WorldPoint};
use crate::grid::{BeliefCell, GridStorage};

use super::config::FrontierConfig;

/// A frontier region (cluster of frontier cells).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frontier {
    /// Centroid of the frontier (mean cell, floored)
    pub centroid: GridCoord,
    /// Centre of the centroid cell in world coordinates
    pub world_centroid: WorldPoint,
    /// Size (number of cells)
    pub size: usize,
    /// Distance from the robot to the centroid, in cells
    pub distance_cells: f32,
    /// Score (higher is better)
    pub score: f32,
}

/// Frontier detector for exploration.
#[derive(Clone, Debug, Default)]
pub struct FrontierDetector {
    config: FrontierConfig,
}

impl FrontierDetector {
    /// Create a new frontier detector with configuration.
    pub fn new(config: FrontierConfig) -> Self {
        Self { config }
    }

    /// Current configuration
    pub fn config(&self) -> &FrontierConfig {
        &self.config
    }

    /// Detect all frontiers in the grid.
    ///
    /// Returns frontiers sorted by score (highest first). Equal scores keep
    /// discovery order (row-major scan of the seed cells).
    pub fn detect(&self, grid: &GridStorage, robot: WorldPoint) -> Vec<Frontier> {
        // Step 1: Find all frontier cells
        let is_frontier = find_frontier_cells(grid);

        // Step 2: Cluster frontier cells
        let clusters = cluster_frontiers(grid, &is_frontier);

        // Step 3: Filter and score
        let mut frontiers: Vec<Frontier> = clusters
            .into_iter()
            .filter(|cluster| cluster.len() >= self.config.min_cluster_size)
            .map(|cluster| self.create_frontier(&cluster, grid, robot))
            .collect();

        // Step 4: Sort by score (descending), stable
        frontiers.sort_by(|a, b| b.score.total_cmp(&a.score));

        trace!("[Frontier] {} frontiers detected", frontiers.len());
        frontiers
    }

    /// Best frontier target, `None` once the map is fully explored.
    pub fn find_best_frontier(&self, grid: &GridStorage, robot: WorldPoint) -> Option<WorldPoint> {
        self.detect(grid, robot)
            .first()
            .map(|frontier| frontier.world_centroid)
    }

    fn create_frontier(&self, cells: &[GridCoord], grid: &GridStorage, robot: WorldPoint) -> Frontier {
        let size = cells.len();
        let (sum_x, sum_y) = cells
            .iter()
            .fold((0i64, 0i64), |(sx, sy), c| (sx + c.x as i64, sy + c.y as i64));
        let centroid = GridCoord::new(
            (sum_x as f64 / size as f64).floor() as i32,
            (sum_y as f64 / size as f64).floor() as i32,
        );
        let world_centroid = grid.grid_to_world(centroid);
        let distance_cells = robot.distance(&world_centroid) / grid.cell_size();
        let score = size as f32 / (1.0 + distance_cells * self.config.distance_weight);

        Frontier {
            centroid,
            world_centroid,
            size,
            distance_cells,
            score,
        }
    }
}

/// Mark interior Free cells that touch an Unknown cell (4-adjacency).
///
/// The outermost ring of cells is never a frontier.
fn find_frontier_cells(grid: &GridStorage) -> Vec<bool> {
    let mut is_frontier = vec![false; grid.cell_count()];
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;

    for y in 1..rows - 1 {
        for x in 1..cols - 1 {
            let coord = GridCoord::new(x, y);
            if grid.get(coord) != Some(BeliefCell::Free) {
                continue;
            }

            let touches_unknown = coord
                .neighbors_4()
                .iter()
                .any(|n| grid.get(*n) == Some(BeliefCell::Unknown));

            if touches_unknown && let Some(idx) = grid.coord_to_index(coord) {
                is_frontier[idx] = true;
            }
        }
    }

    is_frontier
}

/// Cluster frontier cells by 4-connected flood fill.
fn cluster_frontiers(grid: &GridStorage, is_frontier: &[bool]) -> Vec<Vec<GridCoord>> {
    let mut visited = vec![false; is_frontier.len()];
    let mut clusters = Vec::new();
    let mut queue = VecDeque::new();

    for seed in 0..is_frontier.len() {
        if !is_frontier[seed] || visited[seed] {
            continue;
        }

        let mut cluster = Vec::new();
        visited[seed] = true;
        queue.push_back(seed);

        while let Some(idx) = queue.pop_front() {
            let coord = grid.index_to_coord(idx);
            cluster.push(coord);

            for neighbor in coord.neighbors_4() {
                if let Some(n_idx) = grid.coord_to_index(neighbor)
                    && is_frontier[n_idx]
                    && !visited[n_idx]
                {
                    visited[n_idx] = true;
                    queue.push_back(n_idx);
                }
            }
        }

        clusters.push(cluster);
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn detector() -> FrontierDetector {
        FrontierDetector::default()
    }

    #[test]
    fn test_fully_known_map_has_no_frontier() {
        let grid = GridStorage::from_ascii(&["#####", "#...#", "#...#", "#####"], 10.0);
        assert!(detector().detect(&grid, WorldPoint::new(20.0, 20.0)).is_empty());
        assert_eq!(detector().find_best_frontier(&grid, WorldPoint::new(20.0, 20.0)), None);
    }

    #[test]
    fn test_all_unknown_map_has_no_frontier() {
        let grid = GridStorage::new(10, 10, 10.0);
        assert!(detector().detect(&grid, WorldPoint::new(50.0, 50.0)).is_empty());
    }

    #[test]
    fn test_single_frontier_centroid() {
        // Column 4 of free cells borders unknown column 5
        let grid = GridStorage::from_ascii(
            &[
                "########",
                "#....???",
                "#....???",
                "#....???",
                "########",
            ],
            10.0,
        );
        let frontiers = detector().detect(&grid, WorldPoint::new(15.0, 25.0));
        assert_eq!(frontiers.len(), 1);

        let f = &frontiers[0];
        assert_eq!(f.size, 3);
        assert_eq!(f.centroid, GridCoord::new(4, 2));
        assert_eq!(f.world_centroid, WorldPoint::new(45.0, 25.0));
        assert_relative_eq!(f.distance_cells, 3.0);
        assert_relative_eq!(f.score, 3.0 / 1.3, epsilon = 1e-5);
    }

    #[test]
    fn test_small_clusters_dropped() {
        let grid = GridStorage::from_ascii(
            &[
                "######",
                "#...?#",
                "#...##",
                "#....#",
                "######",
            ],
            10.0,
        );
        // Only (3,1) touches unknown: one-cell cluster
        assert!(detector().detect(&grid, WorldPoint::new(25.0, 25.0)).is_empty());
    }

    #[test]
    fn test_edge_ring_excluded() {
        // Free cells on the outer ring next to unknown are not frontiers
        let grid = GridStorage::from_ascii(&[".??", ".??", ".??", ".??", ".??"], 10.0);
        assert!(detector().detect(&grid, WorldPoint::new(5.0, 25.0)).is_empty());
    }

    /// 30x7 room: 3-cell frontier at column 2, 5-cell frontier at column 27.
    fn two_frontier_room() -> GridStorage {
        let wall = "#".repeat(30);
        let closed = format!("##{}?#", ".".repeat(26));
        let open = format!("#?{}?#", ".".repeat(26));
        let rows = [
            wall.as_str(),
            closed.as_str(),
            open.as_str(),
            open.as_str(),
            open.as_str(),
            closed.as_str(),
            wall.as_str(),
        ];
        GridStorage::from_ascii(&rows, 10.0)
    }

    #[test]
    fn test_closer_smaller_cluster_can_win() {
        let grid = two_frontier_room();
        let frontiers = detector().detect(&grid, WorldPoint::new(25.0, 35.0));

        assert_eq!(frontiers.len(), 2);
        assert_eq!(frontiers[0].size, 3);
        assert_eq!(frontiers[0].centroid, GridCoord::new(2, 3));
        assert_eq!(frontiers[1].size, 5);
        assert!(frontiers[0].score > frontiers[1].score);
    }

    #[test]
    fn test_larger_cluster_wins_at_similar_distance() {
        let grid = two_frontier_room();
        let best = detector().find_best_frontier(&grid, WorldPoint::new(155.0, 35.0));
        assert_eq!(best, Some(WorldPoint::new(275.0, 35.0)));
    }
}
