//! Belief grid: the robot's map of what it has seen.
//!
//! ```text
//!   RangeSensor hits + pose
//!             │
//!             ▼
//!   ┌───────────────────┐
//!   │   belief_update   │  RayWalk, Free/Occupied votes
//!   └─────────┬─────────┘
//!             ▼
//!   ┌───────────────────┐        ┌──────────────────────────┐
//!   │    GridStorage    │ ─────► │ PathPlanner / Frontiers  │
//!   │   (flat arena)    │  &ref  │      (read only)         │
//!   └───────────────────┘        └──────────────────────────┘
//! ```
//!
//! [`BeliefGrid`] is the only writer. Everything else reads through
//! [`BeliefGrid::storage`], which hands out a shared reference.
//!
//! ## Key Components
//!
//! - [`BeliefCell`]: Unknown / Free / Occupied with monotonic transitions
//! - [`GridStorage`]: Flat `col + row * cols` cell buffer
//! - [`RayWalk`]: Half-cell stepping along a ray
//! - [`GridConfig`]: World size and cell size

pub mod belief_update;
mod cell;
mod config;
pub mod raycaster;
mod storage;

pub use cell::BeliefCell;
pub use config::GridConfig;
pub use raycaster::RayWalk;
pub use storage::{CellCounts, GridStorage};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Pose2D, WorldPoint};
use crate::sensor::RangeHit;

/// Result of applying one scan to the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObserveResult {
    /// Cells newly marked Free
    pub cells_free: usize,
    /// Cells newly marked Occupied
    pub cells_occupied: usize,
    /// Ray cells that fell outside the grid
    pub cells_ignored: usize,
}

impl ObserveResult {
    /// Cells whose belief changed
    pub fn cells_changed(&self) -> usize {
        self.cells_free + self.cells_occupied
    }
}

/// Fixed-size belief grid owning the cell array.
#[derive(Clone, Debug)]
pub struct BeliefGrid {
    storage: GridStorage,
    config: GridConfig,
    /// Hits closer than this are never marked Occupied
    robot_radius: f32,
}

impl BeliefGrid {
    /// Create an all-unknown grid covering `config`'s world size.
    pub fn new(config: GridConfig, robot_radius: f32) -> Self {
        let storage = GridStorage::new(config.cols(), config.rows(), config.cell_size);
        debug!(
            "[Grid] Created {}x{} grid, cell size {}",
            storage.cols(),
            storage.rows(),
            storage.cell_size()
        );
        Self {
            storage,
            config,
            robot_radius,
        }
    }

    /// Read-only view for planners and detectors.
    #[inline]
    pub fn storage(&self) -> &GridStorage {
        &self.storage
    }

    /// Grid configuration
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Grid width in cells
    #[inline]
    pub fn cols(&self) -> usize {
        self.storage.cols()
    }

    /// Grid height in cells
    #[inline]
    pub fn rows(&self) -> usize {
        self.storage.rows()
    }

    /// World units per cell
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.storage.cell_size()
    }

    /// Cell at `(col, row)`, `None` outside the grid.
    #[inline]
    pub fn cell_at(&self, col: i32, row: i32) -> Option<BeliefCell> {
        self.storage.get(GridCoord::new(col, row))
    }

    /// Cell containing world point `(x, y)`, `None` outside the grid.
    #[inline]
    pub fn cell_at_world(&self, x: f32, y: f32) -> Option<BeliefCell> {
        self.storage.get_world(WorldPoint::new(x, y))
    }

    /// Apply one scan taken from `pose`.
    pub fn update(&mut self, pose: Pose2D, hits: &[RangeHit]) -> ObserveResult {
        let result =
            belief_update::update_from_scan(&mut self.storage, pose, hits, self.robot_radius);
        log::trace!(
            "[Grid] Scan of {} rays: +{} free, +{} occupied, {} ignored",
            hits.len(),
            result.cells_free,
            result.cells_occupied,
            result.cells_ignored
        );
        result
    }

    /// Forget everything: all cells back to Unknown.
    pub fn clear(&mut self) {
        self.storage.clear();
        debug!("[Grid] Cleared");
    }

    /// Cell counts by belief state
    pub fn counts(&self) -> CellCounts {
        self.storage.counts()
    }

    /// Fraction of cells observed at least once, in [0, 1].
    pub fn explored_fraction(&self) -> f32 {
        let counts = self.counts();
        if counts.total() == 0 {
            return 0.0;
        }
        counts.known() as f32 / counts.total() as f32
    }

    /// Text rendering, see [`GridStorage::to_ascii`].
    pub fn to_ascii(&self) -> String {
        self.storage.to_ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dimensions_from_world_size() {
        let grid = BeliefGrid::new(GridConfig::default(), 12.0);
        assert_eq!(grid.cols(), 100);
        assert_eq!(grid.rows(), 80);
        assert_eq!(grid.cell_at(0, 0), Some(BeliefCell::Unknown));
        assert_eq!(grid.cell_at(100, 0), None);
        assert_eq!(grid.cell_at_world(-1.0, 5.0), None);
    }

    #[test]
    fn test_update_then_clear() {
        let mut grid = BeliefGrid::new(GridConfig::default(), 12.0);
        let pose = Pose2D::new(100.0, 300.0, 0.0);
        let hits = [RangeHit::hit(pose.position(), 0.0, 200.0)];

        let result = grid.update(pose, &hits);
        assert_eq!(result.cells_changed(), 21);
        assert_eq!(grid.cell_at_world(300.0, 300.0), Some(BeliefCell::Occupied));
        assert_eq!(grid.cell_at_world(105.0, 300.0), Some(BeliefCell::Free));
        assert_relative_eq!(grid.explored_fraction(), 21.0 / 8000.0);

        grid.clear();
        assert_eq!(grid.counts().unknown, 8000);
        assert_eq!(grid.explored_fraction(), 0.0);
    }
}
