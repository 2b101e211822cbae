//! Configuration types for the belief grid.

use serde::{Deserialize, Serialize};

/// Grid configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// World units per cell edge
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,

    /// World width covered by the grid
    #[serde(default = "default_world_width")]
    pub world_width: f32,

    /// World height covered by the grid
    #[serde(default = "default_world_height")]
    pub world_height: f32,
}

fn default_cell_size() -> f32 {
    10.0
}
fn default_world_width() -> f32 {
    1000.0
}
fn default_world_height() -> f32 {
    800.0
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            world_width: default_world_width(),
            world_height: default_world_height(),
        }
    }
}

impl GridConfig {
    /// Configuration for a grid of `cols` x `rows` cells.
    pub fn with_cells(cols: usize, rows: usize, cell_size: f32) -> Self {
        Self {
            cell_size,
            world_width: cols as f32 * cell_size,
            world_height: rows as f32 * cell_size,
        }
    }

    /// Columns needed to cover the world width
    pub fn cols(&self) -> usize {
        (self.world_width / self.cell_size).ceil().max(1.0) as usize
    }

    /// Rows needed to cover the world height
    pub fn rows(&self) -> usize {
        (self.world_height / self.cell_size).ceil().max(1.0) as usize
    }
}
