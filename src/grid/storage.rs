//! Flat-array storage for the belief grid.
//!
//! Cells live in one contiguous buffer addressed as `col + row * cols`:
//!
//! ```text
//! row 0: [ 0][ 1][ 2] ... [cols-1]
//! row 1: [cols][cols+1] ...
//! ```
//!
//! Cell `(col, row)` covers world `[col*s, (col+1)*s) x [row*s, (row+1)*s)`.
//! Readers get `&GridStorage`; writes go through the `grid` module only.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, WorldPoint};

use super::cell::BeliefCell;

/// Cell counts by belief state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Never observed
    pub unknown: usize,
    /// Observed free
    pub free: usize,
    /// Observed occupied
    pub occupied: usize,
}

impl CellCounts {
    /// Total known cells
    pub fn known(&self) -> usize {
        self.free + self.occupied
    }

    /// Total cells
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}

/// Belief grid storage.
#[derive(Clone, Debug)]
pub struct GridStorage {
    cells: Vec<BeliefCell>,
    cols: usize,
    rows: usize,
    cell_size: f32,
    /// Pre-computed 1.0 / cell_size for world-to-grid conversion.
    inv_cell_size: f32,
}

impl GridStorage {
    /// Create an all-unknown grid.
    pub fn new(cols: usize, rows: usize, cell_size: f32) -> Self {
        Self {
            cells: vec![BeliefCell::Unknown; cols * rows],
            cols,
            rows,
            cell_size,
            inv_cell_size: 1.0 / cell_size,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid height in cells.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// World units per cell edge.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw cell buffer in `col + row * cols` order.
    #[inline]
    pub fn cells(&self) -> &[BeliefCell] {
        &self.cells
    }

    // === Coordinate Conversion ===

    /// World point to the cell containing it: `col = floor(x/s)`, `row = floor(y/s)`.
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(
            (point.x * self.inv_cell_size).floor() as i32,
            (point.y * self.inv_cell_size).floor() as i32,
        )
    }

    /// Cell to the world coordinates of its centre.
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            (coord.x as f32 + 0.5) * self.cell_size,
            (coord.y as f32 + 0.5) * self.cell_size,
        )
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0 && coord.y >= 0 && (coord.x as usize) < self.cols && (coord.y as usize) < self.rows
    }

    /// Flat index of a coordinate, `None` when out of bounds.
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.x as usize + coord.y as usize * self.cols)
        } else {
            None
        }
    }

    /// Coordinate of a flat index.
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.cols) as i32, (index / self.cols) as i32)
    }

    // === Cell Access ===

    /// Cell at grid coordinates.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<BeliefCell> {
        self.coord_to_index(coord).map(|idx| self.cells[idx])
    }

    /// Cell at world coordinates.
    #[inline]
    pub fn get_world(&self, point: WorldPoint) -> Option<BeliefCell> {
        self.get(self.world_to_grid(point))
    }

    /// Cell at a flat index the caller has already bounds-checked.
    #[inline]
    pub(crate) fn get_index(&self, index: usize) -> BeliefCell {
        self.cells[index]
    }

    /// Is the cell at `coord` occupied? Out-of-bounds cells are not.
    #[inline]
    pub fn is_occupied(&self, coord: GridCoord) -> bool {
        self.get(coord).is_some_and(BeliefCell::is_occupied)
    }

    /// Count cells by belief state.
    pub fn counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for cell in &self.cells {
            match cell {
                BeliefCell::Unknown => counts.unknown += 1,
                BeliefCell::Free => counts.free += 1,
                BeliefCell::Occupied => counts.occupied += 1,
            }
        }
        counts
    }

    /// Render as text, one line per row, using [`BeliefCell::as_char`].
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in self.cells.chunks(self.cols) {
            out.extend(row.iter().map(|c| c.as_char()));
            out.push('\n');
        }
        out
    }

    // === Mutation (grid module only) ===

    /// Apply an observation under the monotonic belief rule.
    ///
    /// Returns true if the cell changed. Out-of-bounds writes are ignored.
    #[inline]
    pub(super) fn observe(&mut self, coord: GridCoord, observed: BeliefCell) -> bool {
        let Some(idx) = self.coord_to_index(coord) else {
            return false;
        };
        let cell = &mut self.cells[idx];
        if cell.accepts(observed) {
            *cell = observed;
            true
        } else {
            false
        }
    }

    /// Reset every cell to Unknown.
    pub(super) fn clear(&mut self) {
        self.cells.fill(BeliefCell::Unknown);
    }

    /// Build a grid from text rows (`?` unknown, `.` free, `#` occupied).
    ///
    /// Row 0 is the first string.
    #[cfg(test)]
    pub(crate) fn from_ascii(rows: &[&str], cell_size: f32) -> Self {
        let cols = rows.first().map_or(0, |r| r.chars().count());
        let mut storage = Self::new(cols, rows.len(), cell_size);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                storage.cells[x + y * cols] = BeliefCell::from_char(c);
            }
        }
        storage
    }
}
