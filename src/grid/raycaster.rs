//! Fixed-step ray walking for belief updates.
//!
//! The walker samples the segment from the sensor to a reading's end point
//! every `cell_size / 2`, yielding each cell it lands in once:
//!
//! ```text
//! start ●──●──●──●──●──●──○ end
//!       d=0  step  2*step ...
//! ```
//!
//! Samples are taken at `d = i * step` for every `d < limit`. For an
//! obstacle return the limit is pulled back one step so the wall cell
//! itself is never voted free.

use crate::core::{GridCoord, WorldPoint};

/// Iterator over the distinct cells visited by a fixed-step walk.
pub struct RayWalk {
    start: WorldPoint,
    /// Unit direction times step size
    step_vector: WorldPoint,
    /// Samples still to take
    remaining: usize,
    /// Next sample index
    index: usize,
    inv_cell_size: f32,
    /// Last yielded cell (to avoid duplicates)
    last_coord: Option<GridCoord>,
}

impl RayWalk {
    /// Walk from `start` towards `end`, sampling every `cell_size / 2`.
    ///
    /// When `stop_short` is set the final step before `end` is skipped.
    pub fn new(start: WorldPoint, end: WorldPoint, cell_size: f32, stop_short: bool) -> Self {
        let step = cell_size * 0.5;
        let length = start.distance(&end);
        let limit = if stop_short { length - step } else { length };

        let (remaining, step_vector) = if limit > 0.0 && length > 0.0 {
            let direction = (end - start) * (1.0 / length);
            ((limit / step).ceil() as usize, direction * step)
        } else {
            (0, WorldPoint::ZERO)
        };

        Self {
            start,
            step_vector,
            remaining,
            index: 0,
            inv_cell_size: 1.0 / cell_size,
            last_coord: None,
        }
    }
}

impl Iterator for RayWalk {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.remaining {
            let sample = self.start + self.step_vector * self.index as f32;
            self.index += 1;

            let coord = GridCoord::new(
                (sample.x * self.inv_cell_size).floor() as i32,
                (sample.y * self.inv_cell_size).floor() as i32,
            );

            // Only yield if this is a new cell
            if self.last_coord != Some(coord) {
                self.last_coord = Some(coord);
                return Some(coord);
            }
        }
        None
    }
}
