//! Wall segments of the simulated environment.

use serde::{Deserialize, Serialize};

use super::geometry::{circle_intersects_segment, segment_crossing};
use super::point::WorldPoint;

/// A directed wall segment in world coordinates.
///
/// Walls are immutable for the duration of a tick; the set can change
/// between ticks (moving obstacles are just walls that differ per tick).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    /// Start point
    pub start: WorldPoint,
    /// End point
    pub end: WorldPoint,
}

impl Wall {
    /// Create a wall from two points
    #[inline]
    pub fn new(start: WorldPoint, end: WorldPoint) -> Self {
        Self { start, end }
    }

    /// Create a wall from raw coordinates
    #[inline]
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(WorldPoint::new(x1, y1), WorldPoint::new(x2, y2))
    }

    /// Where does segment `from→to` cross this wall?
    ///
    /// Returns the fraction along `from→to` (0 at `from`, 1 at `to`).
    #[inline]
    pub fn crossing(&self, from: WorldPoint, to: WorldPoint) -> Option<f32> {
        segment_crossing(from, to, self.start, self.end).map(|(t, _)| t)
    }

    /// Does a circle of `radius` at `center` overlap this wall?
    #[inline]
    pub fn blocks_circle(&self, center: WorldPoint, radius: f32) -> bool {
        circle_intersects_segment(center, radius, self.start, self.end)
    }
}
