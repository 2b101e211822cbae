//! Belief state of a single grid cell.

use serde::{Deserialize, Serialize};

/// Tri-state belief about one cell.
///
/// Transitions are monotonic between resets:
///
/// ```text
/// Unknown ──► Free ──► Occupied
///    └─────────────────────┘
/// ```
///
/// `Occupied` is sticky and `Unknown` is only ever written by a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(i8)]
pub enum BeliefCell {
    /// Never observed
    #[default]
    Unknown = 0,
    /// Observed as free space (a ray passed through)
    Free = 1,
    /// Observed as an obstacle (a ray stopped here)
    Occupied = -1,
}

impl BeliefCell {
    /// Is this cell believed to be an obstacle?
    #[inline]
    pub fn is_occupied(self) -> bool {
        self == BeliefCell::Occupied
    }

    /// Would observing `observed` change this cell?
    #[inline]
    pub fn accepts(self, observed: BeliefCell) -> bool {
        matches!(
            (self, observed),
            (BeliefCell::Unknown, BeliefCell::Free)
                | (BeliefCell::Unknown, BeliefCell::Occupied)
                | (BeliefCell::Free, BeliefCell::Occupied)
        )
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            BeliefCell::Unknown => '?',
            BeliefCell::Free => '.',
            BeliefCell::Occupied => '#',
        }
    }

    /// Parse the debugging character (anything unrecognised is Unknown)
    pub fn from_char(c: char) -> Self {
        match c {
            '.' => BeliefCell::Free,
            '#' => BeliefCell::Occupied,
            _ => BeliefCell::Unknown,
        }
    }
}
