//! Per-tick summary returned by the simulation.

use serde::{Deserialize, Serialize};

use crate::grid::ObserveResult;
use crate::robot::DriveMode;

/// What happened during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick number (1-based count of completed ticks)
    pub tick: u64,
    /// Robot translation was blocked by a wall
    pub collided: bool,
    /// Drive mode during the tick
    pub mode: DriveMode,
    /// The robot reached the end of its path
    pub path_completed: bool,
    /// Exploration stopped because no frontier remains
    pub exploration_finished: bool,
    /// A new path was planned toward a frontier this tick
    pub frontier_selected: bool,
    /// Grid changes from this tick's scan
    pub observe: ObserveResult,
}
