//! Robot motion state: drive mode, per-tick outcome and trail history.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::WorldPoint;

/// Who is driving the robot this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DriveMode {
    /// Driven by manual input
    Manual,
    /// Following a planned path
    Autonomous,
    /// No input and no path
    #[default]
    Idle,
}

impl std::fmt::Display for DriveMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriveMode::Manual => write!(f, "Manual"),
            DriveMode::Autonomous => write!(f, "Autonomous"),
            DriveMode::Idle => write!(f, "Idle"),
        }
    }
}

/// Manual drive input, each axis in [-1, 1].
///
/// Scaled by the robot's speed and turn limits. Any non-zero input
/// preempts autonomous driving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DriveInput {
    /// Forward (+) / reverse (-)
    pub forward: f32,
    /// Counter-clockwise (+) / clockwise (-)
    pub turn: f32,
}

impl DriveInput {
    /// Create a new drive input
    pub fn new(forward: f32, turn: f32) -> Self {
        Self { forward, turn }
    }

    /// Is any axis engaged?
    pub fn is_active(&self) -> bool {
        self.forward != 0.0 || self.turn != 0.0
    }
}

/// What happened during one motion update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotionOutcome {
    /// Translation was blocked by a wall
    pub collided: bool,
    /// The final waypoint was reached this tick
    pub path_completed: bool,
    /// Mode the tick was driven in
    pub mode: DriveMode,
}

/// Bounded history of true and believed positions.
#[derive(Clone, Debug)]
pub struct Trail {
    true_positions: VecDeque<WorldPoint>,
    believed_positions: VecDeque<WorldPoint>,
    capacity: usize,
}

impl Trail {
    /// Empty trail keeping at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            true_positions: VecDeque::with_capacity(capacity),
            believed_positions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a position pair, skipping it if neither position moved.
    pub fn record(&mut self, true_position: WorldPoint, believed_position: WorldPoint) {
        if self.capacity == 0 {
            return;
        }
        if self.true_positions.back() == Some(&true_position)
            && self.believed_positions.back() == Some(&believed_position)
        {
            return;
        }
        if self.true_positions.len() == self.capacity {
            self.true_positions.pop_front();
            self.believed_positions.pop_front();
        }
        self.true_positions.push_back(true_position);
        self.believed_positions.push_back(believed_position);
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.true_positions.len()
    }

    /// Is the trail empty?
    pub fn is_empty(&self) -> bool {
        self.true_positions.is_empty()
    }

    /// True positions, oldest first
    pub fn true_positions(&self) -> impl Iterator<Item = &WorldPoint> {
        self.true_positions.iter()
    }

    /// Believed positions, oldest first
    pub fn believed_positions(&self) -> impl Iterator<Item = &WorldPoint> {
        self.believed_positions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_skips_stationary_and_caps() {
        let mut trail = Trail::new(3);
        let p = WorldPoint::new(1.0, 1.0);
        trail.record(p, p);
        trail.record(p, p);
        assert_eq!(trail.len(), 1);

        for i in 2..6 {
            let q = WorldPoint::new(i as f32, 0.0);
            trail.record(q, q);
        }
        assert_eq!(trail.len(), 3);
        assert_eq!(trail.true_positions().next(), Some(&WorldPoint::new(3.0, 0.0)));
    }

    #[test]
    fn test_drive_input_activity() {
        assert!(!DriveInput::default().is_active());
        assert!(DriveInput::new(0.0, -1.0).is_active());
    }
}
