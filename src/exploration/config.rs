//! Configuration for frontier detection and exploration behavior.

use serde::{Deserialize, Serialize};

/// Configuration for frontier detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FrontierConfig {
    /// Minimum number of cells for a valid frontier cluster.
    /// Default: 3
    #[serde(default = "default_min_cluster_size")]
    pub min_cluster_size: usize,

    /// Distance penalty per cell in `size / (1 + distance * weight)`.
    /// Default: 0.1
    #[serde(default = "default_distance_weight")]
    pub distance_weight: f32,
}

fn default_min_cluster_size() -> usize {
    3
}
fn default_distance_weight() -> f32 {
    0.1
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            min_cluster_size: default_min_cluster_size(),
            distance_weight: default_distance_weight(),
        }
    }
}

/// Configuration for autonomous exploration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExplorationConfig {
    /// Start in exploration mode.
    /// Default: false
    #[serde(default)]
    pub enabled: bool,

    /// Ticks between frontier searches while idle.
    /// Default: 30
    #[serde(default = "default_cooldown_ticks")]
    pub cooldown_ticks: u32,

    /// Write scans into the grid from the believed pose instead of the true one.
    /// Default: false
    #[serde(default)]
    pub map_from_believed_pose: bool,
}

fn default_cooldown_ticks() -> u32 {
    30
}

impl Default for ExplorationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cooldown_ticks: default_cooldown_ticks(),
            map_from_believed_pose: false,
        }
    }
}
