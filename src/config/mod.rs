//! Unified configuration loading for VastuSim.
//!
//! All settings live in one YAML file; every field has a default, so a
//! partial file (or none at all) works.
//!
//! ```rust,ignore
//! use vastu_sim::config::SimConfig;
//!
//! let config = SimConfig::load(Path::new("configs/sim.yaml"))?;
//! let sim = Simulation::new(config, walls)?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | `grid` | World size and cell size |
//! | `sensor` | Ray count, range, noise |
//! | `robot` | Geometry, speed limits, drift, start pose |
//! | `planner` | Proximity penalty |
//! | `frontier` | Cluster size and distance weighting |
//! | `exploration` | Cooldown and mapping pose |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::exploration::{ExplorationConfig, FrontierConfig};
use crate::grid::GridConfig;
use crate::pathfinding::PlannerConfig;
use crate::robot::RobotConfig;
use crate::sensor::SensorConfig;

/// Full simulation configuration loaded from YAML
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridConfig,

    /// Range sensor settings
    #[serde(default)]
    pub sensor: SensorConfig,

    /// Robot settings
    #[serde(default)]
    pub robot: RobotConfig,

    /// Path planner settings
    #[serde(default)]
    pub planner: PlannerConfig,

    /// Frontier detection settings
    #[serde(default)]
    pub frontier: FrontierConfig,

    /// Exploration settings
    #[serde(default)]
    pub exploration: ExplorationConfig,
}

impl SimConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if !(self.grid.cell_size > 0.0) {
            return Err(SimError::Config(format!(
                "grid.cell_size must be positive, got {}",
                self.grid.cell_size
            )));
        }
        if !(self.grid.world_width > 0.0 && self.grid.world_height > 0.0) {
            return Err(SimError::Config(format!(
                "grid world size must be positive, got {}x{}",
                self.grid.world_width, self.grid.world_height
            )));
        }
        if !(self.sensor.max_range > 0.0) {
            return Err(SimError::Config(format!(
                "sensor.max_range must be positive, got {}",
                self.sensor.max_range
            )));
        }
        if !(self.robot.radius >= 0.0) {
            return Err(SimError::Config(format!(
                "robot.radius must not be negative, got {}",
                self.robot.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_gives_defaults() {
        let config = SimConfig::from_yaml("{}").expect("defaults");
        assert_eq!(config.grid.cols(), 100);
        assert_eq!(config.grid.rows(), 80);
        assert_eq!(config.planner.proximity_radius, 2);
        assert_eq!(config.frontier.min_cluster_size, 3);
        assert_eq!(config.exploration.cooldown_ticks, 30);
        assert!(!config.exploration.map_from_believed_pose);
        assert_eq!(config.robot.arrival_radius, 15.0);
    }

    #[test]
    fn test_partial_sections() {
        let yaml = r#"
sensor:
  ray_count: 360
  noise_percent: 0.0
robot:
  drift: 20.0
  start: { x: 50.0, y: 60.0, theta: 1.0 }
exploration:
  enabled: true
  cooldown_ticks: 10
"#;
        let config = SimConfig::from_yaml(yaml).expect("valid yaml");
        assert_eq!(config.sensor.ray_count, 360);
        assert_eq!(config.sensor.max_range, 400.0);
        assert_eq!(config.robot.drift, 20.0);
        assert_eq!(config.robot.start.x, 50.0);
        assert_eq!(config.robot.max_speed, 3.0);
        assert!(config.exploration.enabled);
        assert_eq!(config.exploration.cooldown_ticks, 10);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SimConfig::from_yaml("grid:\n  cell_size: 0.0\n").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));

        let err = SimConfig::from_yaml("sensor: [1, 2]").unwrap_err();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = SimConfig::default();
        let yaml = config.to_yaml().expect("serialize");
        let parsed = SimConfig::from_yaml(&yaml).expect("parse");
        assert_eq!(parsed.sensor.ray_count, config.sensor.ray_count);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SimConfig::load(Path::new("/nonexistent/vastu-sim.yaml")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
