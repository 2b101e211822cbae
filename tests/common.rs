//! Test utilities for VastuSim scenarios.
//!
//! Helpers for building worlds, noise-free sensors and deterministic configs.

#![allow(dead_code)]

use vastu_sim::sensor::{RangeSensor, SensorConfig};
use vastu_sim::sim::walls::rectangle;
use vastu_sim::{BeliefCell, BeliefGrid, GridCoord, SimConfig, Wall};

/// Single straight wall from (300,100) to (300,500).
pub fn single_wall() -> Vec<Wall> {
    vec![Wall::from_coords(300.0, 100.0, 300.0, 500.0)]
}

/// Closed room inside the default 1000x800 world.
pub fn closed_room() -> Vec<Wall> {
    rectangle(20.0, 20.0, 480.0, 380.0)
}

/// Noise-free sensor.
pub fn noiseless_sensor(ray_count: usize, max_range: f32) -> RangeSensor {
    RangeSensor::new(SensorConfig::noiseless(ray_count, max_range))
}

/// Default config with noise and drift seeded so runs are reproducible.
pub fn seeded_config(seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.sensor.seed = seed;
    config.robot.seed = seed + 1;
    config
}

/// Default config without sensor noise.
pub fn quiet_config() -> SimConfig {
    let mut config = seeded_config(17);
    config.sensor.noise_percent = 0.0;
    config
}

/// Coordinates of every occupied cell.
pub fn occupied_cells(grid: &BeliefGrid) -> Vec<GridCoord> {
    let storage = grid.storage();
    storage
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == BeliefCell::Occupied)
        .map(|(idx, _)| storage.index_to_coord(idx))
        .collect()
}

/// Octile distance between two cells (8-connected lower bound).
pub fn octile_distance(a: GridCoord, b: GridCoord) -> f32 {
    let dx = (a.x - b.x).abs() as f32;
    let dy = (a.y - b.y).abs() as f32;
    let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
    min * std::f32::consts::SQRT_2 + (max - min)
}
