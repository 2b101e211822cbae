//! Sense → map → plan → act control loop.
//!
//! ```text
//!   input ──► Robot::update ──► RangeSensor::scan ──► BeliefGrid::update
//!                                                            │
//!             exploring, idle and cooled down? ◄─────────────┘
//!                     │ yes
//!                     ▼
//!   FrontierDetector::detect ──► PathPlanner (best reachable) ──► Robot::set_path
//! ```
//!
//! Everything runs synchronously inside [`Simulation::tick`]. The grid has
//! one write per tick (the scan) and all planning reads happen after it.

mod report;
pub mod walls;

pub use report::TickReport;
pub use walls::WallSource;

use log::{debug, info, warn};

use crate::config::SimConfig;
use crate::core::{Pose2D, WorldPoint};
use crate::error::Result;
use crate::exploration::{ExplorationConfig, Frontier, FrontierDetector};
use crate::grid::{BeliefGrid, ObserveResult};
use crate::pathfinding::{PathPlanner, PathResult, PlannerConfig};
use crate::robot::{DriveInput, Robot};
use crate::sensor::{NoiseGenerator, RangeHit, RangeSensor};

/// Robot, sensor and belief grid driven tick by tick against a wall source.
pub struct Simulation<W: WallSource> {
    walls: W,
    robot: Robot,
    sensor: RangeSensor,
    grid: BeliefGrid,
    planner_config: PlannerConfig,
    frontiers: FrontierDetector,
    exploration: ExplorationConfig,
    /// Odometry noise for the believed pose
    odometry_noise: NoiseGenerator,
    exploring: bool,
    /// Ticks left before the next frontier search
    cooldown: u32,
    frontier_target: Option<WorldPoint>,
    last_scan: Vec<RangeHit>,
    tick: u64,
}

impl<W: WallSource> Simulation<W> {
    /// Build a simulation from a validated configuration.
    pub fn new(config: SimConfig, walls: W) -> Result<Self> {
        config.validate()?;

        let mut robot = Robot::new(config.robot.clone());
        robot.set_steer_by_belief(config.exploration.map_from_believed_pose);

        let grid = BeliefGrid::new(config.grid.clone(), config.robot.radius);
        info!(
            "[Sim] {}x{} grid, {} rays, robot at ({:.0},{:.0})",
            grid.cols(),
            grid.rows(),
            config.sensor.ray_count,
            config.robot.start.x,
            config.robot.start.y
        );

        Ok(Self {
            walls,
            robot,
            sensor: RangeSensor::new(config.sensor),
            grid,
            planner_config: config.planner,
            frontiers: FrontierDetector::new(config.frontier),
            exploring: config.exploration.enabled,
            exploration: config.exploration,
            odometry_noise: NoiseGenerator::new(config.robot.seed),
            cooldown: 0,
            frontier_target: None,
            last_scan: Vec::new(),
            tick: 0,
        })
    }

    // === Tick ===

    /// Run one control step.
    pub fn tick(&mut self, input: DriveInput) -> TickReport {
        let mut report = TickReport::default();
        let walls = self.walls.walls();

        // Manual input preempts exploration
        if input.is_active() && self.exploring {
            debug!("[Sim] Manual input, exploration stopped");
            self.exploring = false;
            self.frontier_target = None;
        }

        // Act
        let outcome = self.robot.update(input, &walls, &mut self.odometry_noise);
        report.collided = outcome.collided;
        report.mode = outcome.mode;
        report.path_completed = outcome.path_completed;
        if outcome.path_completed {
            self.frontier_target = None;
        }

        // Sense
        let true_pose = self.robot.true_pose();
        self.last_scan = self.sensor.scan(true_pose, &walls);
        drop(walls);

        // Map
        report.observe = self.map_scan(true_pose);

        // Plan
        self.cooldown = self.cooldown.saturating_sub(1);
        if self.exploring && !self.robot.has_path() && self.cooldown == 0 {
            self.cooldown = self.exploration.cooldown_ticks;
            match self.select_frontier() {
                ExploreStep::Selected => report.frontier_selected = true,
                ExploreStep::Finished => report.exploration_finished = true,
                ExploreStep::Unreachable => {}
            }
        }

        self.tick += 1;
        report.tick = self.tick;
        report
    }

    /// Write the last scan into the grid from the configured mapping pose.
    fn map_scan(&mut self, true_pose: Pose2D) -> ObserveResult {
        if !self.exploration.map_from_believed_pose {
            return self.grid.update(true_pose, &self.last_scan);
        }

        let believed = self.robot.believed_pose();
        let hits = reproject(&self.last_scan, true_pose, believed);
        self.grid.update(believed, &hits)
    }

    /// Pick the best reachable frontier and start driving to it.
    fn select_frontier(&mut self) -> ExploreStep {
        let position = self.robot.navigation_pose().position();
        let frontiers = self.frontiers.detect(self.grid.storage(), position);

        if frontiers.is_empty() {
            info!(
                "[Explore] Exploration complete after {} ticks, {:.1}% of grid known",
                self.tick,
                self.grid.explored_fraction() * 100.0
            );
            self.exploring = false;
            self.frontier_target = None;
            return ExploreStep::Finished;
        }

        let planner = PathPlanner::new(self.grid.storage(), self.planner_config.clone());
        let reachable = frontiers.iter().find_map(|frontier: &Frontier| {
            let path = planner.find_path(position, frontier.world_centroid);
            (!path.is_empty()).then_some((frontier, path))
        });

        match reachable {
            Some((frontier, path)) => {
                info!(
                    "[Explore] Frontier of {} cells at ({:.0},{:.0}), {} waypoints",
                    frontier.size,
                    frontier.world_centroid.x,
                    frontier.world_centroid.y,
                    path.len()
                );
                self.frontier_target = Some(frontier.world_centroid);
                self.robot.set_path(path);
                ExploreStep::Selected
            }
            None => {
                warn!(
                    "[Explore] All {} frontiers unreachable, retrying in {} ticks",
                    frontiers.len(),
                    self.exploration.cooldown_ticks
                );
                ExploreStep::Unreachable
            }
        }
    }

    // === Commands ===

    /// Plan to `goal` and follow it. Returns false (state untouched) if no path exists.
    pub fn navigate_to(&mut self, goal: WorldPoint) -> bool {
        let result = self.plan_path(goal);
        if !result.success() {
            debug!(
                "[Sim] No path to ({:.0},{:.0}): {:?}",
                goal.x, goal.y, result.failure_reason
            );
            return false;
        }
        self.robot.set_path(result.path_world);
        true
    }

    /// Plan from the robot to `goal` without acting on it.
    pub fn plan_path(&self, goal: WorldPoint) -> PathResult {
        let start = self.robot.navigation_pose().position();
        PathPlanner::new(self.grid.storage(), self.planner_config.clone()).plan(start, goal)
    }

    /// Stop following the current path.
    pub fn clear_path(&mut self) {
        self.robot.clear_path();
        self.frontier_target = None;
    }

    /// Forget the belief map.
    pub fn reset_map(&mut self) {
        self.grid.clear();
    }

    /// The wall set changed: the map, path and frontier target are stale.
    pub fn invalidate_walls(&mut self) {
        self.grid.clear();
        self.clear_path();
        self.cooldown = 0;
    }

    /// Turn autonomous exploration on or off.
    ///
    /// Turning it on searches for a frontier on the next tick; turning it off
    /// drops the active path.
    pub fn set_exploring(&mut self, exploring: bool) {
        if exploring == self.exploring {
            return;
        }
        self.exploring = exploring;
        if exploring {
            self.cooldown = 0;
        } else {
            self.clear_path();
        }
        debug!("[Sim] Exploration {}", if exploring { "on" } else { "off" });
    }

    // === Tuning ===

    /// Rays per scan (clamped to [1, 3600]).
    pub fn set_ray_count(&mut self, ray_count: usize) {
        self.sensor.set_ray_count(ray_count);
    }

    /// Sensor noise percent (clamped to [0, 100]).
    pub fn set_noise_percent(&mut self, noise_percent: f32) {
        self.sensor.set_noise_percent(noise_percent);
    }

    /// Robot speed multiplier (clamped to [0, 10]).
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.robot.set_speed_multiplier(multiplier);
    }

    /// Odometry drift percent (clamped to [0, 100]).
    pub fn set_drift(&mut self, drift: f32) {
        self.robot.set_drift(drift);
    }

    // === Accessors ===

    /// The robot
    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// The belief grid
    pub fn grid(&self) -> &BeliefGrid {
        &self.grid
    }

    /// The range sensor
    pub fn sensor(&self) -> &RangeSensor {
        &self.sensor
    }

    /// Hits from the most recent scan
    pub fn last_scan(&self) -> &[RangeHit] {
        &self.last_scan
    }

    /// Frontier currently being driven to
    pub fn frontier_target(&self) -> Option<WorldPoint> {
        self.frontier_target
    }

    /// Active path
    pub fn path(&self) -> &[WorldPoint] {
        self.robot.path()
    }

    /// Is autonomous exploration on?
    pub fn is_exploring(&self) -> bool {
        self.exploring
    }

    /// Completed ticks
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Wall source
    pub fn walls(&self) -> &W {
        &self.walls
    }

    /// Mutable wall source. Call [`Self::invalidate_walls`] if the old map no longer applies.
    pub fn walls_mut(&mut self) -> &mut W {
        &mut self.walls
    }
}

/// Outcome of one frontier search
enum ExploreStep {
    Selected,
    Finished,
    Unreachable,
}

/// Re-express hits taken at `from` as if taken at `onto`: same bearing
/// relative to the heading, same distance.
fn reproject(hits: &[RangeHit], from: Pose2D, onto: Pose2D) -> Vec<RangeHit> {
    let origin = onto.position();
    let rotation = onto.theta - from.theta;
    hits.iter()
        .map(|h| {
            let angle = h.angle + rotation;
            if h.hit {
                RangeHit::hit(origin, angle, h.distance)
            } else {
                RangeHit::miss(origin, angle, h.distance)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Wall;
    use crate::grid::BeliefCell;
    use crate::robot::DriveMode;
    use approx::assert_relative_eq;

    fn quiet_config() -> SimConfig {
        let mut config = SimConfig::default();
        config.sensor.noise_percent = 0.0;
        config.sensor.ray_count = 90;
        config.robot.seed = 1;
        config
    }

    fn room() -> Vec<Wall> {
        walls::rectangle(20.0, 20.0, 480.0, 380.0)
    }

    #[test]
    fn test_tick_maps_surroundings() {
        let mut sim = Simulation::new(quiet_config(), room()).expect("valid config");
        let report = sim.tick(DriveInput::default());

        assert_eq!(report.tick, 1);
        assert_eq!(report.mode, DriveMode::Idle);
        assert!(report.observe.cells_free > 0);
        assert!(report.observe.cells_occupied > 0);
        assert_eq!(sim.last_scan().len(), 90);
        assert_eq!(sim.grid().cell_at_world(100.0, 300.0), Some(BeliefCell::Free));
    }

    #[test]
    fn test_navigate_to_unreachable_keeps_state() {
        let mut sim = Simulation::new(quiet_config(), room()).expect("valid config");
        sim.tick(DriveInput::default());
        assert!(sim.navigate_to(WorldPoint::new(200.0, 300.0)));
        let path = sim.path().to_vec();

        // Out of the grid
        assert!(!sim.navigate_to(WorldPoint::new(5000.0, 300.0)));
        assert_eq!(sim.path(), path.as_slice());
    }

    #[test]
    fn test_manual_input_stops_exploration() {
        let mut config = quiet_config();
        config.exploration.enabled = true;
        let mut sim = Simulation::new(config, room()).expect("valid config");

        let report = sim.tick(DriveInput::default());
        assert!(report.frontier_selected);
        assert!(sim.frontier_target().is_some());

        let report = sim.tick(DriveInput::new(0.0, 1.0));
        assert_eq!(report.mode, DriveMode::Manual);
        assert!(!sim.is_exploring());
        assert!(sim.path().is_empty());
        assert!(sim.frontier_target().is_none());
    }

    #[test]
    fn test_invalidate_walls_clears_everything() {
        let mut sim = Simulation::new(quiet_config(), room()).expect("valid config");
        sim.tick(DriveInput::default());
        sim.navigate_to(WorldPoint::new(200.0, 300.0));

        sim.walls_mut().push(Wall::from_coords(150.0, 250.0, 150.0, 350.0));
        sim.invalidate_walls();

        assert!(sim.path().is_empty());
        assert_eq!(sim.grid().counts().known(), 0);
    }

    #[test]
    fn test_reset_map_forgets_belief_and_remaps() {
        let mut sim = Simulation::new(quiet_config(), room()).expect("valid config");
        sim.tick(DriveInput::default());
        assert!(sim.grid().counts().occupied > 0);
        assert!(sim.navigate_to(WorldPoint::new(200.0, 300.0)));

        sim.reset_map();
        let counts = sim.grid().counts();
        assert_eq!(counts.known(), 0);
        assert_eq!(counts.unknown, counts.total());
        // The active path is left alone
        assert!(!sim.path().is_empty());

        let report = sim.tick(DriveInput::default());
        assert!(report.observe.cells_occupied > 0);
        assert_eq!(sim.grid().cell_at_world(100.0, 300.0), Some(BeliefCell::Free));
    }

    #[test]
    fn test_cooldown_debounces_search() {
        let mut config = quiet_config();
        config.exploration.enabled = true;
        config.exploration.cooldown_ticks = 5;
        let mut sim = Simulation::new(config, room()).expect("valid config");

        let searches: Vec<bool> = (0..11)
            .map(|_| {
                let report = sim.tick(DriveInput::default());
                // Keep the robot idle so only the cooldown gates the search
                sim.clear_path();
                report.frontier_selected
            })
            .collect();

        let expected = [true, false, false, false, false, true, false, false, false, false, true];
        assert_eq!(searches, expected);
        assert!(sim.is_exploring());
    }

    #[test]
    fn test_reproject_rotates_about_new_origin() {
        let from = Pose2D::new(0.0, 0.0, 0.0);
        let onto = Pose2D::new(10.0, 0.0, 0.5);
        let hits = [RangeHit::hit(from.position(), 0.0, 100.0)];

        let moved = reproject(&hits, from, onto);
        assert_relative_eq!(moved[0].angle, 0.5);
        assert_relative_eq!(moved[0].point.x, 10.0 + 100.0 * 0.5f32.cos(), epsilon = 1e-4);
        assert!(moved[0].hit);
    }

    #[test]
    fn test_tuning_forwards_to_components() {
        let mut sim = Simulation::new(quiet_config(), room()).expect("valid config");
        sim.set_ray_count(10_000);
        sim.set_noise_percent(-1.0);
        sim.set_speed_multiplier(2.0);
        sim.set_drift(150.0);

        assert_eq!(sim.sensor().config().ray_count, 3600);
        assert_eq!(sim.sensor().config().noise_percent, 0.0);
        assert_eq!(sim.robot().config().speed_multiplier, 2.0);
        assert_eq!(sim.robot().config().drift, 100.0);
    }
}
