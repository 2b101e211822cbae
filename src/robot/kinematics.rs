//! Robot kinematics with collision freeze and odometry drift.
//!
//! Each tick:
//!
//! ```text
//! manual input? ──yes──► clear path, scale input ──┐
//!      │ no                                        │
//! path set? ──yes──► advance waypoints, steer ─────┤
//!      │ no                                        │
//!    stop ─────────────────────────────────────────┤
//!                                                  ▼
//!            heading += turn; propose position along new heading
//!                                                  │
//!            any wall within radius? ──yes──► keep position (rotate only)
//!                                                  │
//!            believed pose: copy (drift = 0) or noisy replay
//! ```

use log::debug;

use crate::core::{Pose2D, Wall, WorldPoint, normalize_angle};
use crate::sensor::NoiseGenerator;

use super::config::{MAX_DRIFT, MAX_SPEED_MULTIPLIER, RobotConfig};
use super::state::{DriveInput, DriveMode, MotionOutcome, Trail};
use super::steering::{DriveCommand, Steering};

/// Simulated robot owning its true and believed poses.
#[derive(Clone, Debug)]
pub struct Robot {
    config: RobotConfig,
    true_pose: Pose2D,
    believed_pose: Pose2D,
    path: Vec<WorldPoint>,
    waypoint_idx: usize,
    mode: DriveMode,
    /// Last command applied to the true pose
    command: DriveCommand,
    /// Steer from the believed pose instead of the true one
    steer_by_belief: bool,
    trail: Trail,
}

impl Robot {
    /// Create a robot at `config.start`.
    pub fn new(mut config: RobotConfig) -> Self {
        config.speed_multiplier = config.speed_multiplier.clamp(0.0, MAX_SPEED_MULTIPLIER);
        config.drift = config.drift.clamp(0.0, MAX_DRIFT);

        let start = config.start.normalized();
        let mut trail = Trail::new(config.trail_capacity);
        trail.record(start.position(), start.position());

        Self {
            config,
            true_pose: start,
            believed_pose: start,
            path: Vec::new(),
            waypoint_idx: 0,
            mode: DriveMode::Idle,
            command: DriveCommand::stop(),
            steer_by_belief: false,
            trail,
        }
    }

    // === Accessors ===

    /// Current configuration
    pub fn config(&self) -> &RobotConfig {
        &self.config
    }

    /// Ground-truth pose
    #[inline]
    pub fn true_pose(&self) -> Pose2D {
        self.true_pose
    }

    /// Odometry estimate
    #[inline]
    pub fn believed_pose(&self) -> Pose2D {
        self.believed_pose
    }

    /// Pose used for steering and planning
    pub fn navigation_pose(&self) -> Pose2D {
        if self.steer_by_belief {
            self.believed_pose
        } else {
            self.true_pose
        }
    }

    /// Collision radius
    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    /// Active path (empty when none)
    pub fn path(&self) -> &[WorldPoint] {
        &self.path
    }

    /// Waypoint being driven to, if a path is active
    pub fn current_waypoint(&self) -> Option<WorldPoint> {
        self.path.get(self.waypoint_idx).copied()
    }

    /// Is a path active?
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Mode of the last update
    pub fn mode(&self) -> DriveMode {
        self.mode
    }

    /// Last command applied (forward, turn)
    pub fn command(&self) -> DriveCommand {
        self.command
    }

    /// Position history
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    // === Commands ===

    /// Replace the active path. An empty path clears it.
    pub fn set_path(&mut self, path: Vec<WorldPoint>) {
        self.path = path;
        self.waypoint_idx = 0;
    }

    /// Drop the active path and stop.
    pub fn clear_path(&mut self) {
        self.path.clear();
        self.waypoint_idx = 0;
        self.command = DriveCommand::stop();
    }

    /// Set the speed multiplier (clamped to [0, 10]).
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        self.config.speed_multiplier = multiplier.clamp(0.0, MAX_SPEED_MULTIPLIER);
    }

    /// Set drift magnitude in percent (clamped to [0, 100]).
    pub fn set_drift(&mut self, drift: f32) {
        self.config.drift = drift.clamp(0.0, MAX_DRIFT);
    }

    /// Steer from the believed pose instead of the true pose.
    pub fn set_steer_by_belief(&mut self, enabled: bool) {
        self.steer_by_belief = enabled;
    }

    // === Update ===

    /// Advance one tick.
    ///
    /// Active manual `input` preempts and clears any path. Walls block
    /// translation but never rotation.
    pub fn update(
        &mut self,
        input: DriveInput,
        walls: &[Wall],
        noise: &mut NoiseGenerator,
    ) -> MotionOutcome {
        let mut outcome = MotionOutcome::default();

        let command = if input.is_active() {
            if self.has_path() {
                debug!("[Robot] Manual input, dropping path");
                self.path.clear();
                self.waypoint_idx = 0;
            }
            self.mode = DriveMode::Manual;
            DriveCommand::new(
                input.forward.clamp(-1.0, 1.0) * self.config.effective_max_speed(),
                input.turn.clamp(-1.0, 1.0) * self.config.max_turn_rate,
            )
        } else if self.has_path() {
            self.mode = DriveMode::Autonomous;
            match self.follow_path() {
                Some(command) => command,
                None => {
                    outcome.path_completed = true;
                    DriveCommand::stop()
                }
            }
        } else {
            self.mode = DriveMode::Idle;
            DriveCommand::stop()
        };

        outcome.mode = self.mode;
        outcome.collided = self.integrate(command, walls);
        self.drift_belief(command, outcome.collided, noise);
        self.command = command;

        self.trail
            .record(self.true_pose.position(), self.believed_pose.position());

        outcome
    }

    /// Advance past reached waypoints and steer toward the next one.
    ///
    /// Returns `None` once the final waypoint is reached.
    fn follow_path(&mut self) -> Option<DriveCommand> {
        let pose = self.navigation_pose();
        let position = pose.position();

        while let Some(waypoint) = self.current_waypoint() {
            if position.distance(&waypoint) >= self.config.arrival_radius {
                return Some(Steering::new(&self.config).steer(pose, waypoint));
            }
            self.waypoint_idx += 1;
        }

        debug!("[Robot] Path complete at ({:.1},{:.1})", position.x, position.y);
        self.clear_path();
        None
    }

    /// Apply `command` to the true pose. Returns true if translation was blocked.
    fn integrate(&mut self, command: DriveCommand, walls: &[Wall]) -> bool {
        let theta = normalize_angle(self.true_pose.theta + command.turn);
        self.true_pose.theta = theta;

        if command.forward == 0.0 {
            return false;
        }

        let proposed = self.true_pose.position().point_at(theta, command.forward);
        let radius = self.config.radius;
        if walls.iter().any(|wall| wall.blocks_circle(proposed, radius)) {
            return true;
        }

        self.true_pose.x = proposed.x;
        self.true_pose.y = proposed.y;
        false
    }

    /// Replay `command` on the believed pose with odometry noise.
    fn drift_belief(&mut self, command: DriveCommand, collided: bool, noise: &mut NoiseGenerator) {
        let scale = self.config.drift_scale();
        if scale <= 0.0 {
            self.believed_pose = self.true_pose;
            return;
        }
        if command.is_stop() {
            return;
        }

        let turn = command.turn + noise.symmetric(self.config.turn_noise * scale);
        let theta = normalize_angle(self.believed_pose.theta + turn);
        self.believed_pose.theta = theta;

        if collided || command.forward == 0.0 {
            return;
        }

        let forward = command.forward + noise.symmetric(self.config.forward_noise * scale);
        let direction = theta + noise.symmetric(self.config.heading_jitter * scale);
        let moved = self.believed_pose.position().point_at(direction, forward);
        self.believed_pose.x = moved.x;
        self.believed_pose.y = moved.y;
    }
}
