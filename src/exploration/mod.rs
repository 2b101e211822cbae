//! Frontier-based exploration.
//!
//! A frontier cell is a Free cell 4-adjacent to an Unknown one. Connected
//! frontier cells form a [`Frontier`]; the best-scoring reachable one is the
//! next exploration target.
//!
//! ```rust,ignore
//! use vastu_sim::exploration::FrontierDetector;
//!
//! let detector = FrontierDetector::default();
//! match detector.find_best_frontier(grid.storage(), robot_position) {
//!     Some(target) => plan_to(target),
//!     None => println!("Exploration complete!"),
//! }
//! ```

mod config;
mod frontier;

pub use config::{ExplorationConfig, FrontierConfig};
pub use frontier::{Frontier, FrontierDetector};
