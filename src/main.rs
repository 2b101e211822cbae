//! vastu-sim - headless exploration run
//!
//! Drops the robot into a small furnished room, turns on autonomous
//! exploration and logs progress until no frontier remains.
//!
//! # Usage
//!
//! ```bash
//! # With default config
//! cargo run --release
//!
//! # With custom config file
//! cargo run --release -- --config sim.yaml --ticks 5000
//! ```

use std::io::Write;
use std::path::Path;

use vastu_sim::sim::walls::rectangle;
use vastu_sim::{DriveInput, SimConfig, Simulation, Wall};

/// Default tick budget
const DEFAULT_TICKS: u64 = 20_000;

/// Ticks between progress lines
const PROGRESS_INTERVAL: u64 = 500;

struct Args {
    config_path: Option<String>,
    ticks: u64,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args {
        config_path: None,
        ticks: DEFAULT_TICKS,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    result.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--ticks" | "-t" => {
                if let Some(ticks) = args.get(i + 1).and_then(|s| s.parse().ok()) {
                    result.ticks = ticks;
                    i += 1;
                } else {
                    eprintln!("--ticks needs a number");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    result
}

fn print_help() {
    println!("vastu-sim - headless robot exploration simulator");
    println!();
    println!("USAGE:");
    println!("    vastu-sim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>    YAML configuration file");
    println!("    -t, --ticks <N>        Maximum ticks to run (default {DEFAULT_TICKS})");
    println!("    -h, --help             Print help");
}

fn load_config(args: &Args) -> SimConfig {
    let Some(path) = &args.config_path else {
        return SimConfig::default();
    };
    match SimConfig::load(Path::new(path)) {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", path, e);
            std::process::exit(1);
        }
    }
}

/// Outer walls of the default 1000x800 world plus a few interior partitions.
fn demo_room() -> Vec<Wall> {
    let mut walls = rectangle(20.0, 20.0, 980.0, 780.0);
    walls.extend([
        // Partition with a doorway
        Wall::from_coords(400.0, 20.0, 400.0, 330.0),
        Wall::from_coords(400.0, 430.0, 400.0, 780.0),
        // Long bench
        Wall::from_coords(550.0, 200.0, 850.0, 200.0),
        // Island
        Wall::from_coords(650.0, 450.0, 750.0, 450.0),
        Wall::from_coords(750.0, 450.0, 750.0, 600.0),
        Wall::from_coords(750.0, 600.0, 650.0, 600.0),
        Wall::from_coords(650.0, 600.0, 650.0, 450.0),
        // Corner shelf
        Wall::from_coords(150.0, 600.0, 300.0, 680.0),
    ]);
    walls
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = parse_args();
    let mut config = load_config(&args);
    config.exploration.enabled = true;

    let mut sim = match Simulation::new(config, demo_room()) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("vastu-sim starting, up to {} ticks", args.ticks);

    let mut collisions = 0u64;
    let mut finished = false;
    for _ in 0..args.ticks {
        let report = sim.tick(DriveInput::default());
        if report.collided {
            collisions += 1;
        }
        if report.tick % PROGRESS_INTERVAL == 0 {
            let pose = sim.robot().true_pose();
            log::info!(
                "tick {:>6}: {:>5.1}% known, robot ({:.0},{:.0}), mode {}",
                report.tick,
                sim.grid().explored_fraction() * 100.0,
                pose.x,
                pose.y,
                report.mode
            );
        }
        if report.exploration_finished {
            finished = true;
            break;
        }
    }

    let counts = sim.grid().counts();
    log::info!(
        "{} after {} ticks: {} free, {} occupied, {} unknown cells, {} collisions",
        if finished { "Explored" } else { "Stopped" },
        sim.tick_count(),
        counts.free,
        counts.occupied,
        counts.unknown,
        collisions
    );
    log::info!("Final map:\n{}", sim.grid().to_ascii());
}
