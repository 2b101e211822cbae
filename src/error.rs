//! Error types for VastuSim

use thiserror::Error;

/// VastuSim error type
#[derive(Error, Debug)]
pub enum SimError {
    /// Reading a configuration file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed or holds unusable values
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for SimError {
    fn from(e: serde_yaml::Error) -> Self {
        SimError::Config(e.to_string())
    }
}

/// Result alias for fallible VastuSim operations
pub type Result<T> = std::result::Result<T, SimError>;
