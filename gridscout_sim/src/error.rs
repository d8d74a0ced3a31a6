//! Error types for the simulation harness.

use gridscout_env::GridError;
use thiserror::Error;

/// Errors surfaced by the simulator binary.
#[derive(Debug, Error)]
pub enum SimError {
    /// Bad grid, agent or world parameters
    #[error("Configuration error: {0}")]
    Config(#[from] GridError),

    /// Writing an export failed
    #[error("Export error: {0}")]
    Export(#[from] std::io::Error),

    /// Unknown scenario name or unsupported flag combination
    #[error("Usage error: {0}")]
    Usage(String),
}

impl SimError {
    /// Creates a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

pub type SimResult<T> = Result<T, SimError>;
