//! CLI error handling

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the CLI driver.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Error from the estimation engine.
    #[error(transparent)]
    Simulation(#[from] montepi_engine::SimulationError),

    /// Error from generator construction.
    #[error(transparent)]
    Rng(#[from] montepi_engine::RngError),

    /// JSON serialisation failed.
    #[error("serialisation failed: {0}")]
    Serialisation(#[from] serde_json::Error),
}
