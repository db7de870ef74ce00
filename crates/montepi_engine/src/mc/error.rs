//! Error types for the Monte Carlo statistics layer.
//!
//! All invalid-argument conditions are detected before any sampling happens,
//! so a failed call never advances the generator stream.

use thiserror::Error;

use crate::rng::RngError;

/// Errors raised by simulation configuration and statistics operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Point count outside the valid range; each experiment needs at least
    /// one sampled point.
    #[error("invalid point count {0}: must be at least 1")]
    InvalidPointCount(usize),

    /// Too few experiments for the requested statistic. The unbiased sample
    /// variance needs at least two experiments; plain averaging needs one.
    #[error("insufficient experiments: got {got}, need at least {need}")]
    InsufficientExperiments {
        /// Number of experiments requested.
        got: usize,
        /// Minimum required by the statistic.
        need: usize,
    },

    /// Invalid parameter value with name and description.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Generator construction failed.
    #[error(transparent)]
    Rng(#[from] RngError),
}
