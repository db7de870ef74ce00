//! # Monte Carlo Statistics Layer
//!
//! Converts generator output into π estimates and aggregates them with
//! confidence statistics. Built strictly on top of [`crate::rng`]; the
//! generator layer has no dependency back on this module.
//!
//! ## Module Structure
//!
//! - [`estimate_pi`] and friends: single-trial estimation, error measures,
//!   multi-trial means and the Student-t confidence radius, all
//!   parameterised by an injected generator
//! - [`SimulationConfig`] / [`PiSimulation`]: validated configuration and a
//!   runner that owns its generator stream
//! - [`mean_with_samples_parallel`] / [`mean_and_confidence_radius_parallel`]:
//!   rayon fan-out over independent per-experiment streams
//!
//! ## Usage Example
//!
//! ```rust
//! use montepi_engine::mc::{estimate_pi, mean_and_confidence_radius};
//! use montepi_engine::rng::Mt19937;
//!
//! let mut rng = Mt19937::from_seed(42);
//! let single = estimate_pi(&mut rng, 10_000).unwrap();
//! assert!((single - std::f64::consts::PI).abs() < 0.1);
//!
//! let summary = mean_and_confidence_radius(&mut rng, 1_000, 40).unwrap();
//! let (lower, upper) = summary.interval();
//! assert!(lower < upper);
//! ```

mod config;
mod error;
mod estimator;
mod parallel;
mod simulation;
mod student_t;

// Public re-exports
pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use error::SimulationError;
pub use estimator::{
    absolute_error, estimate_pi, mean_and_confidence_radius, mean_over_experiments,
    mean_with_samples, relative_error, ConfidenceSummary, MeanSamples,
};
pub use parallel::{mean_and_confidence_radius_parallel, mean_with_samples_parallel};
pub use simulation::PiSimulation;
pub use student_t::critical_value;
