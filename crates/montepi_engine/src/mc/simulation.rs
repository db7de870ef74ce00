//! Simulation runner owning a configuration and its generator.
//!
//! [`PiSimulation`] binds a validated [`SimulationConfig`] to a private
//! [`Mt19937`] stream, so repeated runs draw from one continuous sequence
//! and `reset` replays it from the start.

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::estimator::{self, ConfidenceSummary, MeanSamples};
use crate::rng::Mt19937;

/// Monte Carlo π simulation runner.
///
/// Owns its generator, so two runners never interfere; identically
/// configured runners produce identical results.
///
/// # Examples
///
/// ```rust
/// use montepi_engine::mc::{PiSimulation, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_points(1_000)
///     .n_experiments(40)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut simulation = PiSimulation::new(config).unwrap();
/// let summary = simulation.confidence().unwrap();
/// let (lower, upper) = summary.interval();
/// assert!(lower < upper);
/// ```
pub struct PiSimulation {
    config: SimulationConfig,
    rng: Mt19937,
}

impl PiSimulation {
    /// Creates a new simulation with the given configuration.
    ///
    /// When the configuration carries no seed, the generator relies on the
    /// documented default auto-seed.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if the configuration is invalid.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let rng = Self::generator_for(config.seed());
        Ok(Self { config, rng })
    }

    /// Creates a new simulation with a specific seed, overriding the
    /// configuration seed.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if the configuration is invalid.
    pub fn with_seed(config: SimulationConfig, seed: u32) -> Result<Self, SimulationError> {
        config.validate()?;

        Ok(Self {
            config,
            rng: Mt19937::from_seed(seed),
        })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Resets the generator to the configured seed, replaying the stream.
    pub fn reset(&mut self) {
        self.rng = Self::generator_for(self.config.seed());
    }

    /// Resets the generator with a new seed.
    pub fn reset_with_seed(&mut self, seed: u32) {
        self.rng = Mt19937::from_seed(seed);
    }

    /// Runs a single trial and returns the π estimate.
    ///
    /// # Errors
    ///
    /// Propagates [`SimulationError`] from the statistics layer.
    pub fn estimate(&mut self) -> Result<f64, SimulationError> {
        estimator::estimate_pi(&mut self.rng, self.config.n_points())
    }

    /// Runs the configured number of experiments and returns the mean.
    ///
    /// # Errors
    ///
    /// Propagates [`SimulationError`] from the statistics layer.
    pub fn mean(&mut self) -> Result<f64, SimulationError> {
        estimator::mean_over_experiments(
            &mut self.rng,
            self.config.n_points(),
            self.config.n_experiments(),
        )
    }

    /// Runs the configured number of experiments and returns the mean with
    /// the per-trial estimates.
    ///
    /// # Errors
    ///
    /// Propagates [`SimulationError`] from the statistics layer.
    pub fn mean_with_samples(&mut self) -> Result<MeanSamples, SimulationError> {
        estimator::mean_with_samples(
            &mut self.rng,
            self.config.n_points(),
            self.config.n_experiments(),
        )
    }

    /// Runs the configured number of experiments and returns the mean with
    /// the 95% confidence radius.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::InsufficientExperiments`] if the
    /// configuration requests fewer than two experiments.
    pub fn confidence(&mut self) -> Result<ConfidenceSummary, SimulationError> {
        estimator::mean_and_confidence_radius(
            &mut self.rng,
            self.config.n_points(),
            self.config.n_experiments(),
        )
    }

    fn generator_for(seed: Option<u32>) -> Mt19937 {
        match seed {
            Some(seed) => Mt19937::from_seed(seed),
            None => Mt19937::new(),
        }
    }
}
