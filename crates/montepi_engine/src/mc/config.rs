//! Simulation configuration.
//!
//! Provides the configuration type and builder used by [`PiSimulation`]
//! (and by callers that want validated parameters up front).
//!
//! [`PiSimulation`]: super::PiSimulation

use super::error::SimulationError;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying run parameters. Use
/// [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use montepi_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_points(10_000)
///     .n_experiments(40)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_points(), 10_000);
/// assert_eq!(config.n_experiments(), 40);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Number of points sampled per experiment.
    n_points: usize,
    /// Number of experiments per run.
    n_experiments: usize,
    /// Optional seed for reproducibility.
    seed: Option<u32>,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of points sampled per experiment.
    #[inline]
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Returns the number of experiments per run.
    #[inline]
    pub fn n_experiments(&self) -> usize {
        self.n_experiments
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u32> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// Run length is bounded only by the parameters themselves; a very large
    /// point count simply runs proportionally long.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if `n_points` or `n_experiments` is zero.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.n_points == 0 {
            return Err(SimulationError::InvalidPointCount(self.n_points));
        }
        if self.n_experiments == 0 {
            return Err(SimulationError::InsufficientExperiments {
                got: self.n_experiments,
                need: 1,
            });
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// Provides a fluent API with validation at build time.
///
/// # Examples
///
/// ```rust
/// use montepi_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_points(1_000)
///     .n_experiments(10)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_points: Option<usize>,
    n_experiments: Option<usize>,
    seed: Option<u32>,
}

impl SimulationConfigBuilder {
    /// Sets the number of points sampled per experiment.
    #[inline]
    pub fn n_points(mut self, n_points: usize) -> Self {
        self.n_points = Some(n_points);
        self
    }

    /// Sets the number of experiments per run.
    #[inline]
    pub fn n_experiments(mut self, n_experiments: usize) -> Self {
        self.n_experiments = Some(n_experiments);
        self
    }

    /// Sets the seed for reproducibility.
    ///
    /// When unset, the generator falls back to the documented default
    /// auto-seed on first draw.
    #[inline]
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if a required parameter is missing or
    /// invalid.
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let n_points = self.n_points.ok_or(SimulationError::InvalidParameter {
            name: "n_points",
            value: "must be specified".to_string(),
        })?;

        let n_experiments = self
            .n_experiments
            .ok_or(SimulationError::InvalidParameter {
                name: "n_experiments",
                value: "must be specified".to_string(),
            })?;

        let config = SimulationConfig {
            n_points,
            n_experiments,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
