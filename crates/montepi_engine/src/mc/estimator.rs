//! Monte Carlo π estimation and confidence statistics.
//!
//! Every function takes the generator it draws from as an explicit argument,
//! so callers control seeding and stream position. A single-trial estimate
//! advances the stream by exactly `2 * n_points` draws (one x and one y per
//! sampled point).

use std::f64::consts::PI;

use super::error::SimulationError;
use super::student_t;
use crate::rng::Mt19937;

/// Mean of a multi-trial run together with the per-trial estimates that
/// produced it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanSamples {
    /// Arithmetic mean of the per-trial estimates.
    pub mean: f64,
    /// Ordered per-trial estimates, one per experiment.
    pub samples: Vec<f64>,
}

/// Mean and 95% confidence radius of a multi-trial run.
///
/// The confidence interval is `[mean - radius, mean + radius]` at nominal
/// 95% confidence.
///
/// # Examples
///
/// ```rust
/// use montepi_engine::mc::ConfidenceSummary;
///
/// let summary = ConfidenceSummary { mean: 3.14, radius: 0.02 };
/// let (lower, upper) = summary.interval();
/// assert!(lower < summary.mean && summary.mean < upper);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfidenceSummary {
    /// Arithmetic mean of the per-trial estimates.
    pub mean: f64,
    /// Half-width of the symmetric confidence interval around the mean.
    pub radius: f64,
}

impl ConfidenceSummary {
    /// Returns the confidence interval as `(lower, upper)`.
    #[inline]
    pub fn interval(&self) -> (f64, f64) {
        (self.mean - self.radius, self.mean + self.radius)
    }
}

/// Estimates π from a single Monte Carlo trial.
///
/// Draws `n_points` pairs `(x, y)` uniformly from `[0, 1)` and returns four
/// times the fraction of pairs falling inside the unit quarter-circle. The
/// result is a pure function of the generator's stream position.
///
/// # Errors
///
/// Returns [`SimulationError::InvalidPointCount`] if `n_points` is zero,
/// before drawing anything.
///
/// # Examples
///
/// ```rust
/// use montepi_engine::mc::estimate_pi;
/// use montepi_engine::rng::Mt19937;
///
/// let mut rng = Mt19937::from_seed(42);
/// let estimate = estimate_pi(&mut rng, 10_000).unwrap();
/// assert!((estimate - std::f64::consts::PI).abs() < 0.1);
/// ```
pub fn estimate_pi(rng: &mut Mt19937, n_points: usize) -> Result<f64, SimulationError> {
    if n_points == 0 {
        return Err(SimulationError::InvalidPointCount(n_points));
    }

    let mut inside = 0usize;
    for _ in 0..n_points {
        let x = rng.gen_uniform();
        let y = rng.gen_uniform();
        if x * x + y * y <= 1.0 {
            inside += 1;
        }
    }

    Ok(4.0 * inside as f64 / n_points as f64)
}

/// Returns the absolute error of an estimate against π.
#[inline]
pub fn absolute_error(estimate: f64) -> f64 {
    (estimate - PI).abs()
}

/// Returns the relative error of an estimate against π.
#[inline]
pub fn relative_error(estimate: f64) -> f64 {
    absolute_error(estimate) / PI
}

/// Runs `n_experiments` independent trials and returns the mean estimate.
///
/// # Errors
///
/// Returns [`SimulationError::InsufficientExperiments`] if `n_experiments`
/// is zero and [`SimulationError::InvalidPointCount`] if `n_points` is zero.
pub fn mean_over_experiments(
    rng: &mut Mt19937,
    n_points: usize,
    n_experiments: usize,
) -> Result<f64, SimulationError> {
    if n_experiments == 0 {
        return Err(SimulationError::InsufficientExperiments {
            got: n_experiments,
            need: 1,
        });
    }
    if n_points == 0 {
        return Err(SimulationError::InvalidPointCount(n_points));
    }

    let mut sum = 0.0;
    for _ in 0..n_experiments {
        sum += estimate_pi(rng, n_points)?;
    }
    Ok(sum / n_experiments as f64)
}

/// Runs `n_experiments` independent trials, returning the mean together with
/// the full ordered sequence of per-trial estimates.
///
/// # Errors
///
/// Returns [`SimulationError::InsufficientExperiments`] if `n_experiments`
/// is zero and [`SimulationError::InvalidPointCount`] if `n_points` is zero.
pub fn mean_with_samples(
    rng: &mut Mt19937,
    n_points: usize,
    n_experiments: usize,
) -> Result<MeanSamples, SimulationError> {
    if n_experiments == 0 {
        return Err(SimulationError::InsufficientExperiments {
            got: n_experiments,
            need: 1,
        });
    }
    if n_points == 0 {
        return Err(SimulationError::InvalidPointCount(n_points));
    }

    let mut samples = Vec::with_capacity(n_experiments);
    let mut sum = 0.0;
    for _ in 0..n_experiments {
        let estimate = estimate_pi(rng, n_points)?;
        sum += estimate;
        samples.push(estimate);
    }

    Ok(MeanSamples {
        mean: sum / n_experiments as f64,
        samples,
    })
}

/// Runs `n_experiments` independent trials and returns the mean together
/// with the 95% confidence radius.
///
/// The radius is `t * sqrt(s² / n_experiments)` where `s²` is the unbiased
/// sample variance and `t` the Student-t critical value for the run size
/// (see [`critical_value`](super::critical_value) for the clamp behaviour).
///
/// # Errors
///
/// Returns [`SimulationError::InsufficientExperiments`] if `n_experiments`
/// is below two; the sample variance is undefined for a single trial.
/// Returns [`SimulationError::InvalidPointCount`] if `n_points` is zero.
///
/// # Examples
///
/// ```rust
/// use montepi_engine::mc::mean_and_confidence_radius;
/// use montepi_engine::rng::Mt19937;
///
/// let mut rng = Mt19937::from_seed(42);
/// let summary = mean_and_confidence_radius(&mut rng, 1_000, 40).unwrap();
/// let (lower, upper) = summary.interval();
/// assert!(lower < upper);
/// ```
pub fn mean_and_confidence_radius(
    rng: &mut Mt19937,
    n_points: usize,
    n_experiments: usize,
) -> Result<ConfidenceSummary, SimulationError> {
    if n_experiments < 2 {
        return Err(SimulationError::InsufficientExperiments {
            got: n_experiments,
            need: 2,
        });
    }

    let MeanSamples { mean, samples } = mean_with_samples(rng, n_points, n_experiments)?;
    Ok(summarise(mean, &samples))
}

/// Derives the confidence summary from a complete set of per-trial samples.
///
/// Callers guarantee `samples.len() >= 2`.
pub(super) fn summarise(mean: f64, samples: &[f64]) -> ConfidenceSummary {
    debug_assert!(samples.len() >= 2);

    let n = samples.len();
    let variance =
        samples.iter().map(|&s| (s - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    let radius = student_t::critical_value(n) * (variance / n as f64).sqrt();

    ConfidenceSummary { mean, radius }
}
