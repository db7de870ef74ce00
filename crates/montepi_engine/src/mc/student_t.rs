//! Student-t critical values for two-tailed 95% confidence intervals.

/// Two-tailed 95% critical t-values for degrees of freedom 1..=121, indexed
/// by degrees of freedom minus one. The final entry is the asymptotic normal
/// approximation, reused for any larger degrees of freedom.
const TWO_TAILED_95: [f64; 121] = [
    12.706, 4.303, 3.182, 2.776, 2.571,
    2.447, 2.365, 2.308, 2.262, 2.228,
    2.201, 2.179, 2.160, 2.145, 2.131,
    2.120, 2.110, 2.101, 2.093, 2.086,
    2.080, 2.074, 2.069, 2.064, 2.060,
    2.056, 2.052, 2.048, 2.045, 2.042,
    2.040, 2.038, 2.036, 2.034, 2.032,
    2.030, 2.028, 2.026, 2.024, 2.021,
    2.020, 2.018, 2.016, 2.014, 2.012,
    2.010, 2.008, 2.006, 2.004, 2.002,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    2.000, 2.000, 2.000, 2.000, 2.000,
    1.998, 1.996, 1.994, 1.992, 1.990,
    1.988, 1.986, 1.984, 1.982, 1.980,
    1.960,
];

/// Returns the two-tailed 95% critical t-value for a run of `n_experiments`
/// experiments.
///
/// The table is indexed at `n_experiments - 1`, clamped to its final row, so
/// every run beyond the tabulated range uses the asymptotic value 1.960.
///
/// # Panics
///
/// Panics if `n_experiments` is zero; callers validate experiment counts
/// before computing any statistic.
pub fn critical_value(n_experiments: usize) -> f64 {
    assert!(n_experiments >= 1, "critical_value requires n_experiments >= 1");
    let row = (n_experiments - 1).min(TWO_TAILED_95.len() - 1);
    TWO_TAILED_95[row]
}
