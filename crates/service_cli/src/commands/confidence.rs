//! Confidence command implementation
//!
//! Computes the mean π estimate and its 95% confidence interval for a given
//! number of points and experiments.

use montepi_engine::mean_and_confidence_radius;
use serde::Serialize;
use tracing::info;

use crate::{CliError, Result};

/// Serialisable confidence report.
#[derive(Debug, Serialize)]
struct ConfidenceReport {
    points: usize,
    experiments: usize,
    mean: f64,
    radius: f64,
    lower: f64,
    upper: f64,
}

/// Run the confidence command
pub fn run(seed: Option<u32>, points: usize, experiments: usize, format: &str) -> Result<()> {
    info!("Computing confidence interval...");
    info!("  Points per experiment: {}", points);
    info!("  Experiments: {}", experiments);

    let mut rng = super::build_generator(seed)?;
    let summary = mean_and_confidence_radius(&mut rng, points, experiments)?;
    let (lower, upper) = summary.interval();

    let report = ConfidenceReport {
        points,
        experiments,
        mean: summary.mean,
        radius: summary.radius,
        lower,
        upper,
    };

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "table" => {
            println!(
                "95% confidence interval for n = {} experiments of {} points:",
                report.experiments, report.points
            );
            println!(
                "  mean = {:.6}, radius = {:.6}, interval = [{:.6}, {:.6}]",
                report.mean, report.radius, report.lower, report.upper
            );
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Confidence computation complete");
    Ok(())
}
