//! Sweep command implementation
//!
//! Estimates π over a grid of point and experiment counts and reports the
//! mean together with absolute and relative errors.

use montepi_engine::{absolute_error, mean_over_experiments, relative_error};
use serde::Serialize;
use tracing::info;

use crate::{CliError, Result};

/// Point counts covered by the sweep.
const POINT_COUNTS: [usize; 2] = [1_000, 1_000_000];
/// Experiment counts covered by the sweep.
const EXPERIMENT_COUNTS: [usize; 4] = [10, 20, 30, 40];

/// One row of the sweep report.
#[derive(Debug, Serialize)]
struct SweepRow {
    points: usize,
    experiments: usize,
    mean: f64,
    absolute_error: f64,
    relative_error: f64,
}

/// Run the sweep command
pub fn run(seed: Option<u32>, format: &str) -> Result<()> {
    info!("Starting sweep...");
    info!("  Point counts: {:?}", POINT_COUNTS);
    info!("  Experiment counts: {:?}", EXPERIMENT_COUNTS);

    let mut rng = super::build_generator(seed)?;

    let mut rows = Vec::with_capacity(POINT_COUNTS.len() * EXPERIMENT_COUNTS.len());
    for &points in &POINT_COUNTS {
        for &experiments in &EXPERIMENT_COUNTS {
            let mean = mean_over_experiments(&mut rng, points, experiments)?;
            rows.push(SweepRow {
                points,
                experiments,
                mean,
                absolute_error: absolute_error(mean),
                relative_error: relative_error(mean),
            });
        }
    }

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        "table" => {
            println!(
                "{:>10} {:>12} {:>10} {:>11} {:>11}",
                "points", "experiments", "mean", "abs error", "rel error"
            );
            for row in &rows {
                println!(
                    "{:>10} {:>12} {:>10.6} {:>11.6} {:>11.6}",
                    row.points, row.experiments, row.mean, row.absolute_error, row.relative_error
                );
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            )));
        }
    }

    info!("Sweep complete");
    Ok(())
}
