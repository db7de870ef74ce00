//! Precision command implementation
//!
//! Repeats single-trial estimation with a growing point count until the
//! absolute error drops below each target precision.

use montepi_engine::{absolute_error, estimate_pi};
use tracing::info;

use crate::Result;

/// Increment applied to the point count after every missed target.
const POINT_INCREMENT: usize = 1_000;

/// Run the precision command
pub fn run(seed: Option<u32>, start_points: usize, max_exponent: u32) -> Result<()> {
    info!("Starting precision search...");
    info!("  Starting points: {}", start_points);
    info!("  Target precisions: 10^-2 .. 10^-{}", max_exponent);

    let mut rng = super::build_generator(seed)?;

    for exponent in 2..=max_exponent {
        let target = 10f64.powi(-(exponent as i32));
        let mut points = start_points;
        let mut trials = 0u64;

        let estimate = loop {
            let estimate = estimate_pi(&mut rng, points)?;
            trials += 1;
            if absolute_error(estimate) < target {
                break estimate;
            }
            points += POINT_INCREMENT;
        };

        println!(
            "precision 10^-{}: reached with {} points after {} trials, estimate = {:.6}",
            exponent, points, trials, estimate
        );
    }

    info!("Precision search complete");
    Ok(())
}
