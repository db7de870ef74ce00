//! Montepi CLI - Command Line Operations for Monte Carlo π Estimation
//!
//! This is the operational entry point for the montepi estimation engine.
//!
//! # Commands
//!
//! - `montepi precision` - Grow the point count until target precisions are met
//! - `montepi sweep` - Estimate π over a grid of point/experiment counts
//! - `montepi confidence` - Compute a 95% confidence interval for π
//!
//! # Reproducibility
//!
//! All commands draw from a single deterministic generator. Pass `--seed` for
//! scalar seeding; without it the driver seeds with the documented key array
//! {0x123, 0x234, 0x345, 0x456}.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Montepi Monte Carlo Estimation CLI
#[derive(Parser)]
#[command(name = "montepi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Scalar seed for the generator (defaults to the documented key array)
    #[arg(short, long, global = true)]
    seed: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grow the point count until each target precision is reached
    Precision {
        /// Starting number of points per trial
        #[arg(short, long, default_value = "1000")]
        points: usize,

        /// Largest precision exponent to reach (targets 10^-2 .. 10^-k)
        #[arg(short = 'e', long, default_value = "3")]
        max_exponent: u32,
    },

    /// Estimate π over a grid of point and experiment counts
    Sweep {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compute the mean and 95% confidence interval
    Confidence {
        /// Number of points per experiment
        #[arg(short, long, default_value = "1000")]
        points: usize,

        /// Number of experiments
        #[arg(short = 'n', long, default_value = "40")]
        experiments: usize,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Precision {
            points,
            max_exponent,
        } => commands::precision::run(cli.seed, points, max_exponent),
        Commands::Sweep { format } => commands::sweep::run(cli.seed, &format),
        Commands::Confidence {
            points,
            experiments,
            format,
        } => commands::confidence::run(cli.seed, points, experiments, &format),
    }
}
