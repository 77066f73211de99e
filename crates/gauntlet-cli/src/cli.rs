//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// Gauntlet: random-input fuzz harness for source-analysis operations
#[derive(Parser)]
#[command(name = "gauntlet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Random iterations per campaign. Non-numeric or non-positive input
    /// falls back to the default of 20 with a warning.
    #[arg(value_name = "ITERATIONS")]
    pub iterations: Option<String>,

    /// Output path for the durable report
    #[arg(short, long, default_value = gauntlet::REPORT_PATH)]
    pub output: PathBuf,

    /// Print the final report as JSON instead of the human-readable form
    #[arg(long)]
    pub json: bool,

    /// Include diagnostic traces in the console bug detail
    #[arg(short, long)]
    pub verbose: bool,
}
