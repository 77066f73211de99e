//! Gauntlet CLI - random-input fuzz harness.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    std::process::exit(commands::run::run(cli));
}
