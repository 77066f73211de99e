//! Run command - drive a full fuzzing run and render the report.

use colored::Colorize;
use gauntlet::{DEFAULT_ITERATIONS, Harness, HarnessConfig, RunReport};

use crate::cli::Cli;

/// Run the harness end to end. Returns the process exit code: 0 when no
/// failures were logged, 1 when bugs were found or the harness could not
/// start.
pub fn run(cli: Cli) -> i32 {
    println!("{}", "Gauntlet - fuzz harness for source-analysis operations".cyan().bold());
    println!();

    let iterations = resolve_iterations(cli.iterations.as_deref());

    // Startup tier: a suite that fails to load is fatal, no campaign runs.
    let harness = match Harness::with_config(HarnessConfig { iterations }) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            return 1;
        }
    };

    println!(
        "Running {} iterations per campaign...",
        iterations.to_string().white().bold()
    );

    let report = match harness.run(|c| {
        println!(
            "[{}/{}] Fuzzing {} with {} iterations...",
            c.index,
            c.count,
            c.target.yellow(),
            c.iterations
        );
    }) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {e}", "Error:".red().bold());
            return 1;
        }
    };

    println!();
    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{} {e}", "Error:".red().bold());
                return 1;
            }
        }
    } else {
        print_report(&report, cli.verbose);
    }

    if let Err(e) = report.write_to(&cli.output) {
        eprintln!("{} {e}", "Error:".red().bold());
        return 1;
    }
    println!(
        "{} {}",
        "Full report saved to".green().bold(),
        cli.output.display().to_string().white()
    );

    if report.has_failures() {
        println!(
            "{} {} bugs/crashes detected",
            "WARNING:".red().bold(),
            report.failures.to_string().red()
        );
        1
    } else {
        println!("{}", "All tests passed - no bugs detected!".green());
        0
    }
}

/// Resolve the positional iteration count, falling back to the default
/// on non-numeric or non-positive input. Never fatal.
fn resolve_iterations(arg: Option<&str>) -> usize {
    match arg {
        None => DEFAULT_ITERATIONS,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!(
                    "{} invalid iteration count '{raw}', using default: {DEFAULT_ITERATIONS}",
                    "Warning:".yellow().bold()
                );
                DEFAULT_ITERATIONS
            }
        },
    }
}

/// Human-readable console rendering of the run report.
fn print_report(report: &RunReport, verbose: bool) {
    println!("{}", "FUZZING REPORT".white().bold());
    println!("Total tests executed: {}", report.total.to_string().white().bold());
    println!("Bugs/Crashes found: {}", report.failures.to_string().red().bold());
    match report.success_rate {
        Some(rate) => println!("Success rate: {rate:.2}%"),
        None => println!("Success rate: n/a (no tests executed)"),
    }

    if report.bugs.is_empty() {
        return;
    }

    println!();
    println!("{}", "DETAILED BUG REPORTS:".yellow().bold());
    for bug in &report.bugs {
        println!();
        println!("{}", format!("BUG #{}", bug.number).red().bold());
        println!("Method: {}", bug.outcome.target);
        println!("Input: {}", bug.outcome.input);
        if let Some(failure) = &bug.outcome.failure {
            println!("Error Type: {}", failure.kind.to_string().red());
            println!("Error Message: {}", failure.message);
            if verbose {
                println!("Trace: {}", failure.trace);
            }
        }
    }
    println!();
}
