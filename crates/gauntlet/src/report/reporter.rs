//! Outcome aggregation and report rendering.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use super::outcome::Outcome;
use crate::error::{GauntletError, Result};

/// Well-known relative path of the durable report artifact.
pub const REPORT_PATH: &str = "fuzz_report.txt";

const BANNER: &str =
    "================================================================================";
const RULE: &str =
    "--------------------------------------------------------------------------------";

/// A failed outcome, numbered in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct Bug {
    pub number: usize,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Accumulates outcomes over a run.
///
/// Owned by the orchestrator and passed by mutable reference to each
/// campaign; there is no concurrent access.
#[derive(Debug, Default)]
pub struct Reporter {
    total: usize,
    failures: usize,
    bugs: Vec<Outcome>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log one outcome. Bumps the totals; failed outcomes join the bug
    /// list in discovery order.
    pub fn log(&mut self, outcome: Outcome) {
        self.total += 1;
        if outcome.is_failure() {
            self.failures += 1;
            self.bugs.push(outcome);
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Percentage of invocations that completed, in [0, 100].
    /// Undefined (None) before anything has been logged.
    pub fn success_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some((self.total - self.failures) as f64 / self.total as f64 * 100.0)
        }
    }

    /// Close out the run and produce the final report.
    pub fn finalize(self) -> RunReport {
        let success_rate = self.success_rate();
        RunReport {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            total: self.total,
            failures: self.failures,
            success_rate,
            bugs: self
                .bugs
                .into_iter()
                .enumerate()
                .map(|(i, outcome)| Bug {
                    number: i + 1,
                    outcome,
                })
                .collect(),
        }
    }
}

/// The finished report: totals, success rate, and the ordered bug list.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: String,
    pub total: usize,
    pub failures: usize,
    pub success_rate: Option<f64>,
    pub bugs: Vec<Bug>,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }

    /// Render the durable text form of the report.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "FUZZING REPORT");
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out, "Date: {}", self.generated_at);
        let _ = writeln!(out, "Total tests executed: {}", self.total);
        let _ = writeln!(out, "Bugs/Crashes found: {}", self.failures);
        match self.success_rate {
            Some(rate) => {
                let _ = writeln!(out, "Success rate: {rate:.2}%");
            }
            None => {
                let _ = writeln!(out, "Success rate: n/a (no tests executed)");
            }
        }
        let _ = writeln!(out, "{BANNER}");
        let _ = writeln!(out);

        if self.bugs.is_empty() {
            let _ = writeln!(out, "No bugs found! All tests passed successfully.");
            return out;
        }

        let _ = writeln!(out, "DETAILED BUG REPORTS:");
        let _ = writeln!(out, "{RULE}");
        for bug in &self.bugs {
            let _ = writeln!(out);
            let _ = writeln!(out, "BUG #{}", bug.number);
            let _ = writeln!(out, "Method: {}", bug.outcome.target);
            let _ = writeln!(out, "Input: {}", bug.outcome.input);
            if let Some(failure) = &bug.outcome.failure {
                let _ = writeln!(out, "Error Type: {}", failure.kind);
                let _ = writeln!(out, "Error Message: {}", failure.message);
                let _ = writeln!(out, "Trace: {}", failure.trace);
            }
            let _ = writeln!(out, "{RULE}");
        }
        out
    }

    /// Write the text report to `path`, replacing any prior artifact.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.render_text()).map_err(|e| GauntletError::Report {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
