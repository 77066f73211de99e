//! Outcome records, running stats, and run reports.

mod outcome;
mod reporter;

pub use outcome::{FailureRecord, MAX_INPUT_RENDER, Outcome};
pub use reporter::{Bug, REPORT_PATH, Reporter, RunReport};
