//! Gauntlet: a random-input fuzz harness for source-analysis operations.
//!
//! The harness exercises five analysis operations (a source parser, a
//! logging-usage checker, a date-delta calculator, a directory source-file
//! counter, and a data-load-pattern counter) with varied, malformed, and
//! boundary inputs, and records which inputs make them fail.
//!
//! # Design
//!
//! - **Fault isolation**: every invocation runs inside a fault boundary;
//!   a target failure, including a panic, becomes a classified outcome
//!   and never aborts the run.
//! - **Bounded and stateless**: a fixed number of random iterations plus a
//!   hand-curated edge-case corpus per campaign; no coverage guidance, no
//!   corpus persistence, no input shrinking.
//! - **Scoped resources**: temp files and directories live only for the
//!   invocation that uses them; deletion is best-effort on every path.
//!
//! # Example
//!
//! ```no_run
//! use gauntlet::{Harness, HarnessConfig};
//!
//! let harness = Harness::with_config(HarnessConfig { iterations: 10 }).unwrap();
//! let report = harness.run(|c| {
//!     println!("[{}/{}] Fuzzing {}...", c.index, c.count, c.target);
//! }).unwrap();
//!
//! println!("{} tests, {} bugs", report.total, report.failures);
//! ```

pub mod error;
pub mod generate;
pub mod invoke;
pub mod report;
pub mod targets;

mod harness;

pub use error::{GauntletError, Result};
pub use harness::{CAMPAIGN_COUNT, CampaignInfo, DEFAULT_ITERATIONS, Harness, HarnessConfig};
pub use report::{Bug, Outcome, REPORT_PATH, Reporter, RunReport};
pub use targets::{FailureKind, TargetError, TargetSuite};
