//! Error types for the Gauntlet library.
//!
//! These cover the harness's own failure modes only. Failures raised by
//! target operations during a campaign are a separate concern
//! ([`crate::targets::TargetError`]): they are caught, classified, and
//! logged, never propagated as `GauntletError`.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for harness operations.
#[derive(Debug, Error)]
pub enum GauntletError {
    /// Error creating or writing an ephemeral input resource.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target operation suite could not be loaded at startup.
    /// Fatal: no campaign runs after this.
    #[error("failed to load target operations: {0}")]
    TargetLoad(#[from] regex::Error),

    /// Error writing the durable run report.
    #[error("failed to write report to '{path}': {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, GauntletError>;
