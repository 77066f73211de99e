//! Target operations under test.
//!
//! These are the analysis operations the harness exercises: a source
//! parser, a logging-usage checker, a date-delta calculator, a directory
//! source-file counter, and a data-load-pattern counter. The harness
//! treats them as external collaborators: their correctness is not
//! verified, only whether they complete or fail on a given input.
//!
//! Arguments are deliberately loose-typed ([`DateArg`], [`NameArg`],
//! [`PathArg`]) so campaigns can hand a target a null-like or wrong-typed
//! value and observe how it fails.

pub mod lint;
pub mod mining;
pub mod parser;

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::error::Result;
pub use lint::LintEngine;
pub use parser::{ParsedSource, SourceParser};

/// Classification tag attached to every caught failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    /// The target received an argument of the wrong shape.
    TypeMismatch,
    /// A file or directory the target needed does not exist.
    ResourceNotFound,
    /// The target could not make sense of the input's syntax.
    ParseFailure,
    /// The target panicked.
    Panic,
    /// Anything else (permission errors, non-directory paths, ...).
    Unclassified,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::TypeMismatch => "TypeMismatch",
            FailureKind::ResourceNotFound => "ResourceNotFound",
            FailureKind::ParseFailure => "ParseFailure",
            FailureKind::Panic => "Panic",
            FailureKind::Unclassified => "Unclassified",
        };
        f.write_str(name)
    }
}

/// Failure raised by a target operation.
///
/// Never propagates past the fault boundary: the invoker converts it into
/// a failed outcome carrying its [`FailureKind`] and message.
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    #[error("parse failure: {0}")]
    ParseFailure(String),

    #[error("{0}")]
    Other(String),
}

impl TargetError {
    /// The classification tag for this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            TargetError::TypeMismatch(_) => FailureKind::TypeMismatch,
            TargetError::ResourceNotFound(_) => FailureKind::ResourceNotFound,
            TargetError::ParseFailure(_) => FailureKind::ParseFailure,
            TargetError::Other(_) => FailureKind::Unclassified,
        }
    }

    /// Classify an io error from a target's file access.
    pub(crate) fn from_io(err: std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => {
                TargetError::ResourceNotFound(path.display().to_string())
            }
            _ => TargetError::Other(format!("{}: {err}", path.display())),
        }
    }
}

/// Result type for target operations.
pub type TargetResult<T> = std::result::Result<T, TargetError>;

/// A date-shaped argument, including deliberately wrong shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateArg {
    Date(NaiveDate),
    Text(String),
    Number(i64),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
    Null,
}

impl fmt::Display for DateArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateArg::Date(d) => write!(f, "{d}"),
            DateArg::Text(s) => write!(f, "{s:?}"),
            DateArg::Number(n) => write!(f, "{n}"),
            DateArg::List(items) => write!(f, "[{}]", items.join(", ")),
            DateArg::Map(map) => write!(f, "{{{} entries}}", map.len()),
            DateArg::Null => f.write_str("None"),
        }
    }
}

/// A name-shaped argument for the logging-usage checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameArg {
    Text(String),
    Number(i64),
    Null,
}

impl fmt::Display for NameArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameArg::Text(s) => write!(f, "{s:?}"),
            NameArg::Number(n) => write!(f, "{n}"),
            NameArg::Null => f.write_str("None"),
        }
    }
}

/// A path-shaped argument, including null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathArg {
    Path(PathBuf),
    Null,
}

impl PathArg {
    pub fn path(p: impl Into<PathBuf>) -> Self {
        PathArg::Path(p.into())
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathArg::Path(p) => write!(f, "{}", p.display()),
            PathArg::Null => f.write_str("None"),
        }
    }
}

/// The full set of target operations, resolved once at startup.
///
/// Loading compiles every pattern the analyzers use. A load failure is
/// the fatal startup tier: it is reported and the process exits without
/// running any campaign.
pub struct TargetSuite {
    pub parser: SourceParser,
    pub lint: LintEngine,
}

impl TargetSuite {
    pub fn load() -> Result<Self> {
        Ok(Self {
            parser: SourceParser::load()?,
            lint: LintEngine::load()?,
        })
    }
}
