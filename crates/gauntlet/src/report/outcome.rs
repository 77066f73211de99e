//! Per-invocation outcome records.

use serde::Serialize;

use crate::targets::FailureKind;

/// Maximum length of an outcome's input rendering. Keeps reports finite
/// no matter how large the generated input was.
pub const MAX_INPUT_RENDER: usize = 100;

/// A caught target failure: classification, message, diagnostic trace.
#[derive(Debug, Clone, Serialize)]
pub struct FailureRecord {
    pub kind: FailureKind,
    pub message: String,
    pub trace: String,
}

/// The result of one invocation of a target operation.
///
/// Created exactly once per invocation and immutable afterwards; the
/// reporter takes ownership when it is logged.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Name of the target operation invoked.
    pub target: String,
    /// Truncated provenance rendering of the input.
    pub input: String,
    /// Debug rendering of the returned value, when the call completed.
    pub result: Option<String>,
    /// The caught failure, when it did not.
    pub failure: Option<FailureRecord>,
}

impl Outcome {
    pub fn success(target: &str, input: &str, result: String) -> Self {
        Self {
            target: target.to_string(),
            input: truncate(input),
            result: Some(result),
            failure: None,
        }
    }

    pub fn failure(target: &str, input: &str, failure: FailureRecord) -> Self {
        Self {
            target: target.to_string(),
            input: truncate(input),
            result: None,
            failure: Some(failure),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }
}

/// Char-boundary-safe truncation to [`MAX_INPUT_RENDER`].
fn truncate(s: &str) -> String {
    s.chars().take(MAX_INPUT_RENDER).collect()
}
