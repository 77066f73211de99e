//! Fault-isolated invocation of target operations.
//!
//! Every call to a target goes through [`invoke`], which converts any
//! failure the target raises, including panics, into a failed [`Outcome`]
//! instead of letting it abort the campaign.

use std::any::Any;
use std::fmt::Write as _;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::report::{FailureRecord, Outcome};
use crate::targets::{FailureKind, TargetError, TargetResult};

/// Call `call` exactly once and record what happened.
///
/// A returned value is attached to the outcome un-interpreted; the
/// harness does not judge its correctness. A `TargetError` or a panic
/// becomes a failed outcome with a classification and message.
pub fn invoke<T, F>(target: &str, input: &str, call: F) -> Outcome
where
    T: std::fmt::Debug,
    F: FnOnce() -> TargetResult<T>,
{
    match catch_unwind(AssertUnwindSafe(call)) {
        Ok(Ok(value)) => Outcome::success(target, input, format!("{value:?}")),
        Ok(Err(err)) => Outcome::failure(
            target,
            input,
            FailureRecord {
                kind: err.kind(),
                message: err.to_string(),
                trace: render_trace(&err),
            },
        ),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            Outcome::failure(
                target,
                input,
                FailureRecord {
                    kind: FailureKind::Panic,
                    message: message.clone(),
                    trace: format!("panic: {message}"),
                },
            )
        }
    }
}

/// Render the error and its source chain as a diagnostic trace.
fn render_trace(err: &TargetError) -> String {
    let mut trace = format!("{err}");
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        let _ = write!(trace, "\n  caused by: {cause}");
        source = cause.source();
    }
    trace
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with non-string payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_attaches_debug_rendering() {
        let outcome = invoke("days_between", "d1: a, d2: b", || Ok(42_i64));
        assert!(!outcome.is_failure());
        assert_eq!(outcome.result.as_deref(), Some("42"));
    }

    #[test]
    fn test_target_error_is_classified() {
        let outcome = invoke("parse", "file: missing.py", || -> TargetResult<()> {
            Err(TargetError::ResourceNotFound("missing.py".to_string()))
        });
        let failure = outcome.failure.expect("should be a failure");
        assert_eq!(failure.kind, FailureKind::ResourceNotFound);
        assert!(failure.message.contains("missing.py"));
        assert!(!failure.trace.is_empty());
    }

    #[test]
    fn test_panic_is_caught() {
        let prev = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let outcome = invoke("parse", "input", || -> TargetResult<()> {
            panic!("index out of bounds")
        });
        std::panic::set_hook(prev);

        let failure = outcome.failure.expect("should be a failure");
        assert_eq!(failure.kind, FailureKind::Panic);
        assert!(failure.message.contains("index out of bounds"));
    }
}
