//! Repository-mining operations: date deltas and source-file counts.

use std::fs;

use super::{DateArg, PathArg, TargetError, TargetResult};

/// Extensions counted as source files by [`count_source_files`].
const SOURCE_EXTENSIONS: &[&str] = &["py", "ipynb"];

/// Absolute number of days between two dates.
///
/// Anything other than two date-shaped arguments is a type mismatch.
pub fn days_between(d1: &DateArg, d2: &DateArg) -> TargetResult<i64> {
    match (d1, d2) {
        (DateArg::Date(a), DateArg::Date(b)) => Ok((*b - *a).num_days().abs()),
        _ => Err(TargetError::TypeMismatch(format!(
            "expected two dates, got {d1} and {d2}"
        ))),
    }
}

/// Count source files (`.py` plus `.ipynb`) directly inside a directory.
pub fn count_source_files(dir: &PathArg) -> TargetResult<usize> {
    let dir = match dir {
        PathArg::Path(p) => p,
        PathArg::Null => {
            return Err(TargetError::TypeMismatch(
                "directory path must not be None".to_string(),
            ));
        }
    };

    let entries = fs::read_dir(dir).map_err(|e| TargetError::from_io(e, dir))?;
    let mut count = 0;
    for entry in entries {
        let entry = entry.map_err(|e| TargetError::from_io(e, dir))?;
        let path = entry.path();
        if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e))
        {
            count += 1;
        }
    }
    Ok(count)
}
