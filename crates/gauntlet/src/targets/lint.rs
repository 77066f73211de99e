//! Data-load-pattern counter.

use std::fs;
use std::path::Path;

use regex::Regex;

use super::{TargetError, TargetResult};

/// Call patterns treated as data loads.
const DATA_LOAD_PATTERNS: &[&str] = &[
    r"torch\.load\s*\(",
    r"pickle\.load\s*\(",
    r"json\.load\s*\(",
    r"np\.load\s*\(",
    r"joblib\.load\s*\(",
    r"\bread_csv\s*\(",
    r"\bread_table\s*\(",
    r"Image\.open\s*\(",
];

/// Counts occurrences of data-loading call patterns in a source file.
pub struct LintEngine {
    patterns: Vec<Regex>,
}

impl LintEngine {
    pub fn load() -> Result<Self, regex::Error> {
        let patterns = DATA_LOAD_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Total data-load call sites found in the file at `path`.
    pub fn count_data_loads(&self, path: &Path) -> TargetResult<usize> {
        let content =
            fs::read_to_string(path).map_err(|e| TargetError::from_io(e, path))?;
        Ok(self
            .patterns
            .iter()
            .map(|p| p.find_iter(&content).count())
            .sum())
    }
}
