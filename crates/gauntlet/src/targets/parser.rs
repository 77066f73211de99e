//! Lightweight source parser and logging-usage checker.
//!
//! This is a lint-grade structural parse, not a full grammar: it strips
//! string literals and comments, then rejects unterminated literals,
//! unbalanced brackets, and characters illegal in the grammar. That is
//! enough surface for the harness to probe both the success path and the
//! parse-failure path.

use std::fmt;
use std::fs;
use std::path::Path;

use regex::Regex;

use super::{NameArg, TargetError, TargetResult};

/// Pattern matching a logging call site.
const LOG_CALL_PATTERN: &str = r"\b(?:logging|logger|log|tf\.logging)\.[A-Za-z_]+\s*\(";

/// Characters the grammar never allows outside strings and comments.
const ILLEGAL_CHARS: &[char] = &['$', '?', '`'];

/// Result of a successful parse: the code statements of the file, with
/// comments and blank lines dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct ParsedSource {
    pub statements: Vec<String>,
}

impl fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParsedSource({} statements)", self.statements.len())
    }
}

/// Parses source files and checks logging usage on the parsed form.
pub struct SourceParser {
    log_call: Regex,
}

impl SourceParser {
    pub fn load() -> Result<Self, regex::Error> {
        Ok(Self {
            log_call: Regex::new(LOG_CALL_PATTERN)?,
        })
    }

    /// Parse the file at `path` into its statement list.
    pub fn parse(&self, path: &Path) -> TargetResult<ParsedSource> {
        let content =
            fs::read_to_string(path).map_err(|e| TargetError::from_io(e, path))?;
        parse_source(&content)
    }

    /// Count logging-call statements that mention the tracked name.
    ///
    /// An empty name matches every logging call. Null and numeric names
    /// are rejected as type mismatches.
    pub fn check_logging_usage(
        &self,
        parsed: &ParsedSource,
        name: &NameArg,
    ) -> TargetResult<usize> {
        let needle = match name {
            NameArg::Text(s) => s,
            NameArg::Number(n) => {
                return Err(TargetError::TypeMismatch(format!(
                    "name to track must be a string, got number {n}"
                )));
            }
            NameArg::Null => {
                return Err(TargetError::TypeMismatch(
                    "name to track must be a string, got None".to_string(),
                ));
            }
        };
        Ok(parsed
            .statements
            .iter()
            .filter(|line| self.log_call.is_match(line) && line.contains(needle))
            .count())
    }
}

fn parse_source(content: &str) -> TargetResult<ParsedSource> {
    let stripped = strip_triple_quoted(content)?;

    let mut statements = Vec::new();
    let mut depth: i64 = 0;
    for (idx, line) in stripped.lines().enumerate() {
        let code = strip_inline(line, idx + 1)?;
        for c in code.chars() {
            match c {
                '(' | '[' | '{' => depth += 1,
                ')' | ']' | '}' => depth -= 1,
                _ => {}
            }
            if ILLEGAL_CHARS.contains(&c) {
                return Err(TargetError::ParseFailure(format!(
                    "illegal character {c:?} at line {}",
                    idx + 1
                )));
            }
        }
        if !code.trim().is_empty() {
            statements.push(code.trim().to_string());
        }
    }

    if depth != 0 {
        return Err(TargetError::ParseFailure(
            "unbalanced brackets".to_string(),
        ));
    }

    Ok(ParsedSource { statements })
}

/// Remove triple-quoted blocks; a dangling delimiter is a parse failure.
fn strip_triple_quoted(content: &str) -> TargetResult<String> {
    let mut out = content.to_string();
    for delim in ["'''", "\"\"\""] {
        let parts: Vec<&str> = out.split(delim).collect();
        if parts.len() % 2 == 0 {
            return Err(TargetError::ParseFailure(
                "unterminated triple-quoted string".to_string(),
            ));
        }
        out = parts
            .iter()
            .step_by(2)
            .copied()
            .collect::<Vec<_>>()
            .join("\n");
    }
    Ok(out)
}

/// Strip string literals and the trailing comment from one line, keeping
/// only code text. An open literal at end of line is a parse failure.
fn strip_inline(line: &str, line_no: usize) -> TargetResult<String> {
    let mut code = String::new();
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for c in line.chars() {
        match in_string {
            Some(quote) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == quote {
                    in_string = None;
                }
            }
            None => match c {
                '\'' | '"' => in_string = Some(c),
                '#' => break,
                _ => code.push(c),
            },
        }
    }

    if in_string.is_some() {
        return Err(TargetError::ParseFailure(format!(
            "unterminated string literal at line {line_no}"
        )));
    }
    Ok(code)
}
