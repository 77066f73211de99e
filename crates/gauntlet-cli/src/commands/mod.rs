//! CLI command implementations.

pub mod run;
