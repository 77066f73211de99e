//! Random input generation.
//!
//! Pure generators for primitive values (strings, source-like text, dates)
//! plus materialization of ephemeral filesystem resources for targets that
//! take file or directory inputs. Generated resources are scoped to a single
//! invocation: they are deleted on drop, on both the success and failure
//! paths, and deletion errors are swallowed (best-effort cleanup).

mod fs;
mod text;

pub use fs::{DirSpec, materialize_dir, materialize_file};
pub use text::{
    random_data_load_text, random_date, random_logging_text, random_source_text, random_string,
};
