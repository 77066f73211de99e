//! Ephemeral filesystem inputs.
//!
//! Targets that read files or scan directories get uniquely-named temp
//! resources. `NamedTempFile` and `TempDir` delete themselves on drop,
//! which gives the guaranteed-release discipline the harness needs:
//! cleanup runs on both success and failure paths, and a failed deletion
//! is silently discarded rather than surfacing into the bug report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tempfile::{Builder, NamedTempFile, TempDir};

use crate::error::{GauntletError, Result};
use super::text::{random_source_text, random_string};

/// Extensions used for the non-matching files in a generated directory.
const OTHER_EXTENSIONS: &[&str] = &["txt", "md", "json", "yml"];

/// Shape of a generated directory for the file-count campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirSpec {
    /// Number of `.py` files.
    pub source_files: usize,
    /// Number of files with non-matching extensions.
    pub other_files: usize,
    /// Number of `.ipynb` files.
    pub notebook_files: usize,
}

impl DirSpec {
    /// Random population: 0..=10 source files, 0..=5 others, 0..=3 notebooks.
    pub fn random() -> Self {
        Self {
            source_files: fastrand::usize(0..=10),
            other_files: fastrand::usize(0..=5),
            notebook_files: fastrand::usize(0..=3),
        }
    }

    /// The count a correct source-file counter should report: source files
    /// plus notebooks, regardless of how many other files are present.
    pub fn expected_count(&self) -> usize {
        self.source_files + self.notebook_files
    }
}

/// Write `content` to a uniquely-named temporary `.py` file.
///
/// The file is deleted when the returned handle drops.
pub fn materialize_file(content: &str) -> Result<NamedTempFile> {
    let mut file = Builder::new()
        .prefix("gauntlet-")
        .suffix(".py")
        .tempfile()
        .map_err(|e| GauntletError::Io {
            path: std::env::temp_dir(),
            source: e,
        })?;
    file.write_all(content.as_bytes())
        .map_err(|e| GauntletError::Io {
            path: file.path().to_path_buf(),
            source: e,
        })?;
    Ok(file)
}

/// Create a fresh temporary directory populated per `spec`.
///
/// The directory and its contents are deleted when the handle drops.
pub fn materialize_dir(spec: &DirSpec) -> Result<TempDir> {
    let dir = Builder::new()
        .prefix("gauntlet-")
        .tempdir()
        .map_err(|e| GauntletError::Io {
            path: std::env::temp_dir(),
            source: e,
        })?;

    for i in 0..spec.source_files {
        write_entry(dir.path(), &format!("test{i}.py"), &random_source_text())?;
    }
    for i in 0..spec.other_files {
        let ext = OTHER_EXTENSIONS[fastrand::usize(0..OTHER_EXTENSIONS.len())];
        write_entry(dir.path(), &format!("file{i}.{ext}"), &random_string(None))?;
    }
    for i in 0..spec.notebook_files {
        write_entry(dir.path(), &format!("notebook{i}.ipynb"), "{\"cells\": []}")?;
    }

    Ok(dir)
}

fn write_entry(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    let mut file = File::create(&path).map_err(|e| GauntletError::Io {
        path: path.clone(),
        source: e,
    })?;
    file.write_all(content.as_bytes())
        .map_err(|e| GauntletError::Io { path, source: e })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_materialize_file_roundtrip() {
        let file = materialize_file("x = 1\n").unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "x = 1\n");
        assert_eq!(file.path().extension().unwrap(), "py");
    }

    #[test]
    fn test_materialize_file_deleted_on_drop() {
        let path = {
            let file = materialize_file("").unwrap();
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_materialize_dir_population() {
        let spec = DirSpec {
            source_files: 3,
            other_files: 2,
            notebook_files: 1,
        };
        let dir = materialize_dir(&spec).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().path())
            .collect();
        assert_eq!(entries.len(), 6);
        let py = entries
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == "py"))
            .count();
        let ipynb = entries
            .iter()
            .filter(|p| p.extension().is_some_and(|e| e == "ipynb"))
            .count();
        assert_eq!(py, 3);
        assert_eq!(ipynb, 1);
    }

    #[test]
    fn test_expected_count_ignores_other_files() {
        let spec = DirSpec {
            source_files: 3,
            other_files: 2,
            notebook_files: 1,
        };
        assert_eq!(spec.expected_count(), 4);
    }
}
