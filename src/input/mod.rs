use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod root;

pub use root::RootEventSource;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("failed to read {}: {message}", path.display())]
    Root { path: PathBuf, message: String },
    #[error("branch `{branch}` not found in {}", path.display())]
    MissingBranch { path: PathBuf, branch: String },
    #[error(
        "branch `{branch}` in {} has unsupported type `{type_name}` (expected a float, double or 32/64-bit integer)",
        path.display()
    )]
    UnsupportedBranchType {
        path: PathBuf,
        branch: String,
        type_name: String,
    },
    #[error("{} returned {got} columns, {expected} requested", path.display())]
    ColumnCount {
        path: PathBuf,
        expected: usize,
        got: usize,
    },
    #[error(
        "branch length mismatch in {}: `{signal_branch}` has {n_signal} entries, `{background_branch}` has {n_background}",
        path.display()
    )]
    LengthMismatch {
        path: PathBuf,
        signal_branch: String,
        background_branch: String,
        n_signal: usize,
        n_background: usize,
    },
}

/// Columnar access to the per-event tables of prediction files.
pub trait EventSource {
    /// Reads every named branch of the events table in `path`, widened to f64,
    /// in the order given.
    fn read_branches(&self, path: &Path, branches: &[&str]) -> Result<Vec<Vec<f64>>, InputError>;
}

pub fn prediction_file_name(binary_type: &str, process: &str) -> String {
    format!("pred_{binary_type}_{process}.root")
}

pub fn prediction_path(dir: &Path, binary_type: &str, process: &str) -> PathBuf {
    dir.join(prediction_file_name(binary_type, process))
}

/// Plain file names of the directory entries, sorted for stable detection logs.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>, InputError> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;

#[cfg(test)]
#[path = "../../tests/src_inline/input/support.rs"]
pub mod test_support;
