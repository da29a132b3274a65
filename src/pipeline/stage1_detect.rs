use std::path::Path;

use thiserror::Error;

use crate::input::{InputError, list_file_names};
use crate::model::binary_type::{BinaryType, KNOWN_BINARY_TYPES};

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("cannot list {}", path.display())]
    List {
        path: std::path::PathBuf,
        #[source]
        source: InputError,
    },
    #[error("cannot detect binary classification type from files in {}", path.display())]
    NoMatch { path: std::path::PathBuf },
}

/// First known layout whose name occurs in any of `names`.
pub fn detect_from_names<S: AsRef<str>>(names: &[S]) -> Option<BinaryType> {
    KNOWN_BINARY_TYPES
        .iter()
        .find(|bt| names.iter().any(|n| n.as_ref().contains(bt.name)))
        .copied()
}

pub fn run_stage1(dir: &Path) -> Result<BinaryType, DetectError> {
    let names = list_file_names(dir).map_err(|source| DetectError::List {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(n_files = names.len(), dir = %dir.display(), "scanning for prediction files");
    detect_from_names(&names).ok_or_else(|| DetectError::NoMatch {
        path: dir.to_path_buf(),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_detect.rs"]
mod tests;
