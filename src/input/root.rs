use std::path::Path;

use oxyroot::RootFile;

use crate::input::{EventSource, InputError};

pub const EVENTS_TREE: &str = "Events";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnType {
    Float,
    Double,
    Int32,
    Int64,
    UInt32,
    UInt64,
}

impl ColumnType {
    /// Accepts both the C++ (`int32_t`) and ROOT (`Int_t`) spellings.
    fn from_type_name(type_name: &str) -> Option<Self> {
        let lower = type_name.to_ascii_lowercase();
        if lower.contains("double") {
            Some(ColumnType::Double)
        } else if lower.contains("float") {
            Some(ColumnType::Float)
        } else if lower.contains("uint64") || lower.contains("ulong64") {
            Some(ColumnType::UInt64)
        } else if lower.contains("uint32") || lower == "uint_t" || lower == "unsigned int" {
            Some(ColumnType::UInt32)
        } else if lower.contains("int64") || lower.contains("long64") {
            Some(ColumnType::Int64)
        } else if lower.contains("int32") || lower == "int_t" || lower == "int" {
            Some(ColumnType::Int32)
        } else {
            None
        }
    }
}

/// Reads scalar score branches from the `Events` tree of ROOT files.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootEventSource;

impl EventSource for RootEventSource {
    fn read_branches(&self, path: &Path, branches: &[&str]) -> Result<Vec<Vec<f64>>, InputError> {
        if !path.is_file() {
            return Err(InputError::MissingFile(path.to_path_buf()));
        }
        let mut file = RootFile::open(path).map_err(|e| root_error(path, e))?;
        let tree = file
            .get_tree(EVENTS_TREE)
            .map_err(|e| root_error(path, e))?;
        tracing::debug!(path = %path.display(), "opened events tree");

        let mut columns = Vec::with_capacity(branches.len());
        for &name in branches {
            let branch = tree
                .branch(name)
                .ok_or_else(|| InputError::MissingBranch {
                    path: path.to_path_buf(),
                    branch: name.to_string(),
                })?;
            let type_name = branch.item_type_name();
            let values = match ColumnType::from_type_name(&type_name) {
                Some(ColumnType::Float) => branch
                    .as_iter::<f32>()
                    .map_err(|e| root_error(path, e))?
                    .map(f64::from)
                    .collect::<Vec<_>>(),
                Some(ColumnType::Double) => branch
                    .as_iter::<f64>()
                    .map_err(|e| root_error(path, e))?
                    .collect::<Vec<_>>(),
                Some(ColumnType::Int32) => branch
                    .as_iter::<i32>()
                    .map_err(|e| root_error(path, e))?
                    .map(f64::from)
                    .collect::<Vec<_>>(),
                Some(ColumnType::UInt32) => branch
                    .as_iter::<u32>()
                    .map_err(|e| root_error(path, e))?
                    .map(f64::from)
                    .collect::<Vec<_>>(),
                Some(ColumnType::Int64) => branch
                    .as_iter::<i64>()
                    .map_err(|e| root_error(path, e))?
                    .map(|v| v as f64)
                    .collect::<Vec<_>>(),
                Some(ColumnType::UInt64) => branch
                    .as_iter::<u64>()
                    .map_err(|e| root_error(path, e))?
                    .map(|v| v as f64)
                    .collect::<Vec<_>>(),
                None => {
                    return Err(InputError::UnsupportedBranchType {
                        path: path.to_path_buf(),
                        branch: name.to_string(),
                        type_name,
                    });
                }
            };
            columns.push(values);
        }
        Ok(columns)
    }
}

fn root_error(path: &Path, err: impl std::fmt::Display) -> InputError {
    InputError::Root {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/root.rs"]
mod tests;
