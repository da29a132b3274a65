use std::path::Path;

use crate::input::{EventSource, InputError, prediction_path};
use crate::model::binary_type::{BinaryType, QCD_BRANCH, QCD_PROCESS, signal_members};
use crate::model::scores::{ScoreSet, ratio_discriminant};

/// Discriminant of every event in one prediction file.
pub fn load_discriminant(
    source: &dyn EventSource,
    path: &Path,
    score_branch: &str,
) -> Result<Vec<f64>, InputError> {
    let columns = source.read_branches(path, &[score_branch, QCD_BRANCH])?;
    let got = columns.len();
    let Ok([signal, background]) = <[Vec<f64>; 2]>::try_from(columns) else {
        return Err(InputError::ColumnCount {
            path: path.to_path_buf(),
            expected: 2,
            got,
        });
    };
    if signal.len() != background.len() {
        return Err(InputError::LengthMismatch {
            path: path.to_path_buf(),
            signal_branch: score_branch.to_string(),
            background_branch: QCD_BRANCH.to_string(),
            n_signal: signal.len(),
            n_background: background.len(),
        });
    }
    Ok(ratio_discriminant(&signal, &background))
}

/// Signal events of `process` (member files concatenated in order) against QCD.
pub fn run_stage2(
    source: &dyn EventSource,
    dir: &Path,
    binary_type: &BinaryType,
    process: &str,
) -> Result<ScoreSet, InputError> {
    let mut signal = Vec::new();
    for member in signal_members(process) {
        let path = prediction_path(dir, binary_type.name, member);
        signal.extend(load_discriminant(source, &path, binary_type.score_branch)?);
    }

    let qcd_path = prediction_path(dir, binary_type.name, QCD_PROCESS);
    let background = load_discriminant(source, &qcd_path, binary_type.score_branch)?;

    Ok(ScoreSet::from_parts(background, signal))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_discriminant.rs"]
mod tests;
