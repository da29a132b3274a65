use std::path::PathBuf;

use serde::Serialize;

use crate::model::roc::RocCurve;

/// Per-process outcome kept for the summary report.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub process: String,
    pub auc: f64,
    pub tpr_target: f64,
    pub rejection_at_target: f64,
    pub n_signal: usize,
    pub n_background: usize,
    pub curve: RocCurve,
    /// `1 / fpr` per curve point, NaN where fpr is zero.
    pub rejection: Vec<f64>,
    pub plot_path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessFailure {
    pub process: String,
    pub error: String,
}
