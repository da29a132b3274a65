pub mod json;
pub mod text;

use crate::model::binary_type::BinaryType;
use crate::model::evaluation::{Evaluation, ProcessFailure};

#[derive(Debug, Clone)]
pub struct SummaryData {
    pub tool_name: String,
    pub tool_version: String,
    pub input_dir: String,
    pub binary_type: BinaryType,
    pub tpr_target: f64,
    pub evaluations: Vec<Evaluation>,
    pub failures: Vec<ProcessFailure>,
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

/// One decimal, or `inf` when no background survives the cut.
pub fn format_rejection(v: f64) -> String {
    if v.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.1}", v)
    }
}
