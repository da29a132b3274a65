pub mod stage1_detect;
pub mod stage2_discriminant;
pub mod stage3_roc;
pub mod stage4_plot;
pub mod stage5_report;

use std::path::Path;

use thiserror::Error;

use crate::input::{EventSource, InputError};
use crate::model::binary_type::BinaryType;
use crate::model::evaluation::Evaluation;
use crate::pipeline::stage2_discriminant::run_stage2;
use crate::pipeline::stage3_roc::{EvalError, run_stage3};
use crate::pipeline::stage4_plot::{PlotError, run_stage4};

/// Anything that can sink a single signal process without stopping the run.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to load scores")]
    Input(#[from] InputError),
    #[error("failed to evaluate ROC")]
    Eval(#[from] EvalError),
    #[error("failed to plot ROC")]
    Plot(#[from] PlotError),
}

/// Stages 2-4 for one signal process against QCD.
pub fn run_process(
    source: &dyn EventSource,
    input_dir: &Path,
    plots_dir: &Path,
    binary_type: &BinaryType,
    process: &str,
    tpr_target: f64,
) -> Result<Evaluation, ProcessError> {
    let scores = run_stage2(source, input_dir, binary_type, process)?;
    tracing::debug!(
        process,
        n_signal = scores.n_signal,
        n_background = scores.n_background,
        "loaded discriminants"
    );

    let stage3 = run_stage3(&scores, tpr_target)?;

    println!("\nProcess: {process}");
    println!("AUC = {:.4}", stage3.auc);
    println!(
        "Rejection at {:.1}% TPR = {:.1}",
        tpr_target * 100.0,
        stage3.rejection_at_target
    );

    let plot_path = run_stage4(plots_dir, process, &stage3)?;
    println!("Saved to {}", plot_path.display());

    Ok(Evaluation {
        process: process.to_string(),
        auc: stage3.auc,
        tpr_target: stage3.tpr_target,
        rejection_at_target: stage3.rejection_at_target,
        n_signal: scores.n_signal,
        n_background: scores.n_background,
        curve: stage3.curve,
        rejection: stage3.rejection,
        plot_path,
    })
}
