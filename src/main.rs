mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::input::{EventSource, RootEventSource};
use crate::model::evaluation::ProcessFailure;
use crate::pipeline::run_process;
use crate::pipeline::stage1_detect::{DetectError, run_stage1};
use crate::pipeline::stage3_roc::TPR_TARGET;
use crate::pipeline::stage5_report::{ReportError, write_reports};
use crate::report::SummaryData;

const PLOTS_SUBDIR: &str = "plots";

/// Signal-vs-QCD ROC, AUC and background rejection for tagger prediction files.
#[derive(Debug, Parser)]
#[command(name = "tagger-roc", version, about)]
struct Cli {
    /// Directory holding pred_<type>_<process>.root files; plots go to <dir>/plots
    output_dir: PathBuf,
}

#[derive(Debug, Clone)]
struct RunConfig {
    input_dir: PathBuf,
    plots_dir: PathBuf,
    tpr_target: f64,
}

impl RunConfig {
    fn from_cli(cli: Cli) -> Self {
        let plots_dir = resolve_plots_dir(&cli.output_dir);
        Self {
            input_dir: cli.output_dir,
            plots_dir,
            tpr_target: TPR_TARGET,
        }
    }
}

#[derive(Debug, Error)]
enum RunError {
    #[error("cannot create {}", path.display())]
    PlotsDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Detect(#[from] DetectError),
    #[error("failed to write summary: {0}")]
    Report(#[from] ReportError),
}

fn main() {
    logging::init();
    let config = RunConfig::from_cli(Cli::parse());
    if let Err(err) = run(&config, &RootEventSource) {
        tracing::error!("{}", logging::error_chain(&err));
        std::process::exit(1);
    }
}

fn run(config: &RunConfig, source: &dyn EventSource) -> Result<(), RunError> {
    std::fs::create_dir_all(&config.plots_dir).map_err(|source| RunError::PlotsDir {
        path: config.plots_dir.clone(),
        source,
    })?;

    let binary_type = run_stage1(&config.input_dir)?;
    println!("Detected binary type: {}", binary_type.name);
    println!("Processing: {}", format_process_list(binary_type.processes));
    println!("Score branch: {}", binary_type.score_branch);

    let mut evaluations = Vec::with_capacity(binary_type.processes.len());
    let mut failures = Vec::new();
    for &process in binary_type.processes {
        match run_process(
            source,
            &config.input_dir,
            &config.plots_dir,
            &binary_type,
            process,
            config.tpr_target,
        ) {
            Ok(evaluation) => evaluations.push(evaluation),
            Err(err) => {
                let chain = logging::error_chain(&err);
                tracing::error!(process, "error processing {process}: {chain}");
                failures.push(ProcessFailure {
                    process: process.to_string(),
                    error: chain,
                });
            }
        }
    }

    if !failures.is_empty() {
        tracing::warn!(
            failed = failures.len(),
            total = binary_type.processes.len(),
            "some processes were skipped"
        );
    }

    let summary = SummaryData {
        tool_name: env!("CARGO_PKG_NAME").to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        input_dir: config.input_dir.display().to_string(),
        binary_type,
        tpr_target: config.tpr_target,
        evaluations,
        failures,
    };
    write_reports(&summary, &config.plots_dir)?;

    Ok(())
}

fn format_process_list(processes: &[&str]) -> String {
    let quoted: Vec<String> = processes.iter().map(|p| format!("'{p}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn resolve_plots_dir(output_dir: &Path) -> PathBuf {
    output_dir.join(PLOTS_SUBDIR)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
