use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::report::SummaryData;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

pub const SUMMARY_JSON: &str = "roc_summary.json";
pub const SUMMARY_TEXT: &str = "roc_summary.txt";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn write_reports(data: &SummaryData, plots_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(plots_dir)?;

    let json = render_summary_json(data)?;
    write_text(&plots_dir.join(SUMMARY_JSON), &json)?;

    let report = render_report_text(data);
    write_text(&plots_dir.join(SUMMARY_TEXT), &report)?;

    tracing::info!(dir = %plots_dir.display(), "wrote summary reports");
    Ok(())
}

fn write_text(path: &Path, text: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
