use std::path::{Path, PathBuf};

use plotters::prelude::*;
use thiserror::Error;

use crate::model::roc::RocCurve;
use crate::pipeline::stage3_roc::Stage3Output;

/// 10 x 8 inches at 150 dpi.
pub const PLOT_SIZE: (u32, u32) = (1500, 1200);

const FONT: &str = "sans-serif";

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to draw {}: {message}", path.display())]
    Draw { path: PathBuf, message: String },
}

pub fn plot_file_name(process: &str) -> String {
    format!("roc_{process}_binary.png")
}

pub fn legend_label(process: &str, auc: f64, rejection: f64, tpr_target: f64) -> String {
    format!(
        "{process} (AUC={auc:.4}, Rej@{:.0}%={rejection:.0})",
        tpr_target * 100.0
    )
}

pub fn run_stage4(
    plots_dir: &Path,
    process: &str,
    stage3: &Stage3Output,
) -> Result<PathBuf, PlotError> {
    let path = plots_dir.join(plot_file_name(process));
    let label = legend_label(
        process,
        stage3.auc,
        stage3.rejection_at_target,
        stage3.tpr_target,
    );
    draw_roc(&path, process, &stage3.curve, &label).map_err(|e| PlotError::Draw {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(path)
}

fn draw_roc(
    path: &Path,
    process: &str,
    curve: &RocCurve,
    label: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("ROC Curve: {process} vs QCD"), (FONT, 42))
        .margin(30)
        .x_label_area_size(90)
        .y_label_area_size(110)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;

    chart
        .configure_mesh()
        .x_desc("True Positive Rate (Signal Efficiency)")
        .y_desc("Background Rejection (FPR)")
        .axis_desc_style((FONT, 36))
        .label_style((FONT, 28))
        .bold_line_style(BLACK.mix(0.3))
        .light_line_style(BLACK.mix(0.08))
        .draw()?;

    chart
        .draw_series(LineSeries::new(curve.points(), BLUE.stroke_width(3)))?
        .label(label)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], BLUE.stroke_width(3)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerLeft)
        .label_font((FONT, 30))
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_plot.rs"]
mod tests;
