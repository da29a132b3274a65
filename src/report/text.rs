use crate::report::{SummaryData, format_f64_4, format_rejection};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Signal vs QCD ROC Summary\n");
    out.push_str("=========================\n\n");

    out.push_str(&format!("Binary type: {}\n", data.binary_type.name));
    out.push_str(&format!("Score branch: {}\n", data.binary_type.score_branch));
    out.push_str(&format!("Input: {}\n", data.input_dir));
    out.push_str(&format!(
        "Rejection quoted at {:.1}% TPR\n\n",
        data.tpr_target * 100.0
    ));

    let rej_header = format!("rej@{:.0}%", data.tpr_target * 100.0);
    out.push_str(&format!(
        "{:<10} {:>8} {:>12} {:>10} {:>12}\n",
        "process", "auc", rej_header, "n_signal", "n_background"
    ));
    for e in &data.evaluations {
        out.push_str(&format!(
            "{:<10} {:>8} {:>12} {:>10} {:>12}\n",
            e.process,
            format_f64_4(e.auc),
            format_rejection(e.rejection_at_target),
            e.n_signal,
            e.n_background
        ));
    }

    if !data.failures.is_empty() {
        out.push_str("\nFailed processes\n");
        for f in &data.failures {
            let first_line = f.error.lines().next().unwrap_or_default();
            out.push_str(&format!("{}: {}\n", f.process, first_line));
        }
    }

    out
}
