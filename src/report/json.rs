use serde::{Serialize, Serializer};

use crate::model::evaluation::{Evaluation, ProcessFailure};
use crate::report::SummaryData;

#[derive(Serialize)]
struct SummaryJson<'a> {
    tool: &'a str,
    tool_meta: ToolMeta<'a>,
    input: InputJson<'a>,
    tpr_target: f64,
    results: Vec<ResultJson<'a>>,
    failures: &'a [ProcessFailure],
}

#[derive(Serialize)]
struct ToolMeta<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Serialize)]
struct InputJson<'a> {
    dir: &'a str,
    binary_type: &'a str,
    score_branch: &'a str,
    processes: &'a [&'a str],
}

#[derive(Serialize)]
struct ResultJson<'a> {
    process: &'a str,
    auc: f64,
    tpr_target: f64,
    #[serde(serialize_with = "serialize_rejection")]
    rejection_at_target: f64,
    n_signal: usize,
    n_background: usize,
    plot: String,
    // Non-finite entries (the leading threshold, NaN rejection) serialize as null.
    curve: CurveJson<'a>,
}

#[derive(Serialize)]
struct CurveJson<'a> {
    tpr: &'a [f64],
    fpr: &'a [f64],
    thresholds: &'a [f64],
    rejection: &'a [f64],
}

fn serialize_rejection<S: Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if v.is_infinite() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_f64(*v)
    }
}

fn result_json(e: &Evaluation) -> ResultJson<'_> {
    ResultJson {
        process: &e.process,
        auc: e.auc,
        tpr_target: e.tpr_target,
        rejection_at_target: e.rejection_at_target,
        n_signal: e.n_signal,
        n_background: e.n_background,
        plot: e.plot_path.display().to_string(),
        curve: CurveJson {
            tpr: &e.curve.tpr,
            fpr: &e.curve.fpr,
            thresholds: &e.curve.thresholds,
            rejection: &e.rejection,
        },
    }
}

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    let summary = SummaryJson {
        tool: &data.tool_name,
        tool_meta: ToolMeta {
            name: &data.tool_name,
            version: &data.tool_version,
        },
        input: InputJson {
            dir: &data.input_dir,
            binary_type: data.binary_type.name,
            score_branch: data.binary_type.score_branch,
            processes: data.binary_type.processes,
        },
        tpr_target: data.tpr_target,
        results: data.evaluations.iter().map(result_json).collect(),
        failures: &data.failures,
    };
    serde_json::to_string_pretty(&summary)
}
