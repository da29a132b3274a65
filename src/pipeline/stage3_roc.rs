use thiserror::Error;

use crate::model::roc::RocCurve;
use crate::model::scores::ScoreSet;

/// Signal efficiency at which background rejection is quoted, for every process.
pub const TPR_TARGET: f64 = 0.50;

#[derive(Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("no events to evaluate")]
    Empty,
    #[error("{n_scores} scores but {n_labels} labels")]
    LengthMismatch { n_scores: usize, n_labels: usize },
    #[error("only one class present ({n_signal} signal, {n_background} background events)")]
    SingleClass { n_signal: usize, n_background: usize },
    #[error("non-finite discriminant {value} at event {index}")]
    NonFinite { index: usize, value: f64 },
}

#[derive(Debug, Clone)]
pub struct Stage3Output {
    pub auc: f64,
    pub curve: RocCurve,
    pub rejection: Vec<f64>,
    pub tpr_target: f64,
    pub rejection_at_target: f64,
}

pub fn run_stage3(scores: &ScoreSet, tpr_target: f64) -> Result<Stage3Output, EvalError> {
    let auc = roc_auc(&scores.scores, &scores.labels)?;
    let curve = roc_curve(&scores.scores, &scores.labels)?;
    let rejection = rejection_curve(&curve.fpr);
    let rejection_at_target = rejection_at(&curve, tpr_target);
    tracing::debug!(n_points = curve.len(), auc, rejection_at_target, "roc evaluated");
    Ok(Stage3Output {
        auc,
        curve,
        rejection,
        tpr_target,
        rejection_at_target,
    })
}

fn validate(scores: &[f64], labels: &[bool]) -> Result<(usize, usize), EvalError> {
    if scores.len() != labels.len() {
        return Err(EvalError::LengthMismatch {
            n_scores: scores.len(),
            n_labels: labels.len(),
        });
    }
    if scores.is_empty() {
        return Err(EvalError::Empty);
    }
    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EvalError::NonFinite { index, value });
    }
    let n_signal = labels.iter().filter(|&&l| l).count();
    let n_background = labels.len() - n_signal;
    if n_signal == 0 || n_background == 0 {
        return Err(EvalError::SingleClass {
            n_signal,
            n_background,
        });
    }
    Ok((n_signal, n_background))
}

/// Rank-based (Mann-Whitney) AUC. Tied scores share their mid-rank.
pub fn roc_auc(scores: &[f64], labels: &[bool]) -> Result<f64, EvalError> {
    let (n_signal, n_background) = validate(scores, labels)?;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));

    let mut signal_rank_sum = 0.0f64;
    let mut i = 0usize;
    while i < order.len() {
        let mut j = i;
        while j + 1 < order.len() && scores[order[j + 1]] == scores[order[i]] {
            j += 1;
        }
        // 1-based positions i+1..=j+1 share their average.
        let mid_rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            if labels[idx] {
                signal_rank_sum += mid_rank;
            }
        }
        i = j + 1;
    }

    let s = n_signal as f64;
    let u = signal_rank_sum - s * (s + 1.0) / 2.0;
    Ok(u / (s * n_background as f64))
}

/// ROC curve over every distinct threshold, highest first. Collinear
/// intermediate points are dropped; they do not change the curve's shape.
pub fn roc_curve(scores: &[f64], labels: &[bool]) -> Result<RocCurve, EvalError> {
    validate(scores, labels)?;

    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    let mut tps: Vec<u64> = Vec::new();
    let mut fps: Vec<u64> = Vec::new();
    let mut thresholds: Vec<f64> = Vec::new();
    let mut tp = 0u64;
    let mut fp = 0u64;
    for (pos, &idx) in order.iter().enumerate() {
        if labels[idx] {
            tp += 1;
        } else {
            fp += 1;
        }
        let last_of_group = order
            .get(pos + 1)
            .is_none_or(|&next| scores[next] != scores[idx]);
        if last_of_group {
            tps.push(tp);
            fps.push(fp);
            thresholds.push(scores[idx]);
        }
    }

    let keep = non_collinear(&fps, &tps);
    let total_pos = tp as f64;
    let total_neg = fp as f64;

    let mut curve = RocCurve {
        fpr: Vec::with_capacity(keep.len() + 1),
        tpr: Vec::with_capacity(keep.len() + 1),
        thresholds: Vec::with_capacity(keep.len() + 1),
    };
    curve.fpr.push(0.0);
    curve.tpr.push(0.0);
    curve.thresholds.push(f64::INFINITY);
    for k in keep {
        curve.fpr.push(fps[k] as f64 / total_neg);
        curve.tpr.push(tps[k] as f64 / total_pos);
        curve.thresholds.push(thresholds[k]);
    }
    Ok(curve)
}

/// Indices of points where the cumulative counts change slope, plus both ends.
fn non_collinear(fps: &[u64], tps: &[u64]) -> Vec<usize> {
    let n = fps.len();
    if n <= 2 {
        return (0..n).collect();
    }
    let second_diff = |v: &[u64], i: usize| v[i + 1] as i64 - 2 * v[i] as i64 + v[i - 1] as i64;
    let mut keep = Vec::with_capacity(n);
    keep.push(0);
    for i in 1..n - 1 {
        if second_diff(fps, i) != 0 || second_diff(tps, i) != 0 {
            keep.push(i);
        }
    }
    keep.push(n - 1);
    keep
}

/// `1 / fpr` per point; NaN where fpr is zero.
pub fn rejection_curve(fpr: &[f64]) -> Vec<f64> {
    fpr.iter()
        .map(|&f| if f > 0.0 { 1.0 / f } else { f64::NAN })
        .collect()
}

/// Piecewise-linear interpolation of `fp` over increasing `xp`.
///
/// Outside the sampled range the end values are returned. When several `xp`
/// equal `x`, the value at the last of them is used.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return f64::NAN;
    }
    let upper = xp[..n].partition_point(|&v| v <= x);
    if upper == 0 {
        return fp[0];
    }
    let j = upper - 1;
    if j == n - 1 {
        return fp[n - 1];
    }
    let dx = xp[j + 1] - xp[j];
    if dx == 0.0 {
        return fp[j];
    }
    fp[j] + (fp[j + 1] - fp[j]) * (x - xp[j]) / dx
}

/// Background rejection at `tpr_target`; infinite when no background passes.
pub fn rejection_at(curve: &RocCurve, tpr_target: f64) -> f64 {
    let fpr_at_target = interp(tpr_target, &curve.tpr, &curve.fpr);
    if fpr_at_target == 0.0 {
        f64::INFINITY
    } else {
        1.0 / fpr_at_target
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_roc.rs"]
mod tests;
