use super::*;

/// xorshift64*, enough for reproducible synthetic scores.
struct Rng(u64);

impl Rng {
    fn next_f64(&mut self) -> f64 {
        self.0 ^= self.0 >> 12;
        self.0 ^= self.0 << 25;
        self.0 ^= self.0 >> 27;
        let x = self.0.wrapping_mul(0x2545_F491_4F6C_DD1D);
        (x >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn labelled(background: &[f64], signal: &[f64]) -> ScoreSet {
    ScoreSet::from_parts(background.to_vec(), signal.to_vec())
}

#[test]
fn test_auc_perfect_separation() {
    let set = labelled(&[0.1, 0.2, 0.3, 0.35], &[0.4, 0.8, 0.9]);
    let auc = roc_auc(&set.scores, &set.labels).unwrap();
    assert_eq!(auc, 1.0);
}

#[test]
fn test_auc_inverted_separation() {
    let set = labelled(&[0.7, 0.8], &[0.1, 0.2]);
    assert_eq!(roc_auc(&set.scores, &set.labels).unwrap(), 0.0);
}

#[test]
fn test_auc_random_equal_distributions() {
    let mut rng = Rng(0x9E37_79B9_7F4A_7C15);
    let background: Vec<f64> = (0..4000).map(|_| rng.next_f64()).collect();
    let signal: Vec<f64> = (0..4000).map(|_| rng.next_f64()).collect();
    let set = labelled(&background, &signal);
    let auc = roc_auc(&set.scores, &set.labels).unwrap();
    assert!((auc - 0.5).abs() < 0.03, "auc = {auc}");
}

#[test]
fn test_auc_ties_count_half() {
    // One tied pair out of four: (0.5 + 1 + 1 + 1) / 4.
    let set = labelled(&[0.2, 0.5], &[0.5, 0.9]);
    let auc = roc_auc(&set.scores, &set.labels).unwrap();
    assert!((auc - 0.875).abs() < 1e-12);
}

#[test]
fn test_auc_matches_trapezoid_of_curve() {
    let mut rng = Rng(42);
    let background: Vec<f64> = (0..300).map(|_| (rng.next_f64() * 20.0).floor() / 20.0).collect();
    let signal: Vec<f64> = (0..200)
        .map(|_| ((rng.next_f64() * 0.7 + 0.3) * 20.0).floor() / 20.0)
        .collect();
    let set = labelled(&background, &signal);
    let auc = roc_auc(&set.scores, &set.labels).unwrap();
    let curve = roc_curve(&set.scores, &set.labels).unwrap();
    let mut trapezoid = 0.0;
    for i in 1..curve.len() {
        trapezoid += (curve.fpr[i] - curve.fpr[i - 1]) * (curve.tpr[i] + curve.tpr[i - 1]) / 2.0;
    }
    assert!((auc - trapezoid).abs() < 1e-9, "{auc} vs {trapezoid}");
}

#[test]
fn test_roc_curve_points_and_thresholds() {
    let set = labelled(&[0.1, 0.4], &[0.35, 0.8]);
    let curve = roc_curve(&set.scores, &set.labels).unwrap();
    assert_eq!(curve.thresholds, vec![f64::INFINITY, 0.8, 0.4, 0.35, 0.1]);
    assert_eq!(curve.tpr, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
    assert_eq!(curve.fpr, vec![0.0, 0.0, 0.5, 0.5, 1.0]);
}

#[test]
fn test_roc_curve_drops_collinear_points() {
    // Three background events in a row lie on one horizontal run.
    let set = labelled(&[0.1, 0.2, 0.3], &[0.9]);
    let curve = roc_curve(&set.scores, &set.labels).unwrap();
    assert_eq!(curve.thresholds, vec![f64::INFINITY, 0.9, 0.1]);
    assert_eq!(curve.tpr, vec![0.0, 1.0, 1.0]);
    assert_eq!(curve.fpr, vec![0.0, 0.0, 1.0]);
}

#[test]
fn test_roc_curve_is_monotonic() {
    let mut rng = Rng(7);
    let background: Vec<f64> = (0..500).map(|_| rng.next_f64()).collect();
    let signal: Vec<f64> = (0..500).map(|_| rng.next_f64().sqrt()).collect();
    let set = labelled(&background, &signal);
    let curve = roc_curve(&set.scores, &set.labels).unwrap();
    for i in 1..curve.len() {
        assert!(curve.fpr[i] >= curve.fpr[i - 1]);
        assert!(curve.tpr[i] >= curve.tpr[i - 1]);
        assert!(curve.thresholds[i] < curve.thresholds[i - 1]);
    }
    assert_eq!(*curve.fpr.last().unwrap(), 1.0);
    assert_eq!(*curve.tpr.last().unwrap(), 1.0);
}

#[test]
fn test_rejection_curve_nan_where_fpr_zero() {
    let rej = rejection_curve(&[0.0, 0.0, 0.25, 1.0]);
    assert!(rej[0].is_nan());
    assert!(rej[1].is_nan());
    assert_eq!(rej[2], 4.0);
    assert_eq!(rej[3], 1.0);
}

#[test]
fn test_interp_edges_and_ties() {
    let xp = [0.0, 0.4, 0.4, 1.0];
    let fp = [0.0, 0.1, 0.2, 1.0];
    assert_eq!(interp(-1.0, &xp, &fp), 0.0);
    assert_eq!(interp(2.0, &xp, &fp), 1.0);
    assert_eq!(interp(1.0, &xp, &fp), 1.0);
    assert_eq!(interp(0.4, &xp, &fp), 0.2);
    assert!((interp(0.2, &xp, &fp) - 0.05).abs() < 1e-12);
    assert!((interp(0.7, &xp, &fp) - 0.6).abs() < 1e-12);
}

#[test]
fn test_rejection_at_interpolates_monotonic_curve() {
    let curve = RocCurve {
        fpr: vec![0.0, 0.01, 0.03, 0.2, 1.0],
        tpr: vec![0.0, 0.4, 0.6, 0.9, 1.0],
        thresholds: vec![f64::INFINITY, 0.9, 0.7, 0.4, 0.1],
    };
    // fpr(0.5) = 0.01 + (0.03 - 0.01) * (0.5 - 0.4) / (0.6 - 0.4) = 0.02
    let expected = 1.0 / 0.02;
    let rej = rejection_at(&curve, TPR_TARGET);
    assert!((rej - expected).abs() < 1e-9, "rej = {rej}");
}

#[test]
fn test_rejection_at_zero_fpr_is_infinite() {
    let curve = RocCurve {
        fpr: vec![0.0, 0.0, 1.0],
        tpr: vec![0.0, 0.6, 1.0],
        thresholds: vec![f64::INFINITY, 0.5, 0.1],
    };
    let rej = rejection_at(&curve, TPR_TARGET);
    assert!(rej.is_infinite() && rej > 0.0);
}

#[test]
fn test_run_stage3_perfect_separation() {
    let set = labelled(&[0.1, 0.2], &[0.8, 0.9]);
    let out = run_stage3(&set, TPR_TARGET).unwrap();
    assert_eq!(out.auc, 1.0);
    assert!(out.rejection_at_target.is_infinite());
    assert_eq!(out.rejection.len(), out.curve.len());
    assert_eq!(out.tpr_target, 0.5);
}

#[test]
fn test_invalid_inputs() {
    assert_eq!(roc_auc(&[], &[]), Err(EvalError::Empty));
    assert_eq!(
        roc_auc(&[0.1, 0.2], &[true]),
        Err(EvalError::LengthMismatch {
            n_scores: 2,
            n_labels: 1
        })
    );
    assert_eq!(
        roc_curve(&[0.1, 0.2], &[true, true]),
        Err(EvalError::SingleClass {
            n_signal: 2,
            n_background: 0
        })
    );
    let err = roc_auc(&[0.1, f64::NAN], &[false, true]).unwrap_err();
    assert!(matches!(err, EvalError::NonFinite { index: 1, .. }));
}
