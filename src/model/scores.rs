/// Discriminant values with provenance labels, background first.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSet {
    pub scores: Vec<f64>,
    pub labels: Vec<bool>,
    pub n_signal: usize,
    pub n_background: usize,
}

impl ScoreSet {
    pub fn from_parts(background: Vec<f64>, signal: Vec<f64>) -> Self {
        let n_background = background.len();
        let n_signal = signal.len();
        let mut scores = background;
        scores.extend(signal);
        let mut labels = vec![false; n_background];
        labels.resize(n_background + n_signal, true);
        Self {
            scores,
            labels,
            n_signal,
            n_background,
        }
    }
}

/// `signal / (signal + background)` per event.
pub fn ratio_discriminant(signal: &[f64], background: &[f64]) -> Vec<f64> {
    signal
        .iter()
        .zip(background)
        .map(|(&s, &b)| s / (s + b))
        .collect()
}
