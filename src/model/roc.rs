/// ROC curve as parallel columns, ordered by decreasing threshold.
/// The first point is always `(0, 0)` at an infinite threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct RocCurve {
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
    pub thresholds: Vec<f64>,
}

impl RocCurve {
    pub fn len(&self) -> usize {
        self.fpr.len()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.tpr.iter().copied().zip(self.fpr.iter().copied())
    }
}
