use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};

/// Confusion-free classification evaluator over a fixed number of classes.
///
/// Tracks:
/// - overall accuracy;
/// - marginals of predicted (`predicted_share`) and true (`true_share`)
///   classes for Cohen's κ;
/// - per-class precision and recall (macro-averaged when `show_pr_summary`);
/// - the **majority** baseline (predict the most frequent true class seen
///   before the current pair) for κ_m.
pub struct BasicClassificationEvaluator<E: Estimator + Default> {
    correct: E,
    predicted_share: Vec<E>,
    true_share: Vec<E>,
    precision: Vec<E>,
    recall: Vec<E>,
    majority: E,
    true_counts: Vec<usize>,
    seen: usize,
    show_pr_summary: bool,
}

impl<E: Estimator + Default> BasicClassificationEvaluator<E> {
    pub fn new(number_of_classes: usize, show_pr_summary: bool) -> Self {
        let make_vec = || {
            (0..number_of_classes)
                .map(|_| E::default())
                .collect::<Vec<_>>()
        };
        Self {
            correct: E::default(),
            predicted_share: make_vec(),
            true_share: make_vec(),
            precision: make_vec(),
            recall: make_vec(),
            majority: E::default(),
            true_counts: vec![0; number_of_classes],
            seen: 0,
            show_pr_summary,
        }
    }

    pub fn number_of_classes(&self) -> usize {
        self.true_counts.len()
    }

    pub fn seen(&self) -> usize {
        self.seen
    }

    fn majority_class(&self) -> Option<usize> {
        crate::utils::math::majority_index(&self.true_counts)
    }
}

fn ratio_or_nan(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() > f64::EPSILON {
        numerator / denominator
    } else {
        f64::NAN
    }
}

fn finite_mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count > 0 {
        sum / count as f64
    } else {
        f64::NAN
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BasicClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.number_of_classes(), self.show_pr_summary);
    }

    fn add_result(&mut self, true_class: usize, predicted_class: usize) {
        let classes = self.number_of_classes();
        if true_class >= classes || predicted_class >= classes {
            return;
        }
        let hit = if predicted_class == true_class { 1.0 } else { 0.0 };

        self.correct.add(hit);
        if let Some(majority) = self.majority_class() {
            self.majority
                .add(if majority == true_class { 1.0 } else { 0.0 });
        }

        for (c, est) in self.predicted_share.iter_mut().enumerate() {
            est.add(if c == predicted_class { 1.0 } else { 0.0 });
        }
        for (c, est) in self.true_share.iter_mut().enumerate() {
            est.add(if c == true_class { 1.0 } else { 0.0 });
        }
        self.precision[predicted_class].add(hit);
        self.recall[true_class].add(hit);

        self.true_counts[true_class] += 1;
        self.seen += 1;
    }

    fn performance(&self) -> Vec<Measurement> {
        let p_o = self.correct.estimation();
        let mut m = vec![Measurement::new("accuracy", p_o)];

        if self.seen == 0 {
            m.extend([
                Measurement::new("kappa", 0.0),
                Measurement::new("kappa_m", 0.0),
            ]);
            return m;
        }

        let p_e: f64 = self
            .predicted_share
            .iter()
            .zip(&self.true_share)
            .map(|(p, t)| p.estimation() * t.estimation())
            .filter(|v| v.is_finite())
            .sum();
        m.push(Measurement::new("kappa", ratio_or_nan(p_o - p_e, 1.0 - p_e)));

        let acc_maj = self.majority.estimation();
        m.push(Measurement::new(
            "kappa_m",
            ratio_or_nan(p_o - acc_maj, 1.0 - acc_maj),
        ));

        if self.show_pr_summary {
            let macro_precision = finite_mean(self.precision.iter().map(|e| e.estimation()));
            let macro_recall = finite_mean(self.recall.iter().map(|e| e.estimation()));
            let s = macro_precision + macro_recall;
            let macro_f1 = if macro_precision.is_finite()
                && macro_recall.is_finite()
                && s > f64::EPSILON
            {
                2.0 * (macro_precision * macro_recall) / s
            } else {
                f64::NAN
            };

            m.push(Measurement::new("precision", macro_precision));
            m.push(Measurement::new("recall", macro_recall));
            m.push(Measurement::new("f1", macro_f1));
        }
        m
    }
}
