use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulates `(true class, predicted class)` pairs and summarises them as
/// named measurements.
pub trait PerformanceEvaluator {
    /// Forgets every pair seen so far.
    fn reset(&mut self);

    /// Feeds one labelled prediction. Class indices outside the evaluator's
    /// class range are ignored.
    fn add_result(&mut self, true_class: usize, predicted_class: usize);

    /// Current value of every tracked metric.
    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).pop().and_then(|(_, value)| value)
    }
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let map: HashMap<_, _> = self
            .performance()
            .into_iter()
            .map(|m| (m.name, m.value))
            .collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }
}
