/// Incremental scalar estimate, fed one observation at a time.
pub trait Estimator {
    fn add(&mut self, v: f64);

    /// `NaN` until something has been added.
    fn estimation(&self) -> f64;
}
