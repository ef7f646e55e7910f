mod estimators;
mod evaluators;
mod measurement;

pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{BasicClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
