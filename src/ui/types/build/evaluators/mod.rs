use crate::evaluation::{BasicClassificationEvaluator, BasicEstimator, PerformanceEvaluator};
use crate::ui::types::choices::EvaluatorChoice;

/// Evaluators are sized once the dataset, and so its class count, is known.
pub fn build_evaluator(
    choice: EvaluatorChoice,
    number_of_classes: usize,
) -> Box<dyn PerformanceEvaluator> {
    match choice {
        EvaluatorChoice::BasicClassification(p) => Box::new(
            BasicClassificationEvaluator::<BasicEstimator>::new(
                number_of_classes,
                p.precision_recall_output,
            ),
        ),
    }
}
