use crate::classifiers::Classifier;
use crate::core::Dataset;
use crate::core::instances::{Instance, RowInstance};
use crate::evaluation::PerformanceEvaluator;
use crate::tasks::{CrossValidationReport, FoldResult, TaskError};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::mpsc::Sender;
use std::time::Instant;
use tracing::{debug, info};

/// Shuffles `0..instances` with `seed` and cuts the result into `folds`
/// contiguous parts; the first `instances % folds` parts hold one extra row.
pub fn fold_partition(
    instances: usize,
    folds: usize,
    seed: u64,
) -> Result<Vec<Vec<usize>>, TaskError> {
    if folds < 2 || folds > instances {
        return Err(TaskError::InvalidFolds { folds, instances });
    }

    let mut rows: Vec<usize> = (0..instances).collect();
    rows.shuffle(&mut StdRng::seed_from_u64(seed));

    let base = instances / folds;
    let extra = instances % folds;
    let mut out = Vec::with_capacity(folds);
    let mut start = 0;
    for f in 0..folds {
        let len = base + usize::from(f < extra);
        out.push(rows[start..start + len].to_vec());
        start += len;
    }
    Ok(out)
}

/// k-fold cross-validation of one learner over one dataset.
pub struct CrossValidation {
    learner: Box<dyn Classifier>,
    dataset: Dataset,
    evaluator: Box<dyn PerformanceEvaluator>,
    folds: usize,
    seed: u64,

    progress_tx: Option<Sender<FoldResult>>,
}

impl CrossValidation {
    pub fn new(
        learner: Box<dyn Classifier>,
        dataset: Dataset,
        evaluator: Box<dyn PerformanceEvaluator>,
        folds: usize,
        seed: u64,
    ) -> Result<Self, TaskError> {
        let instances = dataset.number_of_instances();
        if folds < 2 || folds > instances {
            return Err(TaskError::InvalidFolds { folds, instances });
        }
        Ok(Self {
            learner,
            dataset,
            evaluator,
            folds,
            seed,
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<FoldResult>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn run(&mut self) -> Result<CrossValidationReport, TaskError> {
        let started_at = Utc::now();
        let instances = self.dataset.number_of_instances();
        let partition = fold_partition(instances, self.folds, self.seed)?;
        self.evaluator.reset();

        info!(
            learner = self.learner.name(),
            relation = self.dataset.header().relation_name(),
            instances,
            folds = self.folds,
            seed = self.seed,
            "starting cross-validation"
        );

        let mut results = Vec::with_capacity(self.folds);
        for (fold, test_rows) in partition.iter().enumerate() {
            let start = Instant::now();

            let test: Vec<RowInstance<'_>> =
                test_rows.iter().map(|&r| self.dataset.instance(r)).collect();
            let training: Vec<RowInstance<'_>> = partition
                .iter()
                .enumerate()
                .filter(|(other, _)| *other != fold)
                .flat_map(|(_, rows)| rows.iter().map(|&r| self.dataset.instance(r)))
                .collect();

            let predictions = self
                .learner
                .predict(&self.dataset, &training, &test)
                .map_err(|source| TaskError::Classifier { fold, source })?;

            let mut correct = 0;
            for (instance, &predicted) in test.iter().zip(&predictions) {
                let truth = instance.class_value();
                self.evaluator.add_result(truth, predicted);
                if truth == predicted {
                    correct += 1;
                }
            }

            let result = FoldResult {
                fold,
                train_size: training.len(),
                test_size: test.len(),
                correct,
                accuracy: correct as f64 / test.len() as f64,
                seconds: start.elapsed().as_secs_f64(),
            };
            debug!("{result}");
            if let Some(tx) = &self.progress_tx {
                let _ = tx.send(result.clone());
            }
            results.push(result);
        }

        let report = CrossValidationReport::new(
            self.learner.name().to_string(),
            self.dataset.header().relation_name().to_string(),
            self.seed,
            started_at,
            results,
            self.evaluator.performance(),
        );
        info!(
            correct = report.correct(),
            tested = report.tested(),
            accuracy = report.overall_accuracy,
            "cross-validation finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::ClassifierError;
    use crate::classifiers::id3::Id3;
    use crate::evaluation::{BasicClassificationEvaluator, BasicEstimator};
    use crate::testing::{ConstantClassifier, OracleClassifier, dataset_from_rows, random_dataset};
    use std::sync::mpsc;

    fn evaluator(classes: usize) -> Box<dyn PerformanceEvaluator> {
        Box::new(BasicClassificationEvaluator::<BasicEstimator>::new(
            classes, false,
        ))
    }

    #[test]
    fn partition_sizes_and_coverage() {
        let parts = fold_partition(11, 3, 9).unwrap();
        let sizes: Vec<usize> = parts.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 4, 3]);

        let mut all: Vec<usize> = parts.concat();
        all.sort_unstable();
        assert_eq!(all, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn partition_depends_only_on_seed() {
        assert_eq!(
            fold_partition(20, 4, 1).unwrap(),
            fold_partition(20, 4, 1).unwrap()
        );
        assert_ne!(
            fold_partition(20, 4, 1).unwrap(),
            fold_partition(20, 4, 2).unwrap()
        );
    }

    #[test]
    fn ctor_guards() {
        let ds = dataset_from_rows(&[2], 2, &[[0, 0], [1, 1], [0, 1]]);
        for folds in [0, 1, 4] {
            let err = CrossValidation::new(
                Box::new(OracleClassifier),
                ds.clone(),
                evaluator(2),
                folds,
                0,
            )
            .err()
            .unwrap();
            assert!(matches!(err, TaskError::InvalidFolds { instances: 3, .. }));
        }
        assert!(CrossValidation::new(Box::new(OracleClassifier), ds, evaluator(2), 3, 0).is_ok());
    }

    #[test]
    fn every_instance_is_tested_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let ds = random_dataset(&mut rng, &[2, 2], 2, 23);
        let mut cv =
            CrossValidation::new(Box::new(OracleClassifier), ds, evaluator(2), 5, 11).unwrap();
        let report = cv.run().unwrap();

        assert_eq!(report.folds.len(), 5);
        assert_eq!(report.tested(), 23);
        assert_eq!(report.correct(), 23);
        for r in &report.folds {
            assert_eq!(r.train_size + r.test_size, 23);
        }
        assert!((report.overall_accuracy - 1.0).abs() < 1e-12);
        assert_eq!(report.measurement("accuracy"), Some(1.0));
    }

    #[test]
    fn constant_learner_scores_its_class_share() {
        let ds = dataset_from_rows(&[2], 2, &[[0, 0], [1, 1], [0, 1], [1, 1], [0, 1], [1, 0]]);
        let mut cv = CrossValidation::new(
            Box::new(ConstantClassifier { class: 1 }),
            ds,
            evaluator(2),
            3,
            5,
        )
        .unwrap();
        let report = cv.run().unwrap();
        assert_eq!(report.correct(), 4);
        assert_eq!(report.learner, "constant");
    }

    #[test]
    fn progress_channel_sees_each_fold() {
        let mut rng = StdRng::seed_from_u64(4);
        let ds = random_dataset(&mut rng, &[3, 2], 2, 30);
        let (tx, rx) = mpsc::channel();
        let mut cv = CrossValidation::new(Box::new(Id3::new()), ds, evaluator(2), 3, 1)
            .unwrap()
            .with_progress(tx);
        let report = cv.run().unwrap();
        drop(cv);

        let seen: Vec<FoldResult> = rx.iter().collect();
        assert_eq!(seen, report.folds);
    }

    #[test]
    fn classifier_errors_name_the_fold() {
        struct Failing;
        impl Classifier for Failing {
            fn name(&self) -> &str {
                "failing"
            }
            fn predict(
                &self,
                _dataset: &Dataset,
                _training: &[RowInstance<'_>],
                _test: &[RowInstance<'_>],
            ) -> Result<Vec<usize>, ClassifierError> {
                Err(ClassifierError::EmptyTrainingSet)
            }
        }

        let ds = dataset_from_rows(&[2], 2, &[[0, 0], [1, 1]]);
        let mut cv = CrossValidation::new(Box::new(Failing), ds, evaluator(2), 2, 0).unwrap();
        let err = cv.run().unwrap_err();
        assert!(matches!(
            err,
            TaskError::Classifier {
                fold: 0,
                source: ClassifierError::EmptyTrainingSet
            }
        ));
    }
}
