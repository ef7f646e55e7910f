use crate::classifiers::{Classifier, ClassifierError};
use crate::core::Dataset;
use crate::core::instances::{Instance, RowInstance};

/// Predicts every test instance's own class.
#[derive(Default)]
pub struct OracleClassifier;

impl Classifier for OracleClassifier {
    fn name(&self) -> &str {
        "oracle"
    }

    fn predict(
        &self,
        _dataset: &Dataset,
        _training: &[RowInstance<'_>],
        test: &[RowInstance<'_>],
    ) -> Result<Vec<usize>, ClassifierError> {
        Ok(test.iter().map(|i| i.class_value()).collect())
    }
}

/// Always predicts the same class, regardless of training data.
pub struct ConstantClassifier {
    pub class: usize,
}

impl Classifier for ConstantClassifier {
    fn name(&self) -> &str {
        "constant"
    }

    fn predict(
        &self,
        _dataset: &Dataset,
        _training: &[RowInstance<'_>],
        test: &[RowInstance<'_>],
    ) -> Result<Vec<usize>, ClassifierError> {
        Ok(vec![self.class; test.len()])
    }
}
