use crate::classifiers::ClassifierError;
use crate::core::Dataset;
use crate::core::instances::{Instance, RowInstance};

/// A batch learner: trains on `training` and labels every instance of
/// `test`, both drawn from `dataset`.
pub trait Classifier {
    fn name(&self) -> &str;

    /// One predicted class index per test instance, in test order.
    fn predict(
        &self,
        dataset: &Dataset,
        training: &[RowInstance<'_>],
        test: &[RowInstance<'_>],
    ) -> Result<Vec<usize>, ClassifierError>;

    /// Number of test instances whose predicted class matches their own.
    fn run(
        &self,
        dataset: &Dataset,
        training: &[RowInstance<'_>],
        test: &[RowInstance<'_>],
    ) -> Result<usize, ClassifierError> {
        let predictions = self.predict(dataset, training, test)?;
        Ok(test
            .iter()
            .zip(&predictions)
            .filter(|(instance, predicted)| instance.class_value() == **predicted)
            .count())
    }
}
