pub mod classifier;
mod error;
pub mod id3;
pub mod knn;

pub use classifier::Classifier;
pub use error::ClassifierError;

use crate::core::Dataset;
use crate::core::instances::RowInstance;
use id3::{DEFAULT_PRUNING_FRACTION, Id3};
use knn::KNearestNeighbor;

/// Seed of the pruning-set shuffle used by [`run_id3_with_pruning`].
pub const DEFAULT_PRUNING_SEED: u64 = 42;

/// Grows an unpruned ID3 tree on `training` and returns how many `test`
/// instances it classifies correctly.
pub fn run_id3(
    dataset: &Dataset,
    training: &[RowInstance<'_>],
    test: &[RowInstance<'_>],
) -> Result<usize, ClassifierError> {
    Id3::new().run(dataset, training, test)
}

/// Like [`run_id3`], with a fifth of `training` held out for reduced-error
/// pruning.
pub fn run_id3_with_pruning(
    dataset: &Dataset,
    training: &[RowInstance<'_>],
    test: &[RowInstance<'_>],
) -> Result<usize, ClassifierError> {
    Id3::with_pruning(DEFAULT_PRUNING_FRACTION, DEFAULT_PRUNING_SEED)?.run(dataset, training, test)
}

pub fn run_knn(
    dataset: &Dataset,
    training: &[RowInstance<'_>],
    test: &[RowInstance<'_>],
    k: usize,
) -> Result<usize, ClassifierError> {
    KNearestNeighbor::new(k)?.run(dataset, training, test)
}
