use crate::classifiers::ClassifierError;
use crate::core::DatasetError;
use crate::tasks::TaskError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Task(#[from] TaskError),
}
