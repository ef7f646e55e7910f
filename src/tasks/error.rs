use crate::classifiers::ClassifierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("cannot split {instances} instances into {folds} folds (need 2 <= folds <= instances)")]
    InvalidFolds { folds: usize, instances: usize },

    #[error("fold {fold}: {source}")]
    Classifier {
        fold: usize,
        #[source]
        source: ClassifierError,
    },

    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
