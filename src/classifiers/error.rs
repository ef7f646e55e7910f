use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClassifierError {
    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("k must be at least 1")]
    InvalidK,

    #[error("pruning fraction must be in (0, 1), got {0}")]
    InvalidPruningFraction(f64),

    #[error("distance exponent must be at least 1")]
    InvalidExponent,
}
