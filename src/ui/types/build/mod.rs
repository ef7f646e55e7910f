mod datasets;
mod error;
mod evaluators;
mod learners;
mod tasks;

pub use error::BuildError;

pub use datasets::build_dataset;
pub use evaluators::build_evaluator;
pub use learners::build_learner;
pub use tasks::{CrossValidationJob, build_task};
