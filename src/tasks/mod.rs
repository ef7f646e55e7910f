mod cross_validation;
mod error;
mod report;

pub use cross_validation::{CrossValidation, fold_partition};
pub use error::TaskError;
pub use report::{CrossValidationReport, FoldResult, ReportFormat};
