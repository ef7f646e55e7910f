pub mod dummies;
pub mod stubs;

pub use dummies::{dataset_from_rows, header_with_domains, random_dataset};
pub use stubs::{ConstantClassifier, OracleClassifier};
