mod datasets;

pub use datasets::{dataset_from_rows, header_with_domains, random_dataset};
