pub mod attributes;
pub mod dataset;
mod error;
pub mod instance_header;
pub mod instances;
pub mod loader;
pub mod schema;

pub use dataset::Dataset;
pub use error::DatasetError;
pub use instance_header::InstanceHeader;
