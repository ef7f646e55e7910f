pub mod instance;
pub mod row_instance;

pub use instance::Instance;
pub use row_instance::RowInstance;
