use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("attribute '{0}' has an empty domain")]
    EmptyDomain(String),

    #[error("class column {column} is out of range for {columns} columns")]
    ClassColumnOutOfRange { column: usize, columns: usize },

    #[error("class column '{0}' must be nominal")]
    NumericClass(String),

    #[error("bucket boundaries for '{0}' must be finite and strictly increasing")]
    InvalidBuckets(String),

    #[error("line {line}: expected {expected} values, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unknown value '{value}' for attribute '{attribute}'")]
    UnknownValue {
        line: usize,
        attribute: String,
        value: String,
    },

    #[error("attribute {attribute} has {found} values, expected {expected}")]
    ColumnLength {
        attribute: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected {expected} attribute columns, found {found}")]
    AttributeCount { expected: usize, found: usize },

    #[error("value {value} at row {row} is outside the domain of attribute {attribute}")]
    ValueOutOfDomain {
        attribute: usize,
        row: usize,
        value: usize,
    },

    #[error("class {class} at row {row} is outside the class domain")]
    ClassOutOfDomain { row: usize, class: usize },

    #[error(transparent)]
    Schema(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
