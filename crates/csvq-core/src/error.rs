use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no data found in {name}")]
    EmptyData { name: String },

    #[error("column not found: {column}")]
    ColumnNotFound { column: String },

    #[error("requested {requested} rows but only {available} are available")]
    RowLimitExceeded { requested: usize, available: usize },

    #[error("no table loaded (a FROM step must come first)")]
    NoTableLoaded,

    // Rows are not width-checked on load; a short row surfaces here.
    #[error("row {row} has {width} fields, column index {index} is out of range")]
    ColumnOutOfRange {
        row: usize,
        index: usize,
        width: usize,
    },

    #[error("value '{value}' is not an integer in a numeric column")]
    InvalidNumber { value: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}
