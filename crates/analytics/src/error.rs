use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not enough data to perform calculation: {required} rows required, {actual} given")]
    NotEnoughData { required: usize, actual: usize },

    #[error("Column '{column}' has a missing observation at row {row}; this calculation requires complete data")]
    MissingData { column: String, row: usize },

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Series are not aligned: {0}")]
    AlignmentMismatch(String),

    #[error(transparent)]
    Core(#[from] core_types::CoreError),
}
