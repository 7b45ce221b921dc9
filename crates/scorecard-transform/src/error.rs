//! Error types for table transformations.

use thiserror::Error;

/// Errors that can occur while filtering or pruning tables.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A predicate references a column the table does not carry.
    #[error("predicate column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
