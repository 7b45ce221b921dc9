//! Error types for Scorecard data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during dictionary loading and table ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source or dictionary file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Dictionary Errors ===
    /// The data dictionary is unreadable or malformed.
    #[error("failed to load data dictionary {path}: {message}")]
    SchemaLoad { path: PathBuf, message: String },

    /// A required column is absent from a source or dictionary file.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// The derived column set no longer matches the expected width,
    /// signalling the dictionary changed shape between runs.
    #[error("selected column set has {actual} columns, expected {expected}")]
    ConfigurationDrift { expected: usize, actual: usize },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file is empty or has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
