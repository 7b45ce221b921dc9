//! Error types for the binary table cache.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or reloading cached tables.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Destination file or directory could not be created.
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization to the cache file failed.
    #[error("failed to write cache {path}: {message}")]
    Write { path: PathBuf, message: String },

    /// Reloading a cache file failed.
    #[error("failed to read cache {path}: {message}")]
    Read { path: PathBuf, message: String },
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, OutputError>;
