//! Parquet table cache.
//!
//! Parquet keeps the schema and typed columns with the data, so a cached
//! table reloads without re-parsing or re-inferring types.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use crate::error::{OutputError, Result};

/// Writes a table to the cache at `path`, creating parent directories.
pub fn write_cache(df: &mut DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| OutputError::Create {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let file = File::create(path).map_err(|e| OutputError::Create {
        path: path.to_path_buf(),
        source: e,
    })?;

    ParquetWriter::new(file)
        .finish(df)
        .map_err(|e| OutputError::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "wrote table cache"
    );

    Ok(())
}

/// Reloads a cached table.
pub fn read_cache(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|e| OutputError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    ParquetReader::new(file)
        .finish()
        .map_err(|e| OutputError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
