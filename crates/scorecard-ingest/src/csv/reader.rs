//! Typed, projected CSV loading.
//!
//! Only the requested columns are parsed; declared-string columns are forced
//! to the String dtype at parse time and the missing-value sentinel becomes a
//! proper null, so no stage downstream has to re-interpret values.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;

use scorecard_model::{ColumnSet, normalize_name};

use crate::error::{IngestError, Result};

use super::header::read_header_row;

/// Loads one source CSV, keeping exactly the columns in `columns`.
///
/// Source headers are matched against the normalized kept names, so header
/// casing in the file does not matter; loaded columns are renamed to their
/// normalized names and returned in `columns` order. Any cell equal to
/// `missing_marker` is parsed as null. A kept column with no matching source
/// header is fatal.
pub fn load_table(
    path: &Path,
    columns: &ColumnSet,
    type_hints: &BTreeMap<String, DataType>,
    missing_marker: &str,
) -> Result<DataFrame> {
    let headers = read_header_row(path)?;

    // normalized name -> raw source header (first occurrence wins)
    let mut by_normalized: BTreeMap<String, &str> = BTreeMap::new();
    for header in &headers {
        by_normalized
            .entry(normalize_name(header))
            .or_insert(header.as_str());
    }

    let mut projection: Vec<PlSmallStr> = Vec::with_capacity(columns.len());
    let mut renames: Vec<(&str, &str)> = Vec::new();
    let mut overwrite = Schema::with_capacity(type_hints.len());
    for name in columns.iter() {
        let source = *by_normalized
            .get(name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })?;
        projection.push(source.into());
        if source != name {
            renames.push((source, name));
        }
        if let Some(dtype) = type_hints.get(name) {
            overwrite.insert(source.into(), dtype.clone());
        }
    }

    let parse_options = CsvParseOptions::default()
        .with_null_values(Some(NullValues::AllColumnsSingle(missing_marker.into())));

    let mut options = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(parse_options)
        .with_columns(Some(Arc::from(projection)))
        .with_infer_schema_length(None);
    if !overwrite.is_empty() {
        options = options.with_schema_overwrite(Some(Arc::new(overwrite)));
    }

    let mut df = options
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for (source, normalized) in renames {
        df.rename(source, normalized.into())?;
    }
    let df = df.select(columns.iter())?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded source table"
    );

    Ok(df)
}
