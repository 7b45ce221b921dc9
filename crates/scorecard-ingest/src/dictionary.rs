//! Data dictionary loading.
//!
//! The dictionary is the Scorecard data-dictionary sheet exported to CSV with
//! at least a variable name, a category label, and a declared API data type
//! per row. Header fields and variable names both arrive with arbitrary
//! casing, spaces, and dashes; everything is normalized on load.

use std::path::Path;

use polars::prelude::*;

use scorecard_model::{ColumnDescriptor, DataDictionary, DeclaredType, normalize_name};

use crate::error::{IngestError, Result};
use crate::value::any_to_string;

/// Required dictionary fields after header normalization.
const VARIABLE_NAME: &str = "variable_name";
const CATEGORY: &str = "dev_category";
const API_DATA_TYPE: &str = "api_data_type";

/// Loads the data dictionary describing every possible source column.
///
/// Rows with an empty variable name are skipped; duplicate variable names
/// keep their first descriptor.
pub fn load_dictionary(path: &Path) -> Result<DataDictionary> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    // Every dictionary field is read as text; the declared types describe the
    // source tables, not the dictionary itself.
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::SchemaLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::SchemaLoad {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    normalize_headers(&mut df)?;

    let name_col = required_column(&df, VARIABLE_NAME, path)?;
    let category_col = required_column(&df, CATEGORY, path)?;
    let type_col = required_column(&df, API_DATA_TYPE, path)?;

    let mut dictionary = DataDictionary::new();
    for row_idx in 0..df.height() {
        let raw_name = any_to_string(name_col.get(row_idx)?);
        let name = normalize_name(&raw_name);
        if name.is_empty() {
            continue;
        }

        let category = any_to_string(category_col.get(row_idx)?);
        let category = if category.trim().is_empty() {
            None
        } else {
            Some(category.trim().to_string())
        };
        let declared_type = DeclaredType::from_label(&any_to_string(type_col.get(row_idx)?));

        let descriptor = ColumnDescriptor {
            name: name.clone(),
            category,
            declared_type,
        };
        if !dictionary.insert(descriptor) {
            tracing::debug!(column = %name, "duplicate dictionary entry ignored");
        }
    }

    tracing::info!(
        path = %path.display(),
        columns = dictionary.len(),
        "loaded data dictionary"
    );

    Ok(dictionary)
}

/// Renames every dictionary header to its normalized form.
fn normalize_headers(df: &mut DataFrame) -> Result<()> {
    let originals: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for original in originals {
        let normalized = normalize_name(&original);
        if normalized != original {
            df.rename(&original, normalized.into())?;
        }
    }
    Ok(())
}

fn required_column<'a>(df: &'a DataFrame, name: &str, path: &Path) -> Result<&'a Column> {
    df.column(name).map_err(|_| IngestError::MissingColumn {
        column: name.to_string(),
        path: path.to_path_buf(),
    })
}
