//! Parse-time type hints derived from the dictionary.

use std::collections::BTreeMap;

use polars::prelude::DataType;

use scorecard_model::{ColumnSet, DataDictionary, DeclaredType};

/// Maps every kept column with a declared textual type to the String dtype.
///
/// Hinted columns are parsed as opaque text even when every value looks
/// numeric; ZIP codes, OPE IDs, and similar coded fields carry leading
/// zeros the default inference would destroy. Columns without a hint use
/// default inference.
pub fn build_type_hints(
    dictionary: &DataDictionary,
    columns: &ColumnSet,
) -> BTreeMap<String, DataType> {
    let mut hints = BTreeMap::new();
    for name in columns.iter() {
        if dictionary
            .declared_type(name)
            .is_some_and(DeclaredType::is_textual)
        {
            hints.insert(name.to_string(), DataType::String);
        }
    }
    hints
}
