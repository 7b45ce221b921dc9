//! Column selection by category exclusion.

use scorecard_model::{ColumnSet, DataDictionary};

use crate::error::{IngestError, Result};

/// Derives the kept-column set: all dictionary columns minus every column
/// whose category is excluded.
///
/// A category that matches no columns is logged and skipped; category
/// absence is benign (older dictionary exports drop whole categories).
pub fn select_columns(dictionary: &DataDictionary, excluded_categories: &[&str]) -> ColumnSet {
    let mut columns = ColumnSet::from_names(dictionary.names());

    for category in excluded_categories {
        let members = dictionary.columns_in_category(category);
        if members.is_empty() {
            tracing::warn!(category, "exclusion category matched no columns");
            continue;
        }
        tracing::debug!(
            category,
            count = members.len(),
            "dropping columns by category"
        );
        columns = columns.without(members.iter().copied());
    }

    columns
}

/// Guards against silent dictionary changes between runs: the derived set
/// must have the width the run was configured for.
pub fn verify_expected_width(columns: &ColumnSet, expected: usize) -> Result<()> {
    if columns.len() != expected {
        return Err(IngestError::ConfigurationDrift {
            expected,
            actual: columns.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorecard_model::{ColumnDescriptor, DeclaredType};

    fn dictionary(entries: &[(&str, Option<&str>)]) -> DataDictionary {
        let mut dict = DataDictionary::new();
        for (name, category) in entries {
            dict.insert(ColumnDescriptor {
                name: name.to_string(),
                category: category.map(String::from),
                declared_type: DeclaredType::Other,
            });
        }
        dict
    }

    #[test]
    fn test_select_removes_excluded_categories() {
        let dict = dictionary(&[
            ("unitid", Some("root")),
            ("rpy_1yr_rt", Some("repayment")),
            ("pcip01", Some("academics")),
            ("control", Some("school")),
        ]);
        let columns = select_columns(&dict, &["repayment", "academics"]);
        let names: Vec<&str> = columns.iter().collect();
        assert_eq!(names, vec!["unitid", "control"]);
    }

    #[test]
    fn test_select_no_double_counting() {
        // A removed column never shrinks the set twice even when the same
        // category is excluded twice.
        let dict = dictionary(&[("a", Some("earnings")), ("b", None), ("c", None)]);
        let columns = select_columns(&dict, &["earnings", "earnings"]);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn test_select_unknown_category_is_benign() {
        let dict = dictionary(&[("a", Some("school")), ("b", None)]);
        let columns = select_columns(&dict, &["completion"]);
        assert_eq!(columns.len(), 2);
    }

    #[test]
    fn test_select_is_idempotent() {
        let dict = dictionary(&[
            ("a", Some("repayment")),
            ("b", Some("school")),
            ("c", None),
        ]);
        let first = select_columns(&dict, &["repayment"]);
        let second = select_columns(&dict, &["repayment"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_verify_expected_width() {
        let dict = dictionary(&[("a", None), ("b", None)]);
        let columns = select_columns(&dict, &[]);
        assert!(verify_expected_width(&columns, 2).is_ok());
        let err = verify_expected_width(&columns, 290).unwrap_err();
        assert!(matches!(
            err,
            IngestError::ConfigurationDrift {
                expected: 290,
                actual: 2
            }
        ));
    }
}
