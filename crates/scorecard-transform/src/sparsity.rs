//! Sparsity pruning: remove columns with too little usable data.
//!
//! Counts are evaluated per table, but removal is batch-wide: a column that
//! is sparse in any one reporting period is removed from every table in the
//! batch so all output files share one schema. Obsolete fields that stopped
//! being reported in later years disappear from the whole run.

use std::collections::{BTreeMap, BTreeSet};

use polars::prelude::DataFrame;

use crate::error::Result;

/// Non-missing value count per column.
pub fn non_missing_counts(df: &DataFrame) -> BTreeMap<String, usize> {
    df.get_columns()
        .iter()
        .map(|column| {
            (
                column.name().to_string(),
                column.len() - column.null_count(),
            )
        })
        .collect()
}

/// Union, across the batch, of columns whose non-missing count is strictly
/// below `threshold` in at least one table.
pub fn sparse_columns(tables: &[DataFrame], threshold: usize) -> BTreeSet<String> {
    let mut sparse = BTreeSet::new();
    for df in tables {
        for (name, count) in non_missing_counts(df) {
            if count < threshold {
                sparse.insert(name);
            }
        }
    }
    sparse
}

/// Removes the batch-wide sparse-column union from every table.
///
/// An empty union is a no-op; every returned table carries the same reduced
/// column set.
pub fn prune_sparse_columns(tables: Vec<DataFrame>, threshold: usize) -> Result<Vec<DataFrame>> {
    let sparse = sparse_columns(&tables, threshold);
    if sparse.is_empty() {
        return Ok(tables);
    }

    tracing::info!(
        threshold,
        dropped = sparse.len(),
        "pruning sparse columns across batch"
    );

    let names: Vec<&str> = sparse.iter().map(String::as_str).collect();
    Ok(tables
        .into_iter()
        .map(|df| df.drop_many(names.iter().copied()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn table(dense: &[Option<i64>], patchy: &[Option<i64>]) -> DataFrame {
        df! {
            "dense" => dense,
            "patchy" => patchy,
        }
        .unwrap()
    }

    #[test]
    fn test_non_missing_counts() {
        let df = table(&[Some(1), Some(2), Some(3)], &[Some(1), None, None]);
        let counts = non_missing_counts(&df);
        assert_eq!(counts.get("dense"), Some(&3));
        assert_eq!(counts.get("patchy"), Some(&1));
    }

    #[test]
    fn test_prune_is_batch_wide() {
        // "patchy" is dense in the first year but sparse in the second; it
        // must disappear from both.
        let year_one = table(&[Some(1), Some(2), Some(3)], &[Some(1), Some(2), Some(3)]);
        let year_two = table(&[Some(1), Some(2), Some(3)], &[Some(1), None, None]);

        let pruned = prune_sparse_columns(vec![year_one, year_two], 2).unwrap();

        for df in &pruned {
            assert_eq!(df.get_column_names_str(), vec!["dense"]);
        }
    }

    #[test]
    fn test_threshold_is_strictly_less_than() {
        // Count equal to the threshold survives.
        let df = table(&[Some(1), Some(2), None], &[Some(1), None, None]);
        let sparse = sparse_columns(std::slice::from_ref(&df), 2);
        assert!(!sparse.contains("dense"));
        assert!(sparse.contains("patchy"));
    }

    #[test]
    fn test_empty_union_is_noop() {
        let df = table(&[Some(1), Some(2)], &[Some(3), Some(4)]);
        let pruned = prune_sparse_columns(vec![df], 1).unwrap();
        assert_eq!(pruned[0].width(), 2);
    }

    #[test]
    fn test_final_schemas_are_identical() {
        let year_one = df! {
            "a" => &[Some(1i64), Some(2)],
            "b" => &[None::<i64>, None],
            "c" => &[Some(1i64), Some(2)],
        }
        .unwrap();
        let year_two = df! {
            "a" => &[Some(1i64), Some(2)],
            "b" => &[Some(1i64), Some(2)],
            "c" => &[None::<i64>, Some(2)],
        }
        .unwrap();

        let pruned = prune_sparse_columns(vec![year_one, year_two], 2).unwrap();
        assert_eq!(
            pruned[0].get_column_names_str(),
            pruned[1].get_column_names_str()
        );
        assert_eq!(pruned[0].get_column_names_str(), vec!["a"]);
    }

    #[test]
    fn test_empty_table_counts_as_all_sparse() {
        let empty = df! {
            "a" => Vec::<i64>::new(),
        }
        .unwrap();
        let sparse = sparse_columns(std::slice::from_ref(&empty), 1);
        assert!(sparse.contains("a"));
    }
}
