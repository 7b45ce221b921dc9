//! Population filtering: restrict rows to the intended institution subset.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TransformError};

/// A row-keep predicate over one categorical/numeric code column.
///
/// Column names are the pipeline's normalized (lowercase) names. Null
/// handling mirrors the source semantics: a null code fails `Equals` and
/// `InRange` but passes `NotEquals`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Keep rows where `column` is within `min..=max`.
    InRange { column: String, min: i64, max: i64 },
    /// Keep rows where `column` equals `value`.
    Equals { column: String, value: i64 },
    /// Keep rows where `column` differs from `value` (nulls kept).
    NotEquals { column: String, value: i64 },
}

impl Predicate {
    pub fn column(&self) -> &str {
        match self {
            Self::InRange { column, .. }
            | Self::Equals { column, .. }
            | Self::NotEquals { column, .. } => column,
        }
    }

    fn to_expr(&self) -> Expr {
        match self {
            Self::InRange { column, min, max } => col(column.as_str())
                .gt_eq(lit(*min))
                .and(col(column.as_str()).lt_eq(lit(*max))),
            Self::Equals { column, value } => col(column.as_str()).eq(lit(*value)),
            Self::NotEquals { column, value } => col(column.as_str())
                .neq(lit(*value))
                .or(col(column.as_str()).is_null()),
        }
    }
}

/// An ordered set of predicates plus the columns that become uninformative
/// once the population is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationFilter {
    pub predicates: Vec<Predicate>,
    /// Dropped after filtering when present; distinct from sparsity pruning.
    pub drop_columns: Vec<String>,
}

impl PopulationFilter {
    /// Four-year undergraduate institutions that are currently operating,
    /// campus-based, and not for-profit.
    ///
    /// CCUGPROF codes 5 through 15 are the four-year Carnegie undergraduate
    /// profiles; CONTROL 3 is private for-profit; CURROPER 0 marks closed
    /// schools; DISTANCEONLY 0 means the school has a campus.
    pub fn four_year_undergrad() -> Self {
        Self {
            predicates: vec![
                Predicate::InRange {
                    column: "ccugprof".to_string(),
                    min: 5,
                    max: 15,
                },
                Predicate::NotEquals {
                    column: "control".to_string(),
                    value: 3,
                },
                Predicate::NotEquals {
                    column: "curroper".to_string(),
                    value: 0,
                },
                Predicate::Equals {
                    column: "distanceonly".to_string(),
                    value: 0,
                },
            ],
            drop_columns: vec![
                "preddeg".to_string(),
                "curroper".to_string(),
                "distanceonly".to_string(),
            ],
        }
    }

    /// Institutions predominantly awarding bachelor's degrees (PREDDEG 3).
    pub fn predominantly_bachelors() -> Self {
        Self {
            predicates: vec![Predicate::Equals {
                column: "preddeg".to_string(),
                value: 3,
            }],
            drop_columns: vec!["preddeg".to_string()],
        }
    }

    /// Applies every predicate in order, then drops the configured
    /// now-uninformative columns. An empty result is not an error.
    pub fn apply(&self, df: DataFrame) -> Result<DataFrame> {
        let schema = df.schema().clone();
        for predicate in &self.predicates {
            if !schema.contains(predicate.column()) {
                return Err(TransformError::ColumnNotFound {
                    column: predicate.column().to_string(),
                });
            }
        }

        let input_rows = df.height();
        let mut lazy = df.lazy();
        for predicate in &self.predicates {
            lazy = lazy.filter(predicate.to_expr());
        }
        let filtered = lazy.collect()?;

        let drops: Vec<&str> = self
            .drop_columns
            .iter()
            .map(String::as_str)
            .filter(|name| filtered.schema().contains(name))
            .collect();
        let result = filtered.drop_many(drops);

        tracing::debug!(
            input_rows,
            kept_rows = result.height(),
            dropped_columns = self.drop_columns.len(),
            "population filter applied"
        );

        Ok(result)
    }
}
