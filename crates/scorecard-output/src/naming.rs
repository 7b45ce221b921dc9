//! Deterministic cache file naming.

use serde::{Deserialize, Serialize};

/// Rename rules mapping a source file name to its cache file name.
///
/// Derived from the file's identity only, never its contents, so reruns
/// land on the same cache path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheNaming {
    /// Suffix stripped from the source name.
    pub source_suffix: String,
    /// Suffix of the cache file.
    pub cache_suffix: String,
    /// Infix token replaced in the stem, e.g. `PP` -> `subset`.
    pub infix_from: String,
    pub infix_to: String,
}

impl CacheNaming {
    /// Scorecard convention: `MERGED2016_17_PP.csv` -> `MERGED2016_17_subset.parquet`.
    pub fn scorecard() -> Self {
        Self {
            source_suffix: ".csv".to_string(),
            cache_suffix: ".parquet".to_string(),
            infix_from: "PP".to_string(),
            infix_to: "subset".to_string(),
        }
    }

    /// Transforms a source file name into its cache file name.
    pub fn cache_file_name(&self, source_name: &str) -> String {
        let stem = source_name
            .strip_suffix(&self.source_suffix)
            .unwrap_or(source_name);
        let stem = stem.replace(&self.infix_from, &self.infix_to);
        format!("{stem}{}", self.cache_suffix)
    }
}
