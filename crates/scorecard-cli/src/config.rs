//! Per-run configuration.
//!
//! Run parameters are compile-time constants, not runtime flags: a run is
//! "process the configured files", and changing the population definition or
//! the sparsity threshold is a code change, reviewed like one.

use scorecard_output::CacheNaming;
use scorecard_transform::PopulationFilter;

/// Data-dictionary file name inside the data directory (the Scorecard
/// dictionary workbook's `data_dictionary` sheet, exported to CSV).
pub const DICTIONARY_FILE: &str = "CollegeScorecardDataDictionary.csv";

/// Source extracts processed in one batch, one per reporting period.
pub const SOURCE_FILES: [&str; 1] = ["MERGED2016_17_PP.csv"];

/// Categories whose columns are dropped wholesale. Repayment, academics,
/// completion, and earnings columns describe outcomes this dataset is meant
/// to predict, not inputs.
pub const EXCLUDED_CATEGORIES: [&str; 4] = ["repayment", "academics", "completion", "earnings"];

/// Expected width of the kept-column set for the current dictionary.
/// A mismatch means the dictionary changed shape between runs.
pub const EXPECTED_SUBSET_WIDTH: Option<usize> = Some(290);

/// Minimum non-missing values a column needs, per file, to survive pruning.
pub const SPARSITY_THRESHOLD: usize = 400;

/// Sentinel the source data uses for suppressed/redacted values.
pub const MISSING_MARKER: &str = "PrivacySuppressed";

/// Everything one batch run needs, assembled from the constants above.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub dictionary_file: String,
    pub source_files: Vec<String>,
    pub excluded_categories: Vec<String>,
    pub expected_width: Option<usize>,
    pub sparsity_threshold: usize,
    pub missing_marker: String,
    pub population: PopulationFilter,
    pub cache_naming: CacheNaming,
}

impl RunConfig {
    /// The standard Scorecard run with the given population definition.
    pub fn scorecard(population: PopulationFilter) -> Self {
        Self {
            dictionary_file: DICTIONARY_FILE.to_string(),
            source_files: SOURCE_FILES.iter().map(|f| (*f).to_string()).collect(),
            excluded_categories: EXCLUDED_CATEGORIES
                .iter()
                .map(|c| (*c).to_string())
                .collect(),
            expected_width: EXPECTED_SUBSET_WIDTH,
            sparsity_threshold: SPARSITY_THRESHOLD,
            missing_marker: MISSING_MARKER.to_string(),
            population,
            cache_naming: CacheNaming::scorecard(),
        }
    }
}
