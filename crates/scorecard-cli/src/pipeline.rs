//! The batch pipeline with explicit stages.
//!
//! 1. **Catalog**: load the dictionary, derive the kept-column set, build
//!    parse-time type hints. Shared by every file; failure aborts the run.
//! 2. **Load + filter** per file: read the projected, typed table and apply
//!    the population filter.
//! 3. **Sparsity barrier**: per-column counts across the whole batch decide
//!    the shared final column set.
//! 4. **Persist**: write each pruned table to its cache path, only after
//!    every file has passed the barrier — a failure mid-batch must not leave
//!    caches with divergent schemas behind.
//!
//! Strictly sequential; any stage failure aborts the run with the file and
//! stage named in the error chain.

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::{DataFrame, DataType};
use tracing::{info, info_span};

use scorecard_ingest::{
    build_type_hints, load_dictionary, load_table, select_columns, verify_expected_width,
};
use scorecard_model::{ColumnSet, DataDictionary};
use scorecard_output::write_cache;
use scorecard_transform::prune_sparse_columns;

use crate::config::RunConfig;
use crate::types::{FileSummary, RunResult};

/// Shared result of the catalog stage.
pub struct Catalog {
    pub dictionary: DataDictionary,
    pub columns: ColumnSet,
    pub type_hints: BTreeMap<String, DataType>,
}

/// Loads the dictionary and derives everything the per-file stages share.
pub fn build_catalog(dictionary_path: &Path, config: &RunConfig) -> Result<Catalog> {
    let span = info_span!("catalog", dictionary = %dictionary_path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let dictionary = load_dictionary(dictionary_path).context("load data dictionary")?;
    let excluded: Vec<&str> = config
        .excluded_categories
        .iter()
        .map(String::as_str)
        .collect();
    let columns = select_columns(&dictionary, &excluded);
    if let Some(expected) = config.expected_width {
        verify_expected_width(&columns, expected).context("verify kept-column width")?;
    }
    let type_hints = build_type_hints(&dictionary, &columns);

    info!(
        known_columns = dictionary.len(),
        kept_columns = columns.len(),
        hinted_columns = type_hints.len(),
        duration_ms = start.elapsed().as_millis(),
        "catalog ready"
    );

    Ok(Catalog {
        dictionary,
        columns,
        type_hints,
    })
}

/// Runs the whole batch: catalog, per-file load and filter, sparsity
/// barrier, persistence.
pub fn run(
    data_dir: &Path,
    output_dir: &Path,
    config: &RunConfig,
    dry_run: bool,
) -> Result<RunResult> {
    let catalog = build_catalog(&data_dir.join(&config.dictionary_file), config)?;

    // Every file is loaded and population-filtered before any output
    // decision; the sparsity barrier needs the whole batch.
    let mut tables: Vec<DataFrame> = Vec::with_capacity(config.source_files.len());
    let mut summaries: Vec<FileSummary> = Vec::with_capacity(config.source_files.len());
    for source in &config.source_files {
        let path = data_dir.join(source);
        let span = info_span!("load_filter", file = %source);
        let _guard = span.enter();
        let start = Instant::now();

        let table = load_table(
            &path,
            &catalog.columns,
            &catalog.type_hints,
            &config.missing_marker,
        )
        .with_context(|| format!("load {source}"))?;
        let input_rows = table.height();

        let table = config
            .population
            .apply(table)
            .with_context(|| format!("population filter for {source}"))?;

        info!(
            file = %source,
            input_rows,
            kept_rows = table.height(),
            duration_ms = start.elapsed().as_millis(),
            "file loaded and filtered"
        );

        summaries.push(FileSummary {
            source: source.clone(),
            input_rows,
            kept_rows: table.height(),
            cache_file: None,
        });
        tables.push(table);
    }

    let width_before = tables.first().map_or(0, DataFrame::width);
    let tables = info_span!("sparsity")
        .in_scope(|| prune_sparse_columns(tables, config.sparsity_threshold))
        .context("sparsity pruning")?;
    let final_width = tables.first().map_or(0, DataFrame::width);
    let sparse_dropped = width_before.saturating_sub(final_width);

    if !dry_run {
        let span = info_span!("persist");
        let _guard = span.enter();
        for (summary, mut table) in summaries.iter_mut().zip(tables) {
            let cache_file = config.cache_naming.cache_file_name(&summary.source);
            let cache_path = output_dir.join(&cache_file);
            write_cache(&mut table, &cache_path)
                .with_context(|| format!("persist {}", summary.source))?;
            info!(
                file = %summary.source,
                cache = %cache_path.display(),
                rows = table.height(),
                "cache written"
            );
            summary.cache_file = Some(cache_file);
        }
    }

    info!(
        files = summaries.len(),
        final_width,
        sparse_dropped,
        dry_run,
        "run complete"
    );

    Ok(RunResult {
        output_dir: output_dir.to_path_buf(),
        selected_width: catalog.columns.len(),
        final_width,
        sparse_dropped,
        files: summaries,
        dry_run,
    })
}
