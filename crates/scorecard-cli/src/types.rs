use std::path::PathBuf;

#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    /// Width of the kept-column set after category exclusion.
    pub selected_width: usize,
    /// Width shared by every table after the sparsity barrier.
    pub final_width: usize,
    /// Columns removed by sparsity pruning.
    pub sparse_dropped: usize,
    pub files: Vec<FileSummary>,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub source: String,
    pub input_rows: usize,
    pub kept_rows: usize,
    /// None on dry runs.
    pub cache_file: Option<String>,
}
