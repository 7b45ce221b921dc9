//! CLI argument definitions for the Scorecard subset pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "scorecard-prep",
    version,
    about = "Prepare College Scorecard extracts for modeling",
    long_about = "Reduce raw College Scorecard CSV extracts to a model-ready subset.\n\n\
                  Drops outcome-category columns per the data dictionary, filters rows\n\
                  to the target institution population, prunes sparse columns across\n\
                  the batch, and caches the result as Parquet."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the whole pipeline over the configured source files.
    Run(RunArgs),

    /// Show the kept-column set a dictionary yields.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory holding the data dictionary and the source CSV files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Directory for cache files (default: DATA_DIR).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Population definition to filter rows with.
    #[arg(long = "population", value_enum, default_value = "four-year")]
    pub population: PopulationArg,

    /// Load, filter, and prune without writing cache files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the data dictionary CSV.
    #[arg(value_name = "DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Selectable population definitions.
#[derive(Clone, Copy, ValueEnum)]
pub enum PopulationArg {
    /// Four-year undergraduate institutions (Carnegie profile based).
    FourYear,
    /// Institutions predominantly awarding bachelor's degrees.
    Bachelors,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
