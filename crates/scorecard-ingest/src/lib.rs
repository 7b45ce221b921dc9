//! Data ingestion for the Scorecard subset pipeline.
//!
//! Covers the dictionary-driven front half of the pipeline: loading the data
//! dictionary, deriving the kept-column set, building parse-time type hints,
//! and reading source CSVs with projection, typing, and missing-value
//! handling applied in one pass.

pub mod csv;
pub mod dictionary;
pub mod error;
pub mod hints;
pub mod select;
pub mod value;

pub use csv::{load_table, parse_csv_line, read_header_row};
pub use dictionary::load_dictionary;
pub use error::{IngestError, Result};
pub use hints::build_type_hints;
pub use select::{select_columns, verify_expected_width};
pub use value::any_to_string;
