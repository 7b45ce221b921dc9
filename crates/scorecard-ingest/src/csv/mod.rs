//! CSV reading: raw header inspection and typed, projected table loading.

pub mod header;
pub mod reader;

pub use header::{parse_csv_line, read_header_row};
pub use reader::load_table;
