pub mod column_set;
pub mod descriptor;
pub mod dictionary;

pub use column_set::ColumnSet;
pub use descriptor::{ColumnDescriptor, DeclaredType, normalize_name};
pub use dictionary::DataDictionary;
