//! Binary table cache for the Scorecard subset pipeline.

pub mod cache;
pub mod error;
pub mod naming;

pub use cache::{read_cache, write_cache};
pub use error::{OutputError, Result};
pub use naming::CacheNaming;
