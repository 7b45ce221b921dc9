//! Table transformations for the Scorecard subset pipeline: population
//! filtering and batch-wide sparsity pruning.

pub mod error;
pub mod population;
pub mod sparsity;

pub use error::{Result, TransformError};
pub use population::{Predicate, PopulationFilter};
pub use sparsity::{non_missing_counts, prune_sparse_columns, sparse_columns};
