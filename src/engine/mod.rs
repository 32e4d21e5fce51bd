//! CSS aggregation engine
//!
//! This module fetches the stylesheets behind a list of CSS tasks
//! concurrently and merges the results back in document order.

// Sub-modules
pub mod aggregator;
pub mod assembler;
pub mod barrier;
pub mod types;

// Re-exports for public API
pub use aggregator::{Aggregated, Aggregator};
pub use assembler::{CssResult, assemble};
pub use barrier::AggregationBarrier;
pub use types::{AggregationState, CssSlot, CssTask, Link, ResultBuffer};
