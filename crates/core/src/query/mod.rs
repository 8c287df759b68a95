//! Query engine: predicate evaluation, AND-conjunction, sort, and pagination.
//!
//! A query is an ordered list of filters combined by logical AND, evaluated
//! with a linear scan over the catalog snapshot. No indexing: the catalog is
//! tens of thousands of items, so the scan is the intended trade-off.

/// Filter application, sorting, and pagination over a catalog slice.
pub mod engine;
/// Single-predicate evaluation against one item.
pub mod matcher;

pub use engine::{apply_filters, run_query, QueryOptions, QueryOutcome};
pub use matcher::matches;
