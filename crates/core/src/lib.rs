//! # animedb-core
//!
//! Embeddable in-memory catalog engine for browsing anime/manga titles:
//! a declarative filter language evaluated over a materialized catalog
//! snapshot, plus a battery of distribution, percentile, and co-occurrence
//! aggregations.
//!
//! This is the core library crate with zero async dependencies — suitable for
//! embedding directly in Rust or behind any transport layer.

/// Catalog cache: the process-wide, atomically swappable catalog snapshot.
pub mod catalog;
/// Global configuration constants: limits, defaults, and bucket boundaries.
pub mod config;
/// Core error types: catalog readiness and filter validation failures.
pub mod error;
/// Field descriptors: symbolic field names with static type classification.
pub mod field;
/// Filter types used by the query engine and the request boundary.
pub mod filter_types;
/// Catalog item: the fixed-schema record every query operates on.
pub mod item;
/// Query engine: predicate evaluation, conjunction, sort, and pagination.
pub mod query;
/// Statistics aggregator: distributions, percentiles, counts, and pairs.
pub mod stats;
