//! animedb-server — HTTP server for the animedb catalog.
//!
//! Provides the REST API and the catalog loader/refresh plumbing.
//! Core query and statistics logic lives in `animedb-core`.

/// REST API layer: Axum router, HTTP handlers, models, errors, metrics.
pub mod api;
/// Catalog loaders: the external `loadCatalog` collaborator.
pub mod loader;
