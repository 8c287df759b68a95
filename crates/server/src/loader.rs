//! Catalog loaders.
//!
//! A [`CatalogLoader`] materializes the full item list from some external
//! store. Loading may fail; the caller keeps the previous snapshot in that
//! case — all retry/resilience policy lives here at the edge, never in core.

use animedb_core::item::Item;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Catalog load failures.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("catalog read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// External collaborator that supplies the materialized catalog.
pub trait CatalogLoader: Send + Sync {
    /// Loads the full item list. On failure the previous snapshot stays
    /// installed.
    fn load(&self) -> Result<Vec<Item>, LoaderError>;
}

/// Loads the catalog from a JSON file containing an array of items.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    path: PathBuf,
}

impl JsonFileLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogLoader for JsonFileLoader {
    fn load(&self) -> Result<Vec<Item>, LoaderError> {
        let data = fs::read(&self.path)?;
        let items: Vec<Item> = serde_json::from_slice(&data)?;
        Ok(items)
    }
}
