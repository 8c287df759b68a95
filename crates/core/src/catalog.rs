//! Catalog cache: the process-wide, swappable catalog snapshot.
//!
//! The cache holds at most one immutable [`Catalog`] behind an
//! `Arc<RwLock<Option<Arc<Catalog>>>>`. Readers clone the inner `Arc` under a
//! short read lock and then work on the snapshot without further locking;
//! a refresh builds a whole new catalog and swaps the reference, so readers
//! never observe a partially-updated catalog. Single writer, many readers,
//! last write wins.

use crate::error::CatalogError;
use crate::item::Item;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::SystemTime;

/// One immutable, fully materialized catalog snapshot.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<Item>,
    /// Primary key → index into `items`.
    index: HashMap<u64, usize>,
    loaded_at: SystemTime,
}

impl Catalog {
    fn new(items: Vec<Item>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id, idx))
            .collect();
        Self {
            items,
            index,
            loaded_at: SystemTime::now(),
        }
    }

    /// All items, in load order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by primary key.
    pub fn get(&self, id: u64) -> Option<&Item> {
        self.index.get(&id).map(|&idx| &self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When this snapshot was installed.
    pub fn loaded_at(&self) -> SystemTime {
        self.loaded_at
    }
}

/// Cloneable handle to the current catalog snapshot.
///
/// Starts out not-ready; [`snapshot`](CatalogCache::snapshot) distinguishes
/// "catalog not yet loaded" from "catalog loaded but empty". There is no
/// ambient global: the cache is constructed once and injected wherever reads
/// happen.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    inner: Arc<RwLock<Option<Arc<Catalog>>>>,
}

impl CatalogCache {
    /// Creates an empty, not-yet-loaded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a new snapshot from `items` and atomically swaps it in.
    /// Returns the installed snapshot. Never blocks concurrent readers of
    /// the previous snapshot.
    pub fn install(&self, items: Vec<Item>) -> Arc<Catalog> {
        let snapshot = Arc::new(Catalog::new(items));
        *self.inner.write() = Some(Arc::clone(&snapshot));
        snapshot
    }

    /// Returns the current snapshot, or [`CatalogError::NotReady`] before the
    /// first install.
    pub fn snapshot(&self) -> Result<Arc<Catalog>, CatalogError> {
        self.inner
            .read()
            .as_ref()
            .map(Arc::clone)
            .ok_or(CatalogError::NotReady)
    }

    /// Whether a snapshot has been installed.
    pub fn is_ready(&self) -> bool {
        self.inner.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, title: &str) -> Item {
        serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
    }

    #[test]
    fn fresh_cache_is_not_ready() {
        let cache = CatalogCache::new();
        assert!(!cache.is_ready());
        assert_eq!(cache.snapshot().unwrap_err(), CatalogError::NotReady);
    }

    #[test]
    fn empty_catalog_is_ready_but_empty() {
        // "no matches" and "data unavailable" must stay distinguishable
        let cache = CatalogCache::new();
        cache.install(vec![]);
        assert!(cache.is_ready());
        assert!(cache.snapshot().unwrap().is_empty());
    }

    #[test]
    fn install_swaps_snapshot_last_write_wins() {
        let cache = CatalogCache::new();
        cache.install(vec![item(1, "First")]);
        cache.install(vec![item(2, "Second"), item(3, "Third")]);
        let snapshot = cache.snapshot().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.get(1).is_none());
        assert_eq!(snapshot.get(2).unwrap().title, "Second");
    }

    #[test]
    fn old_snapshot_survives_a_refresh() {
        let cache = CatalogCache::new();
        cache.install(vec![item(1, "First")]);
        let held = cache.snapshot().unwrap();
        cache.install(vec![item(2, "Second")]);
        // A reader holding the old Arc keeps a consistent view.
        assert_eq!(held.get(1).unwrap().title, "First");
        assert_eq!(cache.snapshot().unwrap().get(2).unwrap().title, "Second");
    }

    #[test]
    fn clones_share_the_same_snapshot() {
        let cache = CatalogCache::new();
        let handle = cache.clone();
        cache.install(vec![item(7, "Shared")]);
        assert_eq!(handle.snapshot().unwrap().get(7).unwrap().title, "Shared");
    }

    #[test]
    fn lookup_by_primary_key() {
        let cache = CatalogCache::new();
        cache.install(vec![item(10, "a"), item(20, "b")]);
        let snapshot = cache.snapshot().unwrap();
        assert_eq!(snapshot.get(20).unwrap().title, "b");
        assert!(snapshot.get(30).is_none());
    }
}
