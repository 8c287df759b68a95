//! Prometheus metrics recording.

use animedb_core::catalog::CatalogCache;
use metrics::{counter, gauge, histogram};
use std::time::Duration;

/// Records HTTP request metrics.
pub fn record_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());
}

/// Records a query execution metric.
pub fn record_query(kind: &str, matched: usize) {
    counter!("animedb_queries_total", "type" => kind.to_string()).increment(1);
    histogram!("animedb_query_matches", "type" => kind.to_string()).record(matched as f64);
}

/// Records a catalog refresh attempt.
pub fn record_refresh(success: bool) {
    let outcome = if success { "ok" } else { "failed" };
    counter!("animedb_catalog_refreshes_total", "outcome" => outcome).increment(1);
}

/// Updates the catalog-level gauges.
pub fn update_catalog_metrics(cache: &CatalogCache) {
    if let Ok(snapshot) = cache.snapshot() {
        gauge!("animedb_catalog_items").set(snapshot.len() as f64);
    }
}
