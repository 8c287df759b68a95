//! HTTP request handlers and shared application state.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use crate::loader::CatalogLoader;
use animedb_core::catalog::CatalogCache;
use animedb_core::field::Field;
use animedb_core::filter_types::Action;
use animedb_core::item::Item;
use animedb_core::query::{apply_filters, run_query, QueryOptions};
use animedb_core::stats;
use axum::extract::{Path, State};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogCache,
    pub loader: Arc<dyn CatalogLoader>,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

fn ready_snapshot(state: &AppState) -> Result<Arc<animedb_core::catalog::Catalog>, ApiError> {
    state
        .catalog
        .snapshot()
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))
}

/// `POST /catalog/query`
pub async fn query(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    req.validate()?;
    let snapshot = ready_snapshot(&state)?;

    let opts = QueryOptions {
        filters: req.filters,
        sort_by: req.sort_by,
        page_size: req.pagesize,
        offset: req.offset,
        exclude_ids: req.exclude_ids.into_iter().collect(),
    };
    let outcome = run_query(snapshot.items(), &opts);
    metrics::record_query("query", outcome.total_matched);

    let page: Vec<ItemSummary> = outcome.page.iter().copied().map(ItemSummary::from).collect();
    Ok(Json(QueryResponse {
        total_matched: outcome.total_matched,
        count: page.len(),
        page,
    }))
}

/// `POST /catalog/statistics`
pub async fn statistics(
    State(state): State<AppState>,
    Json(req): Json<StatisticsRequest>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    req.validate()?;
    let snapshot = ready_snapshot(&state)?;

    let exclude_ids: HashSet<u64> = req.exclude_ids.into_iter().collect();
    let matched = apply_filters(snapshot.items(), &req.filters, &exclude_ids);
    metrics::record_query("statistics", matched.len());

    let report = stats::compute(&matched);
    Ok(Json(StatisticsResponse { report }))
}

/// `GET /catalog/items/:id`
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Item>, ApiError> {
    let snapshot = ready_snapshot(&state)?;
    snapshot
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Item {id} not found")))
}

/// `GET /catalog/fields`
pub async fn list_fields() -> Json<Vec<FieldInfo>> {
    let fields = Field::ALL
        .iter()
        .map(|field| FieldInfo {
            name: field.name(),
            kind: field.kind(),
            actions: Action::for_kind(field.kind()),
        })
        .collect();
    Json(fields)
}

/// `POST /admin/refresh`
///
/// Reloads the catalog through the loader and swaps in the new snapshot.
/// On failure the previous snapshot stays installed.
pub async fn refresh(State(state): State<AppState>) -> Result<Json<RefreshResponse>, ApiError> {
    let start = Instant::now();
    let loader = Arc::clone(&state.loader);
    let loaded = tokio::task::spawn_blocking(move || loader.load())
        .await
        .map_err(|e| ApiError::Internal(format!("refresh task failed: {e}")))?;

    match loaded {
        Ok(items) => {
            let snapshot = state.catalog.install(items);
            metrics::record_refresh(true);
            metrics::update_catalog_metrics(&state.catalog);
            tracing::info!(items = snapshot.len(), "catalog refreshed");
            Ok(Json(RefreshResponse {
                message: "Catalog refreshed".to_string(),
                item_count: snapshot.len(),
                elapsed_ms: start.elapsed().as_millis(),
            }))
        }
        Err(e) => {
            metrics::record_refresh(false);
            tracing::warn!("catalog refresh failed, keeping previous snapshot: {e}");
            Err(ApiError::BadGateway(format!("Catalog load failed: {e}")))
        }
    }
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let (ready, items) = match state.catalog.snapshot() {
        Ok(snapshot) => (true, snapshot.len()),
        Err(_) => (false, 0),
    };
    Json(HealthResponse {
        status: if ready { "ok" } else { "initializing" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        catalog_ready: ready,
        catalog_items: items,
    })
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    metrics::update_catalog_metrics(&state.catalog);
    state.prometheus_handle.render()
}
