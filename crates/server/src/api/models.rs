//! Request and response data transfer objects for the REST API.
//!
//! All types derive `Serialize` and/or `Deserialize` for JSON marshalling via
//! Axum. Boundary validation of queries lives here: it is the authoritative
//! rejection point for bad pagination parameters and malformed filters — the
//! core engine assumes pre-validated input.

use crate::api::errors::ApiError;
use animedb_core::config;
use animedb_core::field::{Field, FieldKind};
use animedb_core::filter_types::{Action, Filter};
use animedb_core::item::Item;
use animedb_core::stats::StatisticsReport;
use serde::{Deserialize, Serialize};

/// Request body for `POST /catalog/query`.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub filters: Vec<Filter>,
    /// Numeric field to sort by, descending.
    pub sort_by: Option<Field>,
    #[serde(default = "default_pagesize")]
    pub pagesize: usize,
    #[serde(default)]
    pub offset: usize,
    /// Item IDs to hide, e.g. entries the caller already tracks. Opaque to
    /// the engine; resolving caller identity is not this service's job.
    #[serde(default)]
    pub exclude_ids: Vec<u64>,
}

fn default_pagesize() -> usize {
    config::DEFAULT_PAGE_SIZE
}

impl QueryRequest {
    /// Validates pagination bounds, filter count, per-filter legality, and
    /// the sort key's type class.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.pagesize == 0 || self.pagesize > config::MAX_PAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "pagesize must be 1-{}",
                config::MAX_PAGE_SIZE
            )));
        }
        if self.offset > config::MAX_OFFSET {
            return Err(ApiError::BadRequest(format!(
                "offset must be 0-{}",
                config::MAX_OFFSET
            )));
        }
        if self.exclude_ids.len() > config::MAX_EXCLUDE_IDS {
            return Err(ApiError::BadRequest(format!(
                "exclude_ids exceeds maximum of {} entries",
                config::MAX_EXCLUDE_IDS
            )));
        }
        validate_filters(&self.filters)?;
        if let Some(field) = self.sort_by {
            if field.kind() != FieldKind::Numeric {
                return Err(ApiError::BadRequest(format!(
                    "sort_by must be a numeric field, '{field}' is {}",
                    field.kind()
                )));
            }
        }
        Ok(())
    }
}

/// Request body for `POST /catalog/statistics`: a filter set without
/// pagination.
#[derive(Debug, Deserialize)]
pub struct StatisticsRequest {
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub exclude_ids: Vec<u64>,
}

impl StatisticsRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.exclude_ids.len() > config::MAX_EXCLUDE_IDS {
            return Err(ApiError::BadRequest(format!(
                "exclude_ids exceeds maximum of {} entries",
                config::MAX_EXCLUDE_IDS
            )));
        }
        validate_filters(&self.filters)
    }
}

fn validate_filters(filters: &[Filter]) -> Result<(), ApiError> {
    if filters.len() > config::MAX_FILTERS {
        return Err(ApiError::BadRequest(format!(
            "query exceeds maximum of {} filters",
            config::MAX_FILTERS
        )));
    }
    for filter in filters {
        filter
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    }
    Ok(())
}

/// Slim item view used in query result pages.
#[derive(Debug, Serialize)]
pub struct ItemSummary {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_english: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,
    pub genres: Vec<String>,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            title_english: item.title_english.clone(),
            media_type: item.media_type.clone(),
            score: item.score,
            year: item.year,
            episodes: item.episodes,
            genres: item.genres.clone(),
        }
    }
}

/// Response body for `POST /catalog/query` with pagination metadata.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub total_matched: usize,
    pub count: usize,
    pub page: Vec<ItemSummary>,
}

/// Response body for `POST /catalog/statistics`.
#[derive(Debug, Serialize)]
pub struct StatisticsResponse {
    #[serde(flatten)]
    pub report: StatisticsReport,
}

/// One entry of `GET /catalog/fields`.
#[derive(Debug, Serialize)]
pub struct FieldInfo {
    pub name: &'static str,
    pub kind: FieldKind,
    pub actions: Vec<Action>,
}

/// Response body for `POST /admin/refresh`.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub message: String,
    pub item_count: usize,
    pub elapsed_ms: u128,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub catalog_ready: bool,
    pub catalog_items: usize,
}
