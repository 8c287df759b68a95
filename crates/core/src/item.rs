//! Core catalog item type.
//!
//! An `Item` is one anime or manga entry with a fixed schema: a numeric
//! primary key, optional numeric fields (absent is distinguishable from
//! zero), category-set fields (possibly empty, never absent), and string
//! fields. Items are immutable from the query engine's perspective.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// All numeric and optional string fields use `Option` so that "value absent
/// at the source" is representable and distinct from `0` / `""` — predicates
/// and aggregations treat `None` as "never matches / skip".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Numeric primary key.
    pub id: u64,
    /// Primary title. Every entry has one.
    pub title: String,
    /// Localized (English) title, when known.
    #[serde(default)]
    pub title_english: Option<String>,
    /// Media type, e.g. "TV", "Movie", "Manga".
    #[serde(default, rename = "type")]
    pub media_type: Option<String>,
    /// Airing/publication status, e.g. "Finished Airing".
    #[serde(default)]
    pub status: Option<String>,
    /// Plot synopsis.
    #[serde(default)]
    pub synopsis: Option<String>,
    /// Community score on a 1–10 scale.
    #[serde(default)]
    pub score: Option<f64>,
    /// Score-based rank (1 = best).
    #[serde(default)]
    pub rank: Option<u32>,
    /// Popularity rank (1 = most popular).
    #[serde(default)]
    pub popularity: Option<u32>,
    /// Number of users tracking the entry.
    #[serde(default)]
    pub members: Option<u64>,
    /// Number of users that favorited the entry.
    #[serde(default)]
    pub favorites: Option<u64>,
    /// Release year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Episode count (anime).
    #[serde(default)]
    pub episodes: Option<u32>,
    /// Chapter count (manga).
    #[serde(default)]
    pub chapters: Option<u32>,
    /// Genre names. Set semantics: only presence matters.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Theme names.
    #[serde(default)]
    pub themes: Vec<String>,
    /// Demographic names, e.g. "Shounen".
    #[serde(default)]
    pub demographics: Vec<String>,
    /// Languages the entry is available in.
    #[serde(default)]
    pub languages: Vec<String>,
}
