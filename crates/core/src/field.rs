//! Field descriptors: symbolic field names with static type classification.
//!
//! Every queryable field belongs to exactly one [`FieldKind`], and the kind
//! is a static property of the field name — it never depends on item content.
//! Unknown field names fail serde deserialization at the request boundary;
//! they never reach the engine as a silent no-match.

use crate::item::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type class of a field. Determines which actions are legal and how values
/// are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Scalar numeric value, compared with ordering actions.
    Numeric,
    /// Set of category names; only presence matters.
    CategorySet,
    /// Free text, compared with exact/substring actions.
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Numeric => "numeric",
            FieldKind::CategorySet => "category-set",
            FieldKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// A queryable field of a catalog [`Item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Score,
    Rank,
    Popularity,
    Members,
    Favorites,
    Year,
    Episodes,
    Chapters,
    Genres,
    Themes,
    Demographics,
    Languages,
    Title,
    TitleEnglish,
    #[serde(rename = "type")]
    MediaType,
    Status,
    Synopsis,
}

impl Field {
    /// Every known field, in schema order. Used to publish field metadata.
    pub const ALL: [Field; 17] = [
        Field::Score,
        Field::Rank,
        Field::Popularity,
        Field::Members,
        Field::Favorites,
        Field::Year,
        Field::Episodes,
        Field::Chapters,
        Field::Genres,
        Field::Themes,
        Field::Demographics,
        Field::Languages,
        Field::Title,
        Field::TitleEnglish,
        Field::MediaType,
        Field::Status,
        Field::Synopsis,
    ];

    /// Static type classification. Total and disjoint over the field set.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Score
            | Field::Rank
            | Field::Popularity
            | Field::Members
            | Field::Favorites
            | Field::Year
            | Field::Episodes
            | Field::Chapters => FieldKind::Numeric,
            Field::Genres | Field::Themes | Field::Demographics | Field::Languages => {
                FieldKind::CategorySet
            }
            Field::Title
            | Field::TitleEnglish
            | Field::MediaType
            | Field::Status
            | Field::Synopsis => FieldKind::Text,
        }
    }

    /// Wire name of the field, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Score => "score",
            Field::Rank => "rank",
            Field::Popularity => "popularity",
            Field::Members => "members",
            Field::Favorites => "favorites",
            Field::Year => "year",
            Field::Episodes => "episodes",
            Field::Chapters => "chapters",
            Field::Genres => "genres",
            Field::Themes => "themes",
            Field::Demographics => "demographics",
            Field::Languages => "languages",
            Field::Title => "title",
            Field::TitleEnglish => "title_english",
            Field::MediaType => "type",
            Field::Status => "status",
            Field::Synopsis => "synopsis",
        }
    }

    /// Extracts the numeric value of this field, widened to `f64`.
    ///
    /// Returns `None` when the field is non-numeric or the datum is absent —
    /// never `0` for missing data.
    pub fn numeric_value(&self, item: &Item) -> Option<f64> {
        match self {
            Field::Score => item.score,
            Field::Rank => item.rank.map(f64::from),
            Field::Popularity => item.popularity.map(f64::from),
            Field::Members => item.members.map(|v| v as f64),
            Field::Favorites => item.favorites.map(|v| v as f64),
            Field::Year => item.year.map(f64::from),
            Field::Episodes => item.episodes.map(f64::from),
            Field::Chapters => item.chapters.map(f64::from),
            _ => None,
        }
    }

    /// Extracts the category set of this field.
    ///
    /// `Some` (possibly empty) for every category-set field on a validly
    /// typed item; `None` only when the field is not a category set.
    pub fn set_value<'a>(&self, item: &'a Item) -> Option<&'a [String]> {
        match self {
            Field::Genres => Some(&item.genres),
            Field::Themes => Some(&item.themes),
            Field::Demographics => Some(&item.demographics),
            Field::Languages => Some(&item.languages),
            _ => None,
        }
    }

    /// Extracts the string value of this field.
    pub fn text_value<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match self {
            Field::Title => Some(&item.title),
            Field::TitleEnglish => item.title_english.as_deref(),
            Field::MediaType => item.media_type.as_deref(),
            Field::Status => item.status.as_deref(),
            Field::Synopsis => item.synopsis.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
