//! Predicate evaluation for catalog queries.
//!
//! Evaluates one [`Filter`] against one [`Item`]. Dispatch goes by the
//! field's static [`FieldKind`], never by inspecting the runtime shape of
//! the filter value. Two policies hold everywhere:
//!
//! - an undefined field value fails the predicate for *every* action,
//!   including `EXCLUDES`;
//! - malformed value shapes that slipped past boundary validation resolve
//!   to `false`, never a panic or an error.

use crate::field::{Field, FieldKind};
use crate::filter_types::{Action, Filter, FilterValue};
use crate::item::Item;

/// Check whether an item satisfies a single filter.
pub fn matches(item: &Item, filter: &Filter) -> bool {
    match filter.field.kind() {
        FieldKind::Numeric => matches_numeric(item, filter),
        FieldKind::CategorySet => matches_category_set(item, filter),
        FieldKind::Text => {
            // The one cross-field exception: a CONTAINS search on the primary
            // title also matches the localized title.
            if filter.field == Field::Title && filter.action == Action::Contains {
                return title_contains(item, &filter.value);
            }
            matches_text(item, filter)
        }
    }
}

fn matches_numeric(item: &Item, filter: &Filter) -> bool {
    let Some(actual) = filter.field.numeric_value(item) else {
        return false;
    };
    let Some(expected) = filter.value.as_number() else {
        return false;
    };
    match filter.action {
        // Exact comparison: no epsilon tolerance for EQUALS.
        Action::Equals => actual == expected,
        Action::GreaterThan => actual > expected,
        Action::LessThan => actual < expected,
        Action::GreaterThanOrEquals => actual >= expected,
        Action::LessThanOrEquals => actual <= expected,
        _ => false,
    }
}

fn matches_category_set(item: &Item, filter: &Filter) -> bool {
    let Some(set) = filter.field.set_value(item) else {
        return false;
    };
    let Some(wanted) = filter.value.as_list() else {
        return false;
    };
    let present = |name: &str| set.iter().any(|c| c == name);
    match filter.action {
        // all() over an empty list is vacuously true.
        Action::IncludesAll => wanted.iter().all(|w| present(w)),
        // INCLUDES_ANY with an empty list is vacuously true as well.
        Action::IncludesAny => wanted.is_empty() || wanted.iter().any(|w| present(w)),
        Action::Excludes => !wanted.iter().any(|w| present(w)),
        _ => false,
    }
}

fn matches_text(item: &Item, filter: &Filter) -> bool {
    let Some(text) = filter.field.text_value(item) else {
        return false;
    };
    match filter.action {
        Action::Equals => filter.value.as_text() == Some(text),
        Action::Contains => match filter.value.as_text() {
            Some(needle) => contains_ci(text, needle),
            None => false,
        },
        // Includes/excludes on text operate over substrings of one string,
        // not distinct set elements.
        Action::IncludesAll => match filter.value.as_list() {
            Some(needles) => needles.iter().all(|n| contains_ci(text, n)),
            None => false,
        },
        Action::IncludesAny => match filter.value.as_list() {
            Some(needles) => needles.is_empty() || needles.iter().any(|n| contains_ci(text, n)),
            None => false,
        },
        Action::Excludes => match filter.value.as_list() {
            Some(needles) => !needles.iter().any(|n| contains_ci(text, n)),
            None => false,
        },
        _ => false,
    }
}

/// Case-insensitive substring test.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// CONTAINS on the title field: match the primary title or, when present,
/// the localized title.
fn title_contains(item: &Item, value: &FilterValue) -> bool {
    let Some(needle) = value.as_text() else {
        return false;
    };
    if contains_ci(&item.title, needle) {
        return true;
    }
    item.title_english
        .as_deref()
        .is_some_and(|alt| contains_ci(alt, needle))
}
