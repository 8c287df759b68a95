//! Category occurrence counts, co-occurring pairs, and group-by counts.

use crate::field::Field;
use crate::item::Item;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A named count, used for categories, pair keys, and type groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

/// Item count per release year, ascending by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Counts how many items carry each category of a category-set field,
/// sorted by count descending.
///
/// Ties keep discovery order: categories are accumulated in first-seen order
/// and `sort_by` is stable, so equal counts never reshuffle. The category
/// name is deliberately not a tiebreak.
pub fn category_counts(items: &[&Item], field: Field) -> Vec<NamedCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        let Some(set) = field.set_value(item) else {
            continue;
        };
        for category in set {
            if !counts.contains_key(category) {
                order.push(category.clone());
            }
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }
    let mut out: Vec<NamedCount> = order
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            NamedCount { name, count }
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Ranks co-occurring genre pairs across all items, top `limit` by count.
///
/// Each item's genres are sorted lexicographically before pairing, so the
/// key `"A + B"` (A < B) identifies a pair regardless of storage order.
/// Equal counts rank by key ascending for deterministic output.
pub fn genre_pairs(items: &[&Item], limit: usize) -> Vec<NamedCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        let mut genres: Vec<&str> = item.genres.iter().map(String::as_str).collect();
        genres.sort_unstable();
        genres.dedup();
        for i in 0..genres.len() {
            for j in i + 1..genres.len() {
                let key = format!("{} + {}", genres[i], genres[j]);
                *counts.entry(key).or_insert(0) += 1;
            }
        }
    }
    let mut out: Vec<NamedCount> = counts
        .into_iter()
        .map(|(name, count)| NamedCount { name, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    out.truncate(limit);
    out
}

/// Groups items by exact media type, in discovery order. No bucketing.
pub fn type_distribution(items: &[&Item]) -> Vec<NamedCount> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for item in items {
        let Some(media_type) = item.media_type.as_deref() else {
            continue;
        };
        if !counts.contains_key(media_type) {
            order.push(media_type.to_string());
        }
        *counts.entry(media_type.to_string()).or_insert(0) += 1;
    }
    order
        .into_iter()
        .map(|name| {
            let count = counts[&name];
            NamedCount { name, count }
        })
        .collect()
}

/// Groups items by exact release year, ascending by year.
pub fn year_distribution(items: &[&Item]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for item in items {
        if let Some(year) = item.year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}
