//! Filter application, sorting, and pagination over a catalog slice.

use crate::field::Field;
use crate::filter_types::Filter;
use crate::item::Item;
use crate::query::matcher::matches;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Parameters of one query execution.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    /// AND-combined predicates. Empty means "match everything".
    pub filters: Vec<Filter>,
    /// Optional numeric sort key, applied descending after filtering.
    pub sort_by: Option<Field>,
    /// Page size, applied after sorting.
    pub page_size: usize,
    /// Number of matched items skipped before the page starts.
    pub offset: usize,
    /// Item IDs to drop (e.g. entries the caller already tracks), applied as
    /// a negated membership test in the same scan.
    pub exclude_ids: HashSet<u64>,
}

/// Result of one query execution: the page slice plus the total match count
/// the client needs to render "N results, showing page K".
#[derive(Debug)]
pub struct QueryOutcome<'a> {
    pub total_matched: usize,
    pub page: Vec<&'a Item>,
}

/// Returns every item matching all filters, in catalog order.
///
/// One linear scan, O(|items| × |filters|). This also backs the statistics
/// path, which aggregates over the full match set rather than a page.
pub fn apply_filters<'a>(
    items: &'a [Item],
    filters: &[Filter],
    exclude_ids: &HashSet<u64>,
) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| !exclude_ids.contains(&item.id))
        .filter(|item| filters.iter().all(|f| matches(item, f)))
        .collect()
}

/// Runs a full query: filter, optionally sort descending, then paginate.
pub fn run_query<'a>(items: &'a [Item], opts: &QueryOptions) -> QueryOutcome<'a> {
    let mut matched = apply_filters(items, &opts.filters, &opts.exclude_ids);

    if let Some(field) = opts.sort_by {
        // Descending by the numeric key; items without the key sort last.
        // sort_by is stable, so equal keys keep catalog order.
        matched.sort_by(|a, b| {
            match (field.numeric_value(a), field.numeric_value(b)) {
                (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }

    let total_matched = matched.len();
    let page = matched
        .into_iter()
        .skip(opts.offset)
        .take(opts.page_size)
        .collect();

    QueryOutcome {
        total_matched,
        page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_types::{Action, FilterValue};
    use serde_json::json;

    fn catalog() -> Vec<Item> {
        serde_json::from_value(json!([
            {
                "id": 1, "title": "Alpha", "type": "TV", "score": 9.0,
                "year": 2011, "genres": ["Action", "Drama"]
            },
            {
                "id": 2, "title": "Beta", "type": "Movie", "score": 7.5,
                "year": 2015, "genres": ["Action"]
            },
            {
                "id": 3, "title": "Gamma", "type": "TV",
                "year": 2020, "genres": ["Comedy"]
            }
        ]))
        .unwrap()
    }

    fn score_gte(value: f64) -> Filter {
        Filter {
            field: Field::Score,
            action: Action::GreaterThanOrEquals,
            value: FilterValue::Number(value),
            weight: None,
        }
    }

    fn opts(filters: Vec<Filter>) -> QueryOptions {
        QueryOptions {
            filters,
            sort_by: None,
            page_size: 50,
            offset: 0,
            exclude_ids: HashSet::new(),
        }
    }

    #[test]
    fn empty_query_returns_full_catalog_in_order() {
        let items = catalog();
        let outcome = run_query(&items, &opts(vec![]));
        assert_eq!(outcome.total_matched, 3);
        let ids: Vec<u64> = outcome.page.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn undefined_score_excluded_from_comparison() {
        // Catalog scores are [9.0, 7.5, undefined]; score >= 8 keeps only item 1.
        let items = catalog();
        let outcome = run_query(&items, &opts(vec![score_gte(8.0)]));
        assert_eq!(outcome.total_matched, 1);
        assert_eq!(outcome.page[0].id, 1);
    }

    #[test]
    fn adding_a_filter_never_grows_the_result() {
        let items = catalog();
        let base = opts(vec![score_gte(5.0)]);
        let narrowed = opts(vec![
            score_gte(5.0),
            Filter {
                field: Field::Genres,
                action: Action::IncludesAny,
                value: FilterValue::Text("Drama".into()),
                weight: None,
            },
        ]);
        let base_ids: HashSet<u64> =
            run_query(&items, &base).page.iter().map(|i| i.id).collect();
        let narrowed_ids: HashSet<u64> =
            run_query(&items, &narrowed).page.iter().map(|i| i.id).collect();
        assert!(narrowed_ids.is_subset(&base_ids));
    }

    #[test]
    fn conjunction_requires_all_filters() {
        let items = catalog();
        let q = opts(vec![
            Filter {
                field: Field::MediaType,
                action: Action::Equals,
                value: FilterValue::Text("TV".into()),
                weight: None,
            },
            score_gte(1.0),
        ]);
        // Item 3 is TV but has no score, item 2 has a score but is a Movie.
        let outcome = run_query(&items, &q);
        assert_eq!(outcome.total_matched, 1);
        assert_eq!(outcome.page[0].id, 1);
    }

    #[test]
    fn sort_descending_with_undefined_last() {
        let items = catalog();
        let mut q = opts(vec![]);
        q.sort_by = Some(Field::Score);
        let outcome = run_query(&items, &q);
        let ids: Vec<u64> = outcome.page.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let mut q = opts(vec![]);
        q.sort_by = Some(Field::Year);
        let outcome = run_query(&items, &q);
        let ids: Vec<u64> = outcome.page.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn pagination_slices_after_sort_and_keeps_total() {
        let items = catalog();
        let mut q = opts(vec![]);
        q.sort_by = Some(Field::Year);
        q.page_size = 1;
        q.offset = 1;
        let outcome = run_query(&items, &q);
        assert_eq!(outcome.total_matched, 3);
        assert_eq!(outcome.page.len(), 1);
        assert_eq!(outcome.page[0].id, 2);
    }

    #[test]
    fn offset_past_the_end_yields_empty_page() {
        let items = catalog();
        let mut q = opts(vec![]);
        q.offset = 10;
        let outcome = run_query(&items, &q);
        assert_eq!(outcome.total_matched, 3);
        assert!(outcome.page.is_empty());
    }

    #[test]
    fn exclude_ids_drop_items_in_the_same_pass() {
        let items = catalog();
        let mut q = opts(vec![]);
        q.exclude_ids = HashSet::from([1, 3]);
        let outcome = run_query(&items, &q);
        assert_eq!(outcome.total_matched, 1);
        assert_eq!(outcome.page[0].id, 2);
    }

    #[test]
    fn empty_catalog_is_not_an_error() {
        let outcome = run_query(&[], &opts(vec![score_gte(1.0)]));
        assert_eq!(outcome.total_matched, 0);
        assert!(outcome.page.is_empty());
    }
}
