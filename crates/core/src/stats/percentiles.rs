//! Percentile summaries over descending-sorted field values.

use crate::field::Field;
use crate::item::Item;
use serde::Serialize;
use std::cmp::Ordering;

/// Percentile snapshot for one numeric field.
///
/// Percentiles follow this system's descending convention: values are sorted
/// descending and percentile-K is the value at index `floor(N × K)` for
/// top-fraction K, so p99 means "top 1%" — the opposite of ascending
/// percentile systems. Preserved verbatim; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct PercentileSummary {
    pub p99: f64,
    pub p95: f64,
    pub p90: f64,
    pub median: f64,
    pub mean: f64,
}

/// Computes the percentile summary for a numeric field.
///
/// Undefined values are skipped. An empty value set yields the all-zero
/// summary rather than an error.
pub fn percentiles(items: &[&Item], field: Field) -> PercentileSummary {
    let mut values: Vec<f64> = items
        .iter()
        .filter_map(|item| field.numeric_value(item))
        .collect();
    if values.is_empty() {
        return PercentileSummary::default();
    }
    values.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    let at = |fraction: f64| {
        let idx = (values.len() as f64 * fraction) as usize;
        values[idx.min(values.len() - 1)]
    };
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    PercentileSummary {
        p99: at(0.01),
        p95: at(0.05),
        p90: at(0.10),
        median: at(0.5),
        mean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(values: &[f64]) -> Vec<Item> {
        values
            .iter()
            .enumerate()
            .map(|(i, score)| {
                serde_json::from_value(serde_json::json!({
                    "id": i as u64 + 1,
                    "title": format!("item-{i}"),
                    "score": score
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn worked_example_from_ten_descending_values() {
        let items = scored(&[10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        let refs: Vec<&Item> = items.iter().collect();
        let summary = percentiles(&refs, Field::Score);
        // p90 reads index floor(10 * 0.1) = 1 of the descending sort.
        assert_eq!(summary.p90, 9.0);
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.mean, 5.5);
        // p99/p95 both clamp into the top of the small sample.
        assert_eq!(summary.p99, 10.0);
        assert_eq!(summary.p95, 10.0);
    }

    #[test]
    fn input_order_does_not_matter() {
        let items = scored(&[3.0, 10.0, 1.0, 7.0, 5.0]);
        let refs: Vec<&Item> = items.iter().collect();
        let summary = percentiles(&refs, Field::Score);
        // Descending sort is [10,7,5,3,1]; median index floor(5 * 0.5) = 2.
        assert_eq!(summary.median, 5.0);
        assert_eq!(summary.p90, 10.0);
    }

    #[test]
    fn single_value_is_every_percentile() {
        let items = scored(&[8.2]);
        let refs: Vec<&Item> = items.iter().collect();
        let summary = percentiles(&refs, Field::Score);
        assert_eq!(summary.p99, 8.2);
        assert_eq!(summary.p90, 8.2);
        assert_eq!(summary.median, 8.2);
        assert_eq!(summary.mean, 8.2);
    }

    #[test]
    fn empty_set_yields_zero_sentinel() {
        let summary = percentiles(&[], Field::Score);
        assert_eq!(summary, PercentileSummary::default());
    }

    #[test]
    fn undefined_values_are_skipped() {
        let mut items = scored(&[4.0, 8.0]);
        items.push(
            serde_json::from_value(serde_json::json!({"id": 99, "title": "no score"})).unwrap(),
        );
        let refs: Vec<&Item> = items.iter().collect();
        let summary = percentiles(&refs, Field::Score);
        assert_eq!(summary.mean, 6.0);
        assert_eq!(summary.median, 4.0);
    }
}
