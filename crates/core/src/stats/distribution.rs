//! Numeric bucket distributions.

use crate::field::Field;
use crate::item::Item;
use serde::Serialize;

/// One ordered bucket of a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionBucket {
    /// Human-readable range label, e.g. `"7-8"` or `"9+"`.
    pub label: String,
    pub count: usize,
}

/// Partitions items by a numeric field over the given bucket boundaries.
///
/// Bucket `i` covers the half-open range `[boundaries[i], boundaries[i+1])`;
/// the last bucket is open-ended (`>= boundaries[last]`). Values below the
/// first boundary are excluded — there is no catch-all underflow bucket.
/// Items with an undefined field value are excluded from all buckets.
pub fn distribution(items: &[&Item], field: Field, boundaries: &[f64]) -> Vec<DistributionBucket> {
    let mut counts = vec![0usize; boundaries.len()];
    for item in items {
        let Some(value) = field.numeric_value(item) else {
            continue;
        };
        if value < boundaries[0] {
            continue;
        }
        // Last bucket whose lower bound the value reaches.
        let idx = boundaries
            .iter()
            .rposition(|&b| value >= b)
            .unwrap_or(0);
        counts[idx] += 1;
    }
    boundaries
        .iter()
        .enumerate()
        .map(|(i, &lower)| DistributionBucket {
            label: bucket_label(lower, boundaries.get(i + 1).copied()),
            count: counts[i],
        })
        .collect()
}

fn bucket_label(lower: f64, upper: Option<f64>) -> String {
    match upper {
        Some(upper) => format!("{}-{}", format_bound(lower), format_bound(upper)),
        None => format!("{}+", format_bound(lower)),
    }
}

/// Integral boundaries print without a trailing `.0`.
fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(values: &[Option<f64>]) -> Vec<Item> {
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
    fn buckets_are_half_open_with_open_ended_tail() {
        let items = scored(&[Some(4.9), Some(5.0), Some(6.5), Some(9.0), Some(9.9)]);
        let refs: Vec<&Item> = items.iter().collect();
        let buckets = distribution(&refs, Field::Score, &[5.0, 6.0, 7.0, 8.0, 9.0]);
        let counts: Vec<usize> = buckets.iter().map(|b| b.count).collect();
        // 4.9 falls below the first boundary and is excluded entirely.
        assert_eq!(counts, vec![1, 1, 0, 0, 2]);
        assert_eq!(buckets[0].label, "5-6");
        assert_eq!(buckets[4].label, "9+");
    }

    #[test]
    fn undefined_values_are_excluded_not_bucketed() {
        let items = scored(&[Some(5.5), None, None]);
        let refs: Vec<&Item> = items.iter().collect();
        let buckets = distribution(&refs, Field::Score, &[5.0, 6.0]);
        let total: usize = buckets.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn boundary_value_lands_in_its_own_bucket() {
        let items = scored(&[Some(6.0)]);
        let refs: Vec<&Item> = items.iter().collect();
        let buckets = distribution(&refs, Field::Score, &[5.0, 6.0, 7.0]);
        assert_eq!(buckets[0].count, 0);
        assert_eq!(buckets[1].count, 1);
    }

    #[test]
    fn empty_input_yields_zero_counts() {
        let buckets = distribution(&[], Field::Score, &[1.0, 2.0]);
        assert_eq!(buckets.len(), 2);
        assert!(buckets.iter().all(|b| b.count == 0));
    }

    #[test]
    fn fractional_boundaries_keep_decimal_labels() {
        assert_eq!(bucket_label(7.5, Some(8.0)), "7.5-8");
        assert_eq!(bucket_label(1000.0, None), "1000+");
    }
}
