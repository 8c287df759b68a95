//! Statistics aggregator.
//!
//! [`compute`] is a pure function of its input slice: no dependency on the
//! catalog cache, no hidden state, and every aggregation is independently
//! computable. Re-running it over the same input yields identical output.

/// Numeric bucket distributions.
pub mod distribution;
/// Percentile summaries over descending-sorted values.
pub mod percentiles;
/// Category counts, genre pair rankings, and group-by counts.
pub mod counts;

pub use counts::{NamedCount, YearCount};
pub use distribution::DistributionBucket;
pub use percentiles::PercentileSummary;

use crate::config;
use crate::field::Field;
use crate::item::Item;
use serde::Serialize;

/// Aggregate snapshot over one (sub)set of the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    /// Number of items aggregated.
    pub total: usize,
    pub score_distribution: Vec<DistributionBucket>,
    pub members_distribution: Vec<DistributionBucket>,
    pub episodes_distribution: Vec<DistributionBucket>,
    pub score_percentiles: PercentileSummary,
    pub members_percentiles: PercentileSummary,
    pub favorites_percentiles: PercentileSummary,
    pub genre_counts: Vec<NamedCount>,
    pub theme_counts: Vec<NamedCount>,
    pub demographic_counts: Vec<NamedCount>,
    /// Top co-occurring genre pairs, keyed `"A + B"` with A < B.
    pub genre_pairs: Vec<NamedCount>,
    pub type_distribution: Vec<NamedCount>,
    pub year_distribution: Vec<YearCount>,
}

/// Computes the full statistics report for a set of items.
///
/// All aggregations tolerate missing field values by skipping them; an empty
/// input degrades to zero counts and zero-valued percentile summaries.
pub fn compute(items: &[&Item]) -> StatisticsReport {
    StatisticsReport {
        total: items.len(),
        score_distribution: distribution::distribution(items, Field::Score, &config::SCORE_BUCKETS),
        members_distribution: distribution::distribution(
            items,
            Field::Members,
            &config::MEMBERS_BUCKETS,
        ),
        episodes_distribution: distribution::distribution(
            items,
            Field::Episodes,
            &config::EPISODES_BUCKETS,
        ),
        score_percentiles: percentiles::percentiles(items, Field::Score),
        members_percentiles: percentiles::percentiles(items, Field::Members),
        favorites_percentiles: percentiles::percentiles(items, Field::Favorites),
        genre_counts: counts::category_counts(items, Field::Genres),
        theme_counts: counts::category_counts(items, Field::Themes),
        demographic_counts: counts::category_counts(items, Field::Demographics),
        genre_pairs: counts::genre_pairs(items, config::TOP_PAIR_COUNT),
        type_distribution: counts::type_distribution(items),
        year_distribution: counts::year_distribution(items),
    }
}
