//! Global configuration constants for animedb.
//!
//! All tuning parameters, input validation limits, and server defaults are
//! defined here. These are compile-time constants; runtime configuration is
//! handled via CLI arguments and environment variables in the server crate.

/// Default number of items returned per query page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Maximum number of items returnable in a single query page.
pub const MAX_PAGE_SIZE: usize = 500;

/// Maximum pagination offset for query results.
pub const MAX_OFFSET: usize = 100_000;

/// Maximum number of filters accepted in a single query.
pub const MAX_FILTERS: usize = 32;

/// Maximum number of excluded item IDs accepted in a single query.
pub const MAX_EXCLUDE_IDS: usize = 10_000;

/// Number of top genre pairs reported by the statistics aggregator.
pub const TOP_PAIR_COUNT: usize = 20;

/// Bucket boundaries for the score distribution.
///
/// Buckets are half-open `[b[i], b[i+1])` with the last bucket open-ended
/// (`>= b[last]`). Scores below the first boundary are excluded.
pub const SCORE_BUCKETS: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];

/// Bucket boundaries for the members distribution.
pub const MEMBERS_BUCKETS: [f64; 6] = [
    1_000.0,
    10_000.0,
    50_000.0,
    100_000.0,
    500_000.0,
    1_000_000.0,
];

/// Bucket boundaries for the episode-count distribution.
pub const EPISODES_BUCKETS: [f64; 5] = [1.0, 13.0, 26.0, 52.0, 100.0];

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3030;

/// Default path to the catalog JSON file consumed by the loader.
pub const DEFAULT_CATALOG_PATH: &str = "./data/catalog.json";

/// Default interval (in seconds) between automatic catalog refreshes. 0 = disabled.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3_600;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Global rate limit in requests per second.
pub const RATE_LIMIT_RPS: u64 = 100;

/// Maximum HTTP request body size in bytes (2 MB).
pub const MAX_REQUEST_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;
