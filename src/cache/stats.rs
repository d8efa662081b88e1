//! Cache Statistics Module
//!
//! Tracks hit/miss/eviction counters and produces read-only snapshots.

use serde::Serialize;

// == Counters ==
/// Cumulative counters since construction or the last `clear`.
#[derive(Debug, Clone, Default)]
pub struct CacheCounters {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheCounters {
    // == Constructor ==
    /// Creates counters all at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Reset ==
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds a snapshot for a store currently holding `size` entries.
    pub fn snapshot(&self, size: usize) -> CacheStats {
        CacheStats::new(size, self.hits, self.misses, self.evictions)
    }
}

// == Cache Stats ==
/// Point-in-time view of cache performance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Current number of entries in the cache
    pub size: usize,
    /// Number of `get` calls that returned a value
    pub hits: u64,
    /// Number of `get` calls that found nothing or an expired entry
    pub misses: u64,
    /// Percentage of `get` calls that hit, `0.0` before any call
    pub hit_rate: f64,
    /// Number of entries dropped by LRU eviction
    pub evictions: u64,
}

impl CacheStats {
    /// Creates a snapshot, deriving the hit rate from the counters.
    pub fn new(size: usize, hits: u64, misses: u64, evictions: u64) -> Self {
        Self {
            size,
            hits,
            misses,
            hit_rate: hit_rate_percent(hits, misses),
            evictions,
        }
    }
}

// == Hit Rate ==
/// Returns `hits / (hits + misses) * 100`, or 0.0 if no requests have been made.
pub fn hit_rate_percent(hits: u64, misses: u64) -> f64 {
    let total = hits + misses;
    if total == 0 {
        0.0
    } else {
        hits as f64 / total as f64 * 100.0
    }
}
