//! Cache Module
//!
//! In-memory lookup cache with TTL expiration and LRU eviction.

mod clock;
mod entry;
mod lru;
mod shared;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use lru::{LruTracker, Recency};
pub use shared::LookupCache;
pub use stats::{hit_rate_percent, CacheCounters, CacheStats};
pub use store::{normalize_key, CacheStore};
