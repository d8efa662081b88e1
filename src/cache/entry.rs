//! Cache Entry Module
//!
//! Defines a single cached lookup result with its age and recency metadata.

// == Cache Entry ==
/// Represents a single cache entry with value and metadata.
///
/// The normalized key is the map key in [`CacheStore`](super::CacheStore)
/// and is not repeated here.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Insert/overwrite time (clock milliseconds)
    pub cached_at: u64,
    /// Time of the most recent hit, or of the write if never read
    pub last_accessed: u64,
    /// Position in access order, used to break `last_accessed` ties
    pub(crate) access_seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a fresh entry written at `now`.
    pub fn new(value: V, now: u64, access_seq: u64) -> Self {
        Self {
            value,
            cached_at: now,
            last_accessed: now,
            access_seq,
        }
    }

    // == Age ==
    /// Milliseconds since the entry was written. Saturates at zero.
    pub fn age_ms(&self, now: u64) -> u64 {
        now.saturating_sub(self.cached_at)
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl_ms`.
    ///
    /// Expiry is strict: an entry aged exactly `ttl_ms` is still valid.
    pub fn is_expired(&self, now: u64, ttl_ms: u64) -> bool {
        self.age_ms(now) > ttl_ms
    }

    // == Touch ==
    /// Records a successful read at `now`.
    pub fn touch(&mut self, now: u64, access_seq: u64) {
        self.last_accessed = now;
        self.access_seq = access_seq;
    }

    /// Returns the LRU ordering key of this entry.
    pub(crate) fn recency(&self) -> (u64, u64) {
        (self.last_accessed, self.access_seq)
    }
}
