//! Cache Store Module
//!
//! Single-owner cache engine: HashMap storage, LRU tracking and TTL expiry.
//! Every method takes the current time explicitly; locking and the clock
//! live in [`LookupCache`](super::LookupCache).

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheCounters, CacheEntry, CacheStats, LruTracker};
use crate::config::CacheConfig;

// == Key Normalization ==
/// Canonical form of a lookup key. Case-insensitive, otherwise verbatim.
pub fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

// == Cache Store ==
/// Bounded, time-expiring LRU store.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Entries keyed by normalized key
    entries: HashMap<String, CacheEntry<V>>,
    /// LRU access tracker
    lru: LruTracker,
    /// Hit/miss/eviction counters
    counters: CacheCounters,
    /// Capacity and TTL, fixed for the store's lifetime
    config: CacheConfig,
    /// Next access sequence number
    next_seq: u64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `config` - Capacity and TTL; zero values are raised to 1
    pub fn new(config: CacheConfig) -> Self {
        let config = CacheConfig {
            ttl_millis: config.ttl_millis.max(1),
            capacity: config.capacity.max(1),
        };
        Self {
            entries: HashMap::with_capacity(config.capacity.min(1024)),
            lru: LruTracker::new(),
            counters: CacheCounters::new(),
            config,
            next_seq: 0,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit refreshes the entry's `last_accessed`. An expired entry is
    /// removed and reported as a miss. Exactly one counter moves per call.
    pub fn get(&mut self, key: &str, now: u64) -> Option<V> {
        let key = normalize_key(key);

        if self.remove_if_expired(&key, now) {
            self.counters.record_miss();
            return None;
        }

        let seq = self.bump_seq();
        match self.entries.get_mut(&key) {
            Some(entry) => {
                entry.touch(now, seq);
                self.lru.touch(&key, entry.recency());
                self.counters.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores a value, resetting its age.
    ///
    /// Inserting a new key into a full store first evicts the least
    /// recently used entry. Overwriting an existing key never evicts.
    pub fn set(&mut self, key: &str, value: V, now: u64) {
        let key = normalize_key(key);

        if !self.entries.contains_key(&key) && self.entries.len() >= self.config.capacity {
            self.evict_lru();
        }

        let seq = self.bump_seq();
        let entry = CacheEntry::new(value, now, seq);
        self.lru.touch(&key, entry.recency());
        self.entries.insert(key, entry);
    }

    // == Has ==
    /// Returns true for a present, unexpired entry.
    ///
    /// Leaves counters and recency alone, but still drops an expired entry
    /// it discovers, the same as `get`.
    pub fn has(&mut self, key: &str, now: u64) -> bool {
        let key = normalize_key(key);
        if self.remove_if_expired(&key, now) {
            return false;
        }
        self.entries.contains_key(&key)
    }

    // == Invalidate ==
    /// Removes an entry by key. No-op if absent.
    pub fn invalidate(&mut self, key: &str) {
        let key = normalize_key(key);
        if self.entries.remove(&key).is_some() {
            self.lru.remove(&key);
        }
    }

    // == Clear ==
    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.lru.clear();
        self.counters.reset();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.entries.len())
    }

    // == Purge Expired ==
    /// Removes all expired entries without touching the counters.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self, now: u64) -> usize {
        let ttl = self.config.ttl_millis;
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired(now, ttl))
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.remove(key);
            self.lru.remove(key);
        }

        expired_keys.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes `key` if it is present and expired. Returns whether it did.
    fn remove_if_expired(&mut self, key: &str, now: u64) -> bool {
        let expired = self
            .entries
            .get(key)
            .is_some_and(|entry| entry.is_expired(now, self.config.ttl_millis));

        if expired {
            self.entries.remove(key);
            self.lru.remove(key);
            debug!(key, "dropped expired cache entry");
        }
        expired
    }

    fn evict_lru(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.counters.record_eviction();
            debug!(key = %evicted, "evicted least recently used cache entry");
        }
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}
