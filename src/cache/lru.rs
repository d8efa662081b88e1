//! LRU Tracker Module
//!
//! Orders cache keys by recency so the least recently used one can be
//! found without scanning the store.

use std::collections::{BTreeMap, HashMap};

/// Recency stamp: `(last_accessed_ms, access_seq)`.
pub type Recency = (u64, u64);

// == LRU Tracker ==
/// Tracks access order for LRU eviction.
///
/// `order` is sorted oldest first, so the first entry is the eviction
/// candidate. `positions` lets a key be relocated without a scan.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: BTreeMap<Recency, String>,
    positions: HashMap<String, Recency>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    // == Touch ==
    /// Records `key` as accessed at `recency`, replacing any earlier stamp.
    pub fn touch(&mut self, key: &str, recency: Recency) {
        if let Some(previous) = self.positions.insert(key.to_string(), recency) {
            self.order.remove(&previous);
        }
        self.order.insert(recency, key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        if let Some(recency) = self.positions.remove(key) {
            self.order.remove(&recency);
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let (_, key) = self.order.pop_first()?;
        self.positions.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    #[cfg(test)]
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.first_key_value().map(|(_, key)| key.as_str())
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.order.clear();
        self.positions.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[cfg(test)]
    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }
}
