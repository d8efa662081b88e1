//! Shared Cache Handle
//!
//! Thread-safe, cloneable front for [`CacheStore`]. Every operation runs
//! under one mutex; no operation blocks on I/O or awaits, so the lock is
//! never held across a suspension point.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore, Clock, SystemClock};
use crate::config::CacheConfig;

// == Lookup Cache ==
/// Capacity-bounded, time-expiring cache of lookup results.
///
/// Clones share the same underlying store. Values are returned by clone, so
/// nothing a caller does with a returned value can reach the cached copy.
///
/// # Example
/// ```
/// use poke_tourney::cache::LookupCache;
/// use poke_tourney::config::CacheConfig;
///
/// let cache: LookupCache<u32> = LookupCache::new(CacheConfig::default());
/// cache.set("Pikachu", 25);
/// assert_eq!(cache.get("pikachu"), Some(25));
/// ```
pub struct LookupCache<V, C = SystemClock> {
    store: Arc<Mutex<CacheStore<V>>>,
    clock: C,
}

impl<V: Clone> LookupCache<V, SystemClock> {
    /// Creates a cache driven by the system monotonic clock.
    pub fn new(config: CacheConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<V: Clone, C: Clock> LookupCache<V, C> {
    /// Creates a cache with a custom clock (useful for testing).
    pub fn with_clock(config: CacheConfig, clock: C) -> Self {
        Self {
            store: Arc::new(Mutex::new(CacheStore::new(config))),
            clock,
        }
    }

    /// Returns the value for `key`, or `None` if absent or expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now_ms();
        self.store.lock().get(key, now)
    }

    /// Stores `value` under `key`, evicting the LRU entry if full.
    pub fn set(&self, key: &str, value: V) {
        let now = self.clock.now_ms();
        self.store.lock().set(key, value, now);
    }

    /// Checks for a live entry without counting a hit or miss.
    pub fn has(&self, key: &str) -> bool {
        let now = self.clock.now_ms();
        self.store.lock().has(key, now)
    }

    pub fn invalidate(&self, key: &str) {
        self.store.lock().invalidate(key);
    }

    /// Drops all entries and zeroes the counters.
    pub fn clear(&self) {
        self.store.lock().clear();
    }

    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    /// Removes every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now_ms();
        self.store.lock().purge_expired(now)
    }
}

impl<V, C: Clone> Clone for LookupCache<V, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: self.clock.clone(),
        }
    }
}

impl<V, C> fmt::Debug for LookupCache<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupCache").finish_non_exhaustive()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use std::thread;
    use std::thread::sleep;
    use std::time::Duration;

    fn manual_cache(
        capacity: usize,
        ttl_millis: u64,
    ) -> (LookupCache<u32, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let cache = LookupCache::with_clock(
            CacheConfig {
                ttl_millis,
                capacity,
            },
            clock.clone(),
        );
        (cache, clock)
    }

    #[test]
    fn test_clones_share_store() {
        let (cache, _) = manual_cache(10, 1_000);
        let other = cache.clone();

        cache.set("snorlax", 143);

        assert_eq!(other.get("SNORLAX"), Some(143));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_zero_capacity_config_still_bounded() {
        let (cache, _) = manual_cache(0, 1_000);

        cache.set("a", 1);
        cache.set("b", 2);

        assert_eq!(cache.stats().size, 1);
        assert!(cache.has("b"));
    }

    #[test]
    fn test_returned_value_is_independent() {
        let cache: LookupCache<Vec<String>> = LookupCache::new(CacheConfig::default());
        let mut types = vec!["electric".to_string()];
        cache.set("pikachu", types.clone());

        types.push("fairy".to_string());
        let mut fetched = cache.get("pikachu").unwrap();
        fetched.clear();

        assert_eq!(cache.get("pikachu"), Some(vec!["electric".to_string()]));
    }

    #[test]
    fn test_expiry_with_manual_clock() {
        let (cache, clock) = manual_cache(10, 1_000);

        cache.set("a", 1);
        clock.advance(1_000);
        assert_eq!(cache.get("a"), Some(1));

        clock.advance(1);
        assert!(!cache.has("a"));
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.stats().size, 0);
    }

    #[test]
    fn test_end_to_end_scenario_real_clock() {
        let cache: LookupCache<u32> = LookupCache::new(CacheConfig {
            ttl_millis: 1_000,
            capacity: 2,
        });

        cache.set("a", 1);
        cache.set("b", 2);
        assert_eq!(cache.get("a"), Some(1));
        assert_eq!(cache.stats().hits, 1);

        cache.set("c", 3);
        assert!(!cache.has("b"));
        assert!(cache.has("a"));
        assert!(cache.has("c"));

        sleep(Duration::from_millis(1_100));

        assert_eq!(cache.get("a"), None);
        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.hit_rate, 50.0);
    }

    #[test]
    fn test_concurrent_access_respects_capacity() {
        let cache: LookupCache<usize> = LookupCache::new(CacheConfig {
            ttl_millis: 60_000,
            capacity: 16,
        });

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let cache = cache.clone();
                thread::spawn(move || {
                    for i in 0..200 {
                        let key = format!("mon-{}", (worker * 200 + i) % 40);
                        cache.set(&key, i);
                        let _ = cache.get(&key);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let stats = cache.stats();
        assert!(stats.size <= 16);
        assert_eq!(stats.hits + stats.misses, 8 * 200);
    }
}
