//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against its capacity, expiry,
//! statistics and recency guarantees.

use proptest::prelude::*;

use crate::cache::{normalize_key, CacheStore};
use crate::config::CacheConfig;

// == Test Configuration ==
const TEST_TTL_MS: u64 = 1_000;

// == Strategies ==
/// Small key alphabet with mixed case so collisions and normalization happen.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-cA-C]{1,2}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Has { key: String },
    Invalidate { key: String },
    /// Advance the clock by this many milliseconds
    Wait { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        3 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        3 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Has { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Invalidate { key }),
        1 => (0..600u64).prop_map(|ms| CacheOp::Wait { ms }),
    ]
}

fn new_store(capacity: usize) -> CacheStore<u32> {
    CacheStore::new(CacheConfig {
        ttl_millis: TEST_TTL_MS,
        capacity,
    })
}

// == Reference Model ==
/// Straightforward LRU: `order` holds keys oldest first.
#[derive(Debug, Default)]
struct Model {
    order: Vec<String>,
    values: std::collections::HashMap<String, (u32, u64)>,
    capacity: usize,
}

impl Model {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    fn drop_key(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.values.remove(key);
    }

    fn expire(&mut self, key: &str, now: u64) -> bool {
        let expired = matches!(
            self.values.get(key),
            Some((_, cached_at)) if now - *cached_at > TEST_TTL_MS
        );
        if expired {
            self.drop_key(key);
        }
        expired
    }

    fn get(&mut self, key: &str, now: u64) -> Option<u32> {
        let key = normalize_key(key);
        if self.expire(&key, now) {
            return None;
        }
        let (value, _) = *self.values.get(&key)?;
        self.order.retain(|k| *k != key);
        self.order.push(key);
        Some(value)
    }

    fn set(&mut self, key: &str, value: u32, now: u64) {
        let key = normalize_key(key);
        if !self.values.contains_key(&key) && self.values.len() >= self.capacity {
            let oldest = self.order.remove(0);
            self.values.remove(&oldest);
        }
        self.order.retain(|k| *k != key);
        self.order.push(key.clone());
        self.values.insert(key, (value, now));
    }

    fn has(&mut self, key: &str, now: u64) -> bool {
        let key = normalize_key(key);
        !self.expire(&key, now) && self.values.contains_key(&key)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any operation sequence, the store behaves like the reference LRU
    // model and never exceeds its capacity.
    #[test]
    fn prop_matches_reference_model(
        capacity in 1usize..5,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut store = new_store(capacity);
        let mut model = Model::new(capacity);
        let mut now = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => {
                    store.set(&key, value, now);
                    model.set(&key, value, now);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(store.get(&key, now), model.get(&key, now), "get({})", key);
                }
                CacheOp::Has { key } => {
                    prop_assert_eq!(store.has(&key, now), model.has(&key, now), "has({})", key);
                }
                CacheOp::Invalidate { key } => {
                    store.invalidate(&key);
                    model.drop_key(&normalize_key(&key));
                }
                CacheOp::Wait { ms } => now += ms,
            }

            prop_assert!(store.len() <= capacity, "size {} exceeds {}", store.len(), capacity);
            prop_assert_eq!(store.len(), model.values.len());
        }
    }

    // Every get moves exactly one counter, and hit rate follows from them.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let mut store = new_store(3);
        let mut expected_hits = 0u64;
        let mut expected_misses = 0u64;
        let mut now = 0u64;

        for op in ops {
            match op {
                CacheOp::Set { key, value } => store.set(&key, value, now),
                CacheOp::Get { key } => match store.get(&key, now) {
                    Some(_) => expected_hits += 1,
                    None => expected_misses += 1,
                },
                CacheOp::Has { key } => {
                    store.has(&key, now);
                }
                CacheOp::Invalidate { key } => store.invalidate(&key),
                CacheOp::Wait { ms } => now += ms,
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits);
        prop_assert_eq!(stats.misses, expected_misses);
        prop_assert_eq!(stats.size, store.len());

        let total = expected_hits + expected_misses;
        if total == 0 {
            prop_assert_eq!(stats.hit_rate, 0.0);
        } else {
            let expected = expected_hits as f64 / total as f64 * 100.0;
            prop_assert!((stats.hit_rate - expected).abs() < 1e-9);
        }
    }

    // An entry older than the TTL is never returned, and is gone afterwards.
    #[test]
    fn prop_never_returns_expired(
        key in key_strategy(),
        value in any::<u32>(),
        written_at in 0u64..10_000,
        age in 0u64..3_000
    ) {
        let mut store = new_store(10);
        store.set(&key, value, written_at);

        let now = written_at + age;
        let result = store.get(&key, now);

        if age > TEST_TTL_MS {
            prop_assert_eq!(result, None);
            prop_assert!(store.is_empty());
        } else {
            prop_assert_eq!(result, Some(value));
        }
    }

    // Any casing of a key reaches the same slot.
    #[test]
    fn prop_key_normalization(key in "[a-zA-Z]{1,12}", value in any::<u32>()) {
        let mut store = new_store(10);
        store.set(&key, value, 0);

        prop_assert_eq!(store.get(&key.to_uppercase(), 0), Some(value));
        prop_assert_eq!(store.get(&key.to_lowercase(), 0), Some(value));
        prop_assert_eq!(store.len(), 1);
    }

    // invalidate on an absent key and repeated clear() change nothing else.
    #[test]
    fn prop_invalidate_and_clear_idempotent(
        keys in prop::collection::vec(key_strategy(), 0..10),
        absent in "[x-z]{3}"
    ) {
        let mut store = new_store(5);
        for key in &keys {
            store.set(key, 1, 0);
            store.get(key, 0);
        }
        store.get("missing", 0);

        let before = store.stats();
        store.invalidate(&absent);
        prop_assert_eq!(store.stats(), before);

        store.clear();
        store.clear();
        prop_assert!(store.is_empty());
        prop_assert_eq!(store.stats().hits, 0);
        prop_assert_eq!(store.stats().misses, 0);
    }
}
