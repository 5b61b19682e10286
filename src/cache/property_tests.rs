//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache contract over generated keys, values and
//! operation sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::store::CacheStore;
use crate::cache::{TtlCache, DEFAULT_TTL_SECS};

// == Strategies ==
/// Generates cache keys, including the empty key
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_]{0,16}"
}

/// Generates cache values
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,64}"
}

/// TTLs that keep the entry alive for the duration of a test
fn live_ttl_strategy() -> impl Strategy<Value = i64> {
    60i64..=i64::MAX
}

/// TTLs that produce an already-expired entry
fn dead_ttl_strategy() -> impl Strategy<Value = i64> {
    i64::MIN..=0i64
}

/// Generates a sequence of cache operations for testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: String, ttl: Option<i64> },
    Get { key: String },
    Clear { key: Option<String> },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), value_strategy(), prop::option::of(-5i64..600))
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => prop::option::of(key_strategy()).prop_map(|key| CacheOp::Clear { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // **Property 1: Fresh Round-trip**
    // *For any* key, value and positive TTL, a GET immediately after SET
    // SHALL return the stored value.
    #[test]
    fn prop_fresh_roundtrip(
        key in key_strategy(),
        value in value_strategy(),
        ttl in live_ttl_strategy()
    ) {
        let cache = TtlCache::new();
        cache.set(key.clone(), value.clone(), Some(ttl));

        prop_assert_eq!(cache.get(&key), Some(value));
    }

    // **Property 2: Non-positive TTL Is Never Served**
    // *For any* TTL <= 0, a GET immediately after SET SHALL return nothing,
    // and stats taken in between SHALL report the entry as expired.
    #[test]
    fn prop_non_positive_ttl_never_served(
        key in key_strategy(),
        value in value_strategy(),
        ttl in dead_ttl_strategy()
    ) {
        let cache = TtlCache::new();
        cache.set(key.clone(), value, Some(ttl));

        let stats = cache.stats();
        prop_assert_eq!(stats.expired_entries, 1);
        prop_assert_eq!(stats.active_entries, 0);
        prop_assert!(stats.entries[0].expires_at >= stats.entries[0].cached_at);

        prop_assert_eq!(cache.get(&key), None);
        prop_assert!(cache.is_empty());
    }

    // **Property 3: Overwrite Semantics**
    // *For any* key, storing V1 and then V2 SHALL result in GET returning V2.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy(),
        ttl1 in prop::option::of(-5i64..600),
        ttl2 in live_ttl_strategy()
    ) {
        let cache = TtlCache::new();

        cache.set(key.clone(), value1, ttl1);
        cache.set(key.clone(), value2.clone(), Some(ttl2));

        prop_assert_eq!(cache.get(&key), Some(value2));
        prop_assert_eq!(cache.len(), 1);
    }

    // **Property 4: Clear Removes Entry**
    // *For any* stored key, CLEAR of that key SHALL make GET return nothing
    // and leave other keys untouched.
    #[test]
    fn prop_clear_removes_entry(
        key in key_strategy(),
        other in key_strategy(),
        value in value_strategy()
    ) {
        prop_assume!(key != other);
        let cache = TtlCache::new();

        cache.set(key.clone(), value.clone(), None);
        cache.set(other.clone(), value.clone(), None);
        cache.clear(Some(&key));

        prop_assert_eq!(cache.get(&key), None);
        prop_assert_eq!(cache.get(&other), Some(value));
    }

    // **Property 5: Stats Is Read-only**
    // *For any* sequence of operations, calling STATS SHALL not change the
    // number of entries held nor any later GET outcome.
    #[test]
    fn prop_stats_is_read_only(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(DEFAULT_TTL_SECS);
        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => store.set(key, value, ttl),
                CacheOp::Get { key } => { store.get(&key); }
                CacheOp::Clear { key } => store.clear(key.as_deref()),
            }
        }

        let before = store.len();
        let stats = store.stats();
        prop_assert_eq!(store.len(), before);
        prop_assert_eq!(stats.total_entries, before);
        prop_assert_eq!(stats.active_entries + stats.expired_entries, stats.total_entries);

        for info in &stats.entries {
            // Expired entries are still there for the next read to evict
            let value = store.get(&info.key);
            prop_assert_eq!(value.is_none(), info.expired);
        }
    }

    // **Property 6: Statistics Accuracy**
    // *For any* sequence of cache operations, the hit and miss counters SHALL
    // match the outcomes of every GET, and the entries SHALL match a model map.
    #[test]
    fn prop_statistics_accuracy(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut store = CacheStore::new(DEFAULT_TTL_SECS);
        let mut model: HashMap<String, (String, bool)> = HashMap::new();
        let mut expected_hits: u64 = 0;
        let mut expected_misses: u64 = 0;

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => {
                    let alive = ttl.map_or(true, |ttl| ttl > 0);
                    model.insert(key.clone(), (value.clone(), alive));
                    store.set(key, value, ttl);
                }
                CacheOp::Get { key } => {
                    let expected = match model.get(&key) {
                        Some((value, true)) => Some(value.clone()),
                        Some((_, false)) => {
                            model.remove(&key);
                            None
                        }
                        None => None,
                    };
                    let actual = store.get(&key);
                    match actual {
                        Some(_) => expected_hits += 1,
                        None => expected_misses += 1,
                    }
                    prop_assert_eq!(actual, expected);
                }
                CacheOp::Clear { key: Some(key) } => {
                    model.remove(&key);
                    store.clear(Some(&key));
                }
                CacheOp::Clear { key: None } => {
                    model.clear();
                    store.clear(None);
                }
            }
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, expected_hits, "Hits mismatch");
        prop_assert_eq!(stats.misses, expected_misses, "Misses mismatch");
        prop_assert_eq!(stats.total_entries, model.len(), "Total entries mismatch");
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(3))]

    // **Property 7: TTL Expiration Behavior**
    // *For any* entry stored with a one second TTL, after the TTL has elapsed
    // a GET SHALL return nothing.
    #[test]
    fn prop_ttl_expiration_behavior(
        key in key_strategy(),
        value in value_strategy()
    ) {
        let cache = TtlCache::new();
        cache.set(key.clone(), value.clone(), Some(1));

        prop_assert_eq!(cache.get(&key), Some(value), "Value should match before expiration");

        // Wait for TTL to expire (add small buffer for timing)
        sleep(Duration::from_millis(1100));

        prop_assert_eq!(cache.get(&key), None, "Entry should not be found after TTL expires");
    }
}
