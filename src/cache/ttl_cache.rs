//! Shared TTL Cache
//!
//! Thread-safe handle around [`CacheStore`]. Every operation runs its whole
//! check-then-mutate sequence under one mutex.

use parking_lot::Mutex;
use serde_json::Value;

use crate::cache::store::CacheStore;
use crate::cache::{CacheStats, DEFAULT_TTL_SECS};

// == TTL Cache ==
/// Process-wide response cache with lazy expiry.
///
/// Construct once and share it with `Arc`. Expired entries are evicted when
/// they are next read; entries that are never read again stay in memory
/// until [`clear`](Self::clear) or [`purge_expired`](Self::purge_expired)
/// removes them.
#[derive(Debug)]
pub struct TtlCache<V = Value> {
    store: Mutex<CacheStore<V>>,
}

impl<V: Clone> TtlCache<V> {
    /// Creates an empty cache with the 15 minute default TTL.
    pub fn new() -> Self {
        Self::with_default_ttl(DEFAULT_TTL_SECS)
    }

    /// Creates an empty cache whose `set` uses `default_ttl` seconds when no
    /// TTL is given.
    pub fn with_default_ttl(default_ttl: i64) -> Self {
        Self {
            store: Mutex::new(CacheStore::new(default_ttl)),
        }
    }

    /// Returns the value for `key` if present and not expired.
    ///
    /// A stale entry is removed by this call. "Never set" and "expired" are
    /// both reported as `None`.
    pub fn get(&self, key: &str) -> Option<V> {
        self.store.lock().get(key)
    }

    /// Inserts or replaces the entry for `key`.
    ///
    /// `ttl` is in seconds; `None` uses the default. Zero or negative values
    /// store an entry that the next `get` treats as expired.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<i64>) {
        self.store.lock().set(key.into(), value, ttl);
    }

    /// Removes `key`, or every entry when `key` is `None`.
    pub fn clear(&self, key: Option<&str>) {
        self.store.lock().clear(key);
    }

    /// Reports every entry, classifying it as active or expired.
    ///
    /// Does not evict anything.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    /// Evicts every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.store.lock().purge_expired()
    }

    /// Number of entries held, expired ones included.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }

    /// TTL in seconds applied by `set` when none is given.
    pub fn default_ttl(&self) -> i64 {
        self.store.lock().default_ttl()
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
