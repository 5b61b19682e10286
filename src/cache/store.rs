//! Cache Store Module
//!
//! Single-threaded cache engine: HashMap storage with lazy TTL eviction.
//! Shared access goes through [`TtlCache`](crate::cache::TtlCache).

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheStats, EntryInfo};

// == Cache Store ==
/// Key-value storage with per-entry expiry.
#[derive(Debug)]
pub(crate) struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Successful retrievals
    hits: u64,
    /// Retrievals that found nothing or found a stale entry
    misses: u64,
    /// TTL in seconds applied when `set` is called without one
    default_ttl: i64,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL in seconds for entries stored without an explicit TTL
    pub fn new(default_ttl: i64) -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
            default_ttl,
        }
    }

    // == Set ==
    /// Stores a value, replacing any previous entry for the key wholesale.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL in seconds (uses default_ttl if None)
    pub fn set(&mut self, key: String, value: V, ttl: Option<i64>) {
        let ttl = ttl.unwrap_or(self.default_ttl);
        debug!(key = %key, ttl, "cache set");
        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Expired entries are removed and reported as absent.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let now = Utc::now();

        let Some(entry) = self.entries.get(key) else {
            self.misses += 1;
            return None;
        };

        if entry.is_expired_at(now) {
            self.entries.remove(key);
            self.misses += 1;
            debug!(key, "cache entry expired");
            return None;
        }

        self.hits += 1;
        debug!(
            key,
            expires_in = entry.ttl_remaining_at(now),
            "cache hit"
        );
        Some(entry.value.clone())
    }

    // == Clear ==
    /// Removes one key, or every entry when `key` is None.
    ///
    /// Removing a key that is not present is a no-op.
    pub fn clear(&mut self, key: Option<&str>) {
        match key {
            Some(key) => {
                if self.entries.remove(key).is_some() {
                    debug!(key, "cache entry cleared");
                }
            }
            None => {
                self.entries.clear();
                info!("cache cleared");
            }
        }
    }

    // == Stats ==
    /// Builds a report of every entry without evicting anything.
    pub fn stats(&self) -> CacheStats {
        let now = Utc::now();
        let mut stats = CacheStats::new();
        stats.hits = self.hits;
        stats.misses = self.misses;

        let mut keys: Vec<&String> = self.entries.keys().collect();
        keys.sort();

        for key in keys {
            let entry = &self.entries[key];
            stats.record_entry(EntryInfo {
                key: key.clone(),
                cached_at: entry.cached_at,
                expires_at: entry.expires_at,
                expired: entry.is_expired_at(now),
                ttl_remaining: entry.ttl_remaining_at(now),
            });
        }

        stats
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        before - self.entries.len()
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the TTL applied when none is given.
    pub fn default_ttl(&self) -> i64 {
        self.default_ttl
    }

    #[cfg(test)]
    pub(crate) fn insert_entry(&mut self, key: &str, entry: CacheEntry<V>) {
        self.entries.insert(key.to_string(), entry);
    }
}
