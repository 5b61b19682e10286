//! Cache Statistics Module
//!
//! Point-in-time report of the cache contents plus hit/miss counters.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Entry Info ==
/// Diagnostic view of one cached entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryInfo {
    /// Cache key
    pub key: String,
    /// Insertion time
    pub cached_at: DateTime<Utc>,
    /// Expiry time
    #[serde(rename = "expires")]
    pub expires_at: DateTime<Utc>,
    /// Whether the entry was stale when the report was taken
    pub expired: bool,
    /// Whole seconds left to live, floored at zero
    pub ttl_remaining: u64,
}

// == Cache Stats ==
/// Snapshot of the cache taken by [`TtlCache::stats`](crate::cache::TtlCache::stats).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of entries currently held, expired or not
    pub total_entries: usize,
    /// Entries still fresh
    pub active_entries: usize,
    /// Entries past their expiry but not yet evicted
    pub expired_entries: usize,
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Per-entry metadata, sorted by key
    pub entries: Vec<EntryInfo>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Entry ==
    /// Adds one entry to the report and updates the counts.
    pub fn record_entry(&mut self, info: EntryInfo) {
        self.total_entries += 1;
        if info.expired {
            self.expired_entries += 1;
        } else {
            self.active_entries += 1;
        }
        self.entries.push(info);
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no requests have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
