//! Cache Entry Module
//!
//! Defines a single cached value together with its insertion and expiry times.

use chrono::{DateTime, TimeDelta, Utc};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored payload, never inspected by the cache
    pub value: V,
    /// Insertion timestamp
    pub cached_at: DateTime<Utc>,
    /// Timestamp from which the entry is stale
    pub expires_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl_seconds` - TTL in seconds; zero or negative produces an entry
    ///   that is already expired
    pub fn new(value: V, ttl_seconds: i64) -> Self {
        Self::new_at(value, ttl_seconds, Utc::now())
    }

    /// Creates a new entry as if it had been inserted at `now`.
    pub fn new_at(value: V, ttl_seconds: i64, now: DateTime<Utc>) -> Self {
        Self {
            value,
            cached_at: now,
            expires_at: expiry_from(now, ttl_seconds),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired relative to `now`.
    ///
    /// Boundary condition: the entry is expired once `now >= expires_at`, so a
    /// zero TTL is stale on the very next read.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    // == Time To Live ==
    /// Returns whole seconds left before expiry, floored at zero.
    pub fn ttl_remaining_at(&self, now: DateTime<Utc>) -> u64 {
        (self.expires_at - now).num_seconds().max(0) as u64
    }
}

// == Utility Functions ==
/// Computes `now + ttl`, clamping negative TTLs to zero and saturating at the
/// largest representable timestamp.
fn expiry_from(now: DateTime<Utc>, ttl_seconds: i64) -> DateTime<Utc> {
    TimeDelta::try_seconds(ttl_seconds.max(0))
        .and_then(|ttl| now.checked_add_signed(ttl))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}
