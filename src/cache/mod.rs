//! Cache Module
//!
//! In-memory response cache with per-entry TTL and lazy (read-time) eviction.

mod entry;
mod stats;
mod store;
mod ttl_cache;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheStats, EntryInfo};
pub use ttl_cache::TtlCache;

// == Public Constants ==
/// TTL applied by `set` when none is given (15 minutes)
pub const DEFAULT_TTL_SECS: i64 = 900;
