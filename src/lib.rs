//! Trend Cache - response cache for a trending-content aggregator
//!
//! Provides an in-memory TTL cache with lazy eviction and the cache-aside
//! feed service that fills it.

pub mod cache;
pub mod config;
pub mod error;
pub mod feed;
pub mod tasks;

pub use cache::{CacheStats, TtlCache};
pub use config::Config;
pub use feed::FeedService;
pub use tasks::spawn_sweep_task;
