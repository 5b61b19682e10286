//! Feed Service
//!
//! Cache-aside access to trending items: check the cache, fetch on a miss,
//! store the fresh result, fall back to local mock data on failure.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::cache::TtlCache;
use crate::feed::{cache_key, ContentSource, MockDataSource, CATEGORIES};

// == Feed Service ==
/// Serves category items through a shared [`TtlCache`].
pub struct FeedService {
    cache: Arc<TtlCache<Vec<Value>>>,
    primary: Option<Box<dyn ContentSource>>,
    fallback: MockDataSource,
    ttl: Option<i64>,
}

impl FeedService {
    /// Creates a service with no primary source; every miss is served from
    /// the fallback and nothing is cached.
    pub fn new(cache: Arc<TtlCache<Vec<Value>>>, fallback: MockDataSource) -> Self {
        Self {
            cache,
            primary: None,
            fallback,
            ttl: None,
        }
    }

    /// Sets the source queried on a cache miss.
    pub fn with_primary(mut self, primary: impl ContentSource + 'static) -> Self {
        self.primary = Some(Box::new(primary));
        self
    }

    /// Sets the TTL used for fresh results; the cache default applies otherwise.
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn cache(&self) -> &Arc<TtlCache<Vec<Value>>> {
        &self.cache
    }

    // == Items ==
    /// Returns at most `limit` items for `category`.
    ///
    /// A cached empty list counts as a miss. Fallback results are not cached,
    /// and a failing fallback yields an empty list.
    pub async fn items(&self, category: &str, limit: usize) -> Vec<Value> {
        let key = cache_key(category);

        if let Some(mut cached) = self.cache.get(&key) {
            if !cached.is_empty() {
                cached.truncate(limit);
                return cached;
            }
        }

        let Some(primary) = &self.primary else {
            info!("No primary source, using {} for {}", self.fallback.name(), category);
            return self.load_fallback(category, limit).await;
        };

        match primary.fetch(category, limit).await {
            Ok(mut items) => {
                info!("Fetched {} items for {} from {}", items.len(), category, primary.name());
                self.cache.set(key, items.clone(), self.ttl);
                items.truncate(limit);
                items
            }
            Err(e) => {
                warn!("{} failed for {}: {}", primary.name(), category, e);
                self.load_fallback(category, limit).await
            }
        }
    }

    // == Refresh All ==
    /// Loads every known category and reports how many items each produced.
    pub async fn refresh_all(&self, limit: usize) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for category in CATEGORIES {
            let items = self.items(category, limit).await;
            counts.insert(category, items.len());
        }
        counts
    }

    async fn load_fallback(&self, category: &str, limit: usize) -> Vec<Value> {
        match self.fallback.fetch(category, limit).await {
            Ok(items) => items,
            Err(e) => {
                error!("Fallback failed for {}: {}", category, e);
                Vec::new()
            }
        }
    }
}
