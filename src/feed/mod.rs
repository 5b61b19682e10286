//! Feed Module
//!
//! Content-fetching collaborator of the cache: per-category trending items
//! served cache-aside.

mod service;
mod source;

pub use service::FeedService;
pub use source::{ContentSource, MockDataSource};

/// Categories the aggregator serves
pub const CATEGORIES: [&str; 6] = [
    "crypto",
    "stocks",
    "ecommerce",
    "entertainment",
    "sports",
    "home",
];

/// Cache key for a category's item list.
pub fn cache_key(category: &str) -> String {
    format!("news_{}", category)
}
