//! Content Sources
//!
//! Where the feed service gets items from on a cache miss.

use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{FeedError, Result};

// == Content Source ==
/// Anything that can produce the trending items for a category.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name used in log lines
    fn name(&self) -> &str;

    /// Fetches at most `limit` items for `category`.
    async fn fetch(&self, category: &str, limit: usize) -> Result<Vec<Value>>;
}

// == Article Shape ==
/// Longest description kept on an article, in characters
pub const MAX_DESCRIPTION_CHARS: usize = 200;

const DEFAULT_TITLE: &str = "Untitled";
const DEFAULT_SOURCE: &str = "TrendWatcher";
const DEFAULT_URL: &str = "#";
const PLACEHOLDER_IMAGE: &str = "/static/placeholder.svg";

/// Maps a raw mock-data item (coin, stock, product, ...) onto the article
/// fields every category shares: `title`, `description`, `source`, `url`,
/// `image`, `published`.
pub fn into_article(item: &Value) -> Value {
    let description: String = text(item, "description")
        .unwrap_or_default()
        .chars()
        .take(MAX_DESCRIPTION_CHARS)
        .collect();

    json!({
        "title": first_non_empty(item, &["title", "name", "keyword"]).unwrap_or(DEFAULT_TITLE),
        "description": description,
        "source": text(item, "source").unwrap_or(DEFAULT_SOURCE),
        "url": text(item, "url").unwrap_or(DEFAULT_URL),
        "image": first_non_empty(item, &["image", "thumb"]).unwrap_or(PLACEHOLDER_IMAGE),
        "published": ""
    })
}

fn text<'a>(item: &'a Value, field: &str) -> Option<&'a str> {
    item.get(field).and_then(Value::as_str)
}

fn first_non_empty<'a>(item: &'a Value, fields: &[&str]) -> Option<&'a str> {
    fields
        .iter()
        .filter_map(|field| text(item, field))
        .find(|value| !value.is_empty())
}

// == Mock Data Source ==
/// Reads items from `{dir}/{category}.json`, which must hold a JSON array,
/// and returns them as articles.
#[derive(Debug, Clone)]
pub struct MockDataSource {
    dir: PathBuf,
}

impl MockDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, category: &str) -> PathBuf {
        self.dir.join(format!("{}.json", category))
    }
}

#[async_trait]
impl ContentSource for MockDataSource {
    fn name(&self) -> &str {
        "mockdata"
    }

    async fn fetch(&self, category: &str, limit: usize) -> Result<Vec<Value>> {
        let path = self.path_for(category);

        let raw = tokio::fs::read(&path).await.map_err(|source| FeedError::Io {
            path: path.clone(),
            source,
        })?;

        let parsed: Value = serde_json::from_slice(&raw).map_err(|source| FeedError::Parse {
            path: path.clone(),
            source,
        })?;

        let Value::Array(mut items) = parsed else {
            return Err(FeedError::NotAnArray(path));
        };

        items.truncate(limit);
        debug!("Loaded {} items from {}", items.len(), path.display());
        Ok(items.iter().map(into_article).collect())
    }
}
