//! Error types for content fetching
//!
//! The cache itself never fails; these errors belong to the sources that
//! fill it.

use std::path::PathBuf;

use thiserror::Error;

// == Feed Error Enum ==
/// Unified error type for content sources.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Fallback data file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fallback data file is not valid JSON
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Fallback data file does not hold a JSON array
    #[error("Expected a JSON array in {}", .0.display())]
    NotAnArray(PathBuf),

    /// Upstream API call failed.
    ///
    /// Returned by [`ContentSource`](crate::feed::ContentSource) implementations
    /// that talk to a remote API; the feed service falls back to mock data.
    #[error("Upstream error: {0}")]
    Upstream(String),
}

// == Result Type Alias ==
/// Convenience Result type for content sources.
pub type Result<T> = std::result::Result<T, FeedError>;
