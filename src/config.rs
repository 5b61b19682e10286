//! Configuration Module
//!
//! Handles loading and managing daemon configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::DEFAULT_TTL_SECS;

/// Daemon configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in seconds for entries without explicit TTL
    pub default_ttl: i64,
    /// Background sweep interval in seconds, 0 leaves eviction to reads
    pub sweep_interval: u64,
    /// Seconds between two refreshes of every category
    pub refresh_interval: u64,
    /// Items kept per category
    pub article_limit: usize,
    /// Directory holding `{category}.json` fallback files
    pub mockdata_dir: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 900)
    /// - `CACHE_SWEEP_INTERVAL` - Sweep frequency in seconds, 0 disables (default: 0)
    /// - `REFRESH_INTERVAL` - Refresh frequency in seconds (default: 300)
    /// - `ARTICLE_LIMIT` - Items per category (default: 10)
    /// - `MOCKDATA_DIR` - Fallback data directory (default: static/mockdata)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_ttl: parse_var("CACHE_DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            sweep_interval: parse_var("CACHE_SWEEP_INTERVAL").unwrap_or(defaults.sweep_interval),
            refresh_interval: parse_var("REFRESH_INTERVAL").unwrap_or(defaults.refresh_interval),
            article_limit: parse_var("ARTICLE_LIMIT").unwrap_or(defaults.article_limit),
            mockdata_dir: env::var("MOCKDATA_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.mockdata_dir),
        }
    }

    /// Whether the background sweep task should run.
    pub fn sweep_enabled(&self) -> bool {
        self.sweep_interval > 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECS,
            sweep_interval: 0,
            refresh_interval: 300,
            article_limit: 10,
            mockdata_dir: PathBuf::from("static/mockdata"),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
