//! Trend Cache - cache-warming daemon
//!
//! Keeps every category's trending items warm in the TTL cache.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trend_cache::feed::MockDataSource;
use trend_cache::{spawn_sweep_task, Config, FeedService, TtlCache};

/// Main entry point for the cache-warming daemon.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache
/// 4. Start the TTL sweep task when enabled
/// 5. Refresh every category on the configured interval
/// 6. Handle graceful shutdown on SIGINT/SIGTERM and print final stats
#[tokio::main]
async fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trend_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Trend Cache");

    let config = Config::from_env();
    info!(
        "Configuration loaded: default_ttl={}s, sweep_interval={}s, refresh_interval={}s, article_limit={}, mockdata_dir={}",
        config.default_ttl,
        config.sweep_interval,
        config.refresh_interval,
        config.article_limit,
        config.mockdata_dir.display()
    );

    if !config.mockdata_dir.is_dir() {
        bail!(
            "mock data directory {} does not exist",
            config.mockdata_dir.display()
        );
    }

    let cache = Arc::new(TtlCache::with_default_ttl(config.default_ttl));
    info!("Cache initialized");

    let sweep_handle = if config.sweep_enabled() {
        Some(spawn_sweep_task(cache.clone(), config.sweep_interval))
    } else {
        info!("TTL sweep disabled, expired entries are evicted on read");
        None
    };

    // No network clients are wired in; on-disk snapshots act as the primary
    let service = FeedService::new(cache.clone(), MockDataSource::new(&config.mockdata_dir))
        .with_primary(MockDataSource::new(&config.mockdata_dir))
        .with_ttl(config.default_ttl);

    let mut ticker = tokio::time::interval(Duration::from_secs(config.refresh_interval.max(1)));
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let counts = service.refresh_all(config.article_limit).await;
                let stats = cache.stats();
                info!(
                    "Refreshed {} categories: total={}, active={}, expired={}, hit_rate={:.2}",
                    counts.len(),
                    stats.total_entries,
                    stats.active_entries,
                    stats.expired_entries,
                    stats.hit_rate()
                );
            }
            _ = &mut shutdown => break,
        }
    }

    if let Some(handle) = sweep_handle {
        handle.abort();
        warn!("Sweep task aborted");
    }

    println!("{}", serde_json::to_string_pretty(&cache.stats())?);
    info!("Shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
