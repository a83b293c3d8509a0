//! Adapter wiring shared by all commands
//!
//! Every command needs the same stack: config, the SQLite cache, the
//! Supabase adapter, a connectivity monitor and the synchronizer on top.
//! [`build`] assembles it once; `--offline` swaps the probe monitor for a
//! fixed offline one so the remote store is never consulted.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use ledgerline_cache::{DatabasePool, SqliteExpenseCache};
use ledgerline_core::config::Config;
use ledgerline_core::ports::{IConnectivityMonitor, IRemoteStore};
use ledgerline_remote::{RestClient, SupabaseRemoteStore};
use ledgerline_sync::{ProbeConnectivityMonitor, StaticConnectivityMonitor, Synchronizer};

/// Fully wired application context
pub struct App {
    pub config: Config,
    pub sync: Arc<Synchronizer>,
    pub cache: Arc<SqliteExpenseCache>,
}

/// Builds the adapter stack from configuration.
///
/// Configuration problems are reported but not fatal: the cache keeps the
/// app usable and the remote adapter fails soft on a bad backend setup.
pub async fn build(config_path: Option<&Path>, offline: bool) -> Result<App> {
    let config_path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_path);
    let config = Config::load_or_default(&config_path);
    info!(config_path = %config_path.display(), "Loaded configuration");

    for error in config.validate() {
        warn!(%error, "Configuration problem");
    }

    let pool = DatabasePool::new(&config.cache.db_path)
        .await
        .context("Failed to open the local cache database")?;
    let cache = Arc::new(SqliteExpenseCache::new(pool.pool().clone()));

    let remote = Arc::new(SupabaseRemoteStore::new(RestClient::new(&config.remote)));

    let connectivity: Arc<dyn IConnectivityMonitor> = if offline {
        Arc::new(StaticConnectivityMonitor::new(false))
    } else {
        let probe_remote = remote.clone();
        let timeout = Duration::from_secs(config.connectivity.probe_timeout);
        Arc::new(ProbeConnectivityMonitor::spawn(
            Duration::from_secs(config.connectivity.probe_interval),
            move || {
                let remote = probe_remote.clone();
                async move {
                    match tokio::time::timeout(timeout, remote.check_health()).await {
                        Ok(health) => Some(health.connected),
                        // a probe that cannot finish in time counts as offline
                        Err(_) => Some(false),
                    }
                }
            },
        ))
    };

    let sync = Arc::new(Synchronizer::new(remote, cache.clone(), connectivity));

    Ok(App {
        config,
        sync,
        cache,
    })
}
