//! Connectivity monitors
//!
//! Two implementations of the `IConnectivityMonitor` port:
//!
//! - [`ProbeConnectivityMonitor`] polls a caller-supplied probe on an
//!   interval and publishes transitions on a watch channel. The probe
//!   returns `Option<bool>`; `None` means the probe machinery itself could
//!   not determine the status, which is treated as online (fail-open). A
//!   wrong "online" degrades gracefully through the remote adapter's soft
//!   failures, a wrong "offline" would strand the app on stale data.
//! - [`StaticConnectivityMonitor`] holds a fixed, externally-set status for
//!   tests and for forcing offline mode from the CLI.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use ledgerline_core::ports::IConnectivityMonitor;

// ============================================================================
// ProbeConnectivityMonitor
// ============================================================================

/// Interval-driven connectivity monitor
///
/// Owns a background task that runs the probe and publishes the result.
/// Dropping the monitor aborts the task.
pub struct ProbeConnectivityMonitor {
    tx: watch::Sender<bool>,
    probe_task: JoinHandle<()>,
}

impl ProbeConnectivityMonitor {
    /// Spawns the probe loop. The first probe runs immediately, then every
    /// `interval`. The channel starts at online until the first probe
    /// answers (fail-open).
    pub fn spawn<F, Fut>(interval: Duration, probe: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Option<bool>> + Send,
    {
        let (tx, _) = watch::channel(true);
        let probe_tx = tx.clone();

        let probe_task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let online = probe().await.unwrap_or(true);
                let previous = *probe_tx.borrow();
                if online != previous {
                    info!(online, "Connectivity changed");
                } else {
                    debug!(online, "Connectivity probe");
                }
                // send_replace publishes even without receivers
                probe_tx.send_replace(online);
            }
        });

        Self { tx, probe_task }
    }
}

impl Drop for ProbeConnectivityMonitor {
    fn drop(&mut self) {
        self.probe_task.abort();
    }
}

#[async_trait::async_trait]
impl IConnectivityMonitor for ProbeConnectivityMonitor {
    async fn current_status(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

// ============================================================================
// StaticConnectivityMonitor
// ============================================================================

/// Connectivity monitor with an externally-controlled status
pub struct StaticConnectivityMonitor {
    tx: watch::Sender<bool>,
}

impl StaticConnectivityMonitor {
    /// Creates a monitor pinned to the given status
    pub fn new(online: bool) -> Self {
        let (tx, _) = watch::channel(online);
        Self { tx }
    }

    /// Changes the reported status, notifying subscribers
    pub fn set_status(&self, online: bool) {
        self.tx.send_replace(online);
    }
}

#[async_trait::async_trait]
impl IConnectivityMonitor for StaticConnectivityMonitor {
    async fn current_status(&self) -> bool {
        *self.tx.borrow()
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}
