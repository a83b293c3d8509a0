//! Connectivity monitor port (driven/secondary port)
//!
//! This module defines the interface for network reachability reporting.
//! The sync engine consults the point-in-time status before choosing
//! between the remote and cached read paths, and subscribes to transitions
//! to trigger an opportunistic push when connectivity returns.
//!
//! ## Design Notes
//!
//! - Fail-open: when the monitor itself cannot determine the status it
//!   reports online. A wrong "online" answer degrades gracefully (the
//!   remote call fails soft and the engine falls back to the cache),
//!   whereas a wrong "offline" answer would strand the app on stale data.
//! - `subscribe` hands out a `tokio::sync::watch` receiver so that late
//!   subscribers immediately observe the current status.

use tokio::sync::watch;

/// Port trait for network reachability
#[async_trait::async_trait]
pub trait IConnectivityMonitor: Send + Sync {
    /// Returns the current reachability status. `true` means online.
    async fn current_status(&self) -> bool;

    /// Subscribes to status transitions. The receiver yields the current
    /// value immediately and every change afterwards.
    fn subscribe(&self) -> watch::Receiver<bool>;
}
