//! Ledgerline Sync - Offline-first synchronization engine
//!
//! Provides:
//! - Push-then-pull synchronization between the local cache and the remote store
//! - Dual-path optimistic writes (remote first, local fallback)
//! - Connectivity monitoring with automatic push on reconnect
//!
//! ## Modules
//!
//! - [`engine`] - The [`Synchronizer`](engine::Synchronizer) orchestrating reads, writes and pushes
//! - [`monitor`] - Probe-based and fixed connectivity monitors

pub mod engine;
pub mod monitor;

pub use engine::{DeleteOutcome, PushReport, Synchronizer, WriteOutcome};
pub use monitor::{ProbeConnectivityMonitor, StaticConnectivityMonitor};
