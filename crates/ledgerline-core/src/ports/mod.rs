//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`IRemoteStore`] - Remote expense table and receipt object storage
//! - [`IExpenseCache`] - Local key-value cache of the expense collection
//! - [`IConnectivityMonitor`] - Network reachability status and transitions

pub mod connectivity;
pub mod expense_cache;
pub mod remote_store;

pub use connectivity::IConnectivityMonitor;
pub use expense_cache::IExpenseCache;
pub use remote_store::{IRemoteStore, NewExpense, RemoteHealth};
