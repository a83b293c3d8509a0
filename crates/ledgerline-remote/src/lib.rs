//! Ledgerline Remote - Supabase REST adapter
//!
//! HTTP adapter for the remote expense store, talking to a Supabase
//! project:
//! - PostgREST endpoints (`/rest/v1/...`) for the expense table
//! - Storage endpoints (`/storage/v1/object/...`) for receipt images
//!
//! ## Architecture
//!
//! This crate implements the `IRemoteStore` port from `ledgerline-core`.
//! It is a driven (secondary) adapter in the hexagonal architecture.
//!
//! The inner [`RestClient`] returns `anyhow::Result` with full context;
//! [`SupabaseRemoteStore`] converts every failure to the port's soft
//! sentinels (`None`/`false`) after logging, so callers upstream never see
//! transport errors.
//!
//! ## Key Components
//!
//! - [`RestClient`] - Typed HTTP client with auth headers and endpoint construction
//! - [`SupabaseRemoteStore`] - Full `IRemoteStore` implementation

pub mod client;
pub mod provider;

pub use client::RestClient;
pub use provider::SupabaseRemoteStore;
