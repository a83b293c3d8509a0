//! Ledgerline Cache - Local state persistence
//!
//! SQLite-based key-value cache for:
//! - The offline expense collection (one JSON document)
//! - The theme preference flag
//!
//! ## Architecture
//!
//! This crate implements the `IExpenseCache` port from `ledgerline-core`
//! using SQLite as the storage backend. It is a driven (secondary) adapter
//! in the hexagonal architecture. Internally operations return
//! [`CacheError`]; the port implementation logs failures and degrades to
//! the documented fallbacks (empty reads, dropped writes), so cache
//! trouble never propagates into the sync engine.
//!
//! ## Key Components
//!
//! - [`DatabasePool`] - Connection pool with migration support
//! - [`SqliteExpenseCache`] - Full `IExpenseCache` implementation
//! - [`CacheError`] - Error types for cache operations
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use ledgerline_cache::{CacheError, DatabasePool, SqliteExpenseCache};
//!
//! # async fn example() -> Result<(), CacheError> {
//! let pool = DatabasePool::new(Path::new("/home/user/.local/share/ledgerline/cache.db")).await?;
//! let cache = SqliteExpenseCache::new(pool.pool().clone());
//! // Use cache as IExpenseCache...
//! # Ok(())
//! # }
//! ```

pub mod pool;
pub mod store;

pub use pool::DatabasePool;
pub use store::SqliteExpenseCache;

/// Errors that can occur during cache operations
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// Failed to establish a database connection
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A database query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Schema migration failed
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Serialization or deserialization of the cached collection failed
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<sqlx::Error> for CacheError {
    fn from(e: sqlx::Error) -> Self {
        CacheError::QueryFailed(e.to_string())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        CacheError::SerializationError(e.to_string())
    }
}
