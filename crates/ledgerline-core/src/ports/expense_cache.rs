//! Expense cache port (driven/secondary port)
//!
//! This module defines the interface for the local cache that makes the app
//! usable offline. The cache holds exactly two logical entries: the full
//! expense collection (one JSON document) and the theme preference flag.
//!
//! ## Design Notes
//!
//! - Every mutation is a full read-modify-write of the whole collection.
//!   There is no per-record primitive and no internal locking; callers are
//!   expected to be effectively single-threaded per collection (last write
//!   wins, single-device assumption).
//! - The contract is fail-soft in both directions: reads of missing or
//!   corrupt state return an empty collection, and write failures are
//!   logged and swallowed by the implementation. A cache failure must never
//!   abort a sync or a user-facing write.

use crate::domain::{Expense, ExpenseId, Theme};

/// Port trait for the local expense cache
#[async_trait::async_trait]
pub trait IExpenseCache: Send + Sync {
    /// Loads the whole cached collection.
    ///
    /// Missing or unreadable state loads as an empty collection.
    async fn load_all(&self) -> Vec<Expense>;

    /// Replaces the whole cached collection.
    async fn save_all(&self, expenses: &[Expense]);

    /// Removes the cached collection entirely.
    async fn clear(&self);

    /// Loads only the records awaiting a push to the remote store, in
    /// cache order.
    async fn pending_only(&self) -> Vec<Expense>;

    /// Removes the records with the given ids, keeping everything else.
    async fn remove_by_ids(&self, ids: &[ExpenseId]);

    /// Loads the stored theme preference (light when absent).
    async fn load_theme(&self) -> Theme;

    /// Stores the theme preference.
    async fn save_theme(&self, theme: Theme);
}
