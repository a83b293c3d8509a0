//! Remote store port (driven/secondary port)
//!
//! This module defines the interface for the remote expense database and
//! its companion object storage for receipt images. The primary
//! implementation targets a Supabase project (PostgREST table plus storage
//! bucket), but the trait is backend-agnostic.
//!
//! ## Design Notes
//!
//! - The contract is fail-soft: a method that cannot reach the backend or
//!   receives an error response returns `None` (or `false` for delete)
//!   after logging, it never panics and never surfaces transport errors to
//!   callers. The sync engine treats every `None` as "fall back to the
//!   local path".
//! - `NewExpense` is a port-level DTO for inserts: the remote database
//!   assigns `id`, `created_at` and `updated_at` itself, so the insert
//!   payload must not carry them.
//! - Uses `#[async_trait]` for async trait methods.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Expense, ExpenseId, Receipt};

// ============================================================================
// NewExpense DTO
// ============================================================================

/// Insert payload for a new remote row
///
/// Identifier and server timestamps are intentionally absent; the remote
/// database generates them. Pending records are converted to this shape
/// (dropping their placeholder id) before being pushed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: crate::domain::Category,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<Receipt>,
}

impl From<&Expense> for NewExpense {
    /// Strips the placeholder id and local timestamps from a cached record.
    fn from(e: &Expense) -> Self {
        Self {
            title: e.title.clone(),
            amount: e.amount,
            category: e.category,
            date: e.date,
            receipt_url: e.receipt_url.clone(),
        }
    }
}

// ============================================================================
// RemoteHealth
// ============================================================================

/// Result of a remote health probe
///
/// Mirrors what a connection-test screen needs: whether the backend
/// answered at all, whether the expense table exists, and how many rows
/// it currently holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteHealth {
    /// Backend answered the probe request
    pub connected: bool,
    /// The expense table exists and is queryable
    pub has_table: bool,
    /// Row count reported by the probe (0 when unknown)
    pub row_count: u64,
}

impl RemoteHealth {
    /// Health value for a backend that could not be reached
    pub fn unreachable() -> Self {
        Self {
            connected: false,
            has_table: false,
            row_count: 0,
        }
    }
}

// ============================================================================
// IRemoteStore trait
// ============================================================================

/// Port trait for the remote expense store
///
/// ## Implementation Notes
///
/// - Implementations log failures with their own context and return the
///   soft sentinel; they must not retry internally. Retry happens
///   naturally when the next sync cycle runs.
/// - `list` returns records ordered by expense date, newest first.
#[async_trait::async_trait]
pub trait IRemoteStore: Send + Sync {
    /// Fetches all expenses, ordered by date descending.
    ///
    /// # Returns
    /// `Some(rows)` on success, `None` when the backend is unreachable or
    /// returns an error.
    async fn list(&self) -> Option<Vec<Expense>>;

    /// Fetches a single expense by its remote id.
    ///
    /// # Returns
    /// `None` when the row does not exist or the backend failed.
    async fn get_by_id(&self, id: &ExpenseId) -> Option<Expense>;

    /// Inserts a new row and returns it as stored, with the
    /// server-assigned id and timestamps.
    async fn insert(&self, new: &NewExpense) -> Option<Expense>;

    /// Updates an existing row in place and returns the stored result.
    async fn update(&self, expense: &Expense) -> Option<Expense>;

    /// Deletes a row by id.
    ///
    /// # Returns
    /// `true` only when the backend confirmed the delete.
    async fn delete_by_id(&self, id: &ExpenseId) -> bool;

    /// Uploads a receipt image to object storage.
    ///
    /// # Arguments
    /// * `data` - Raw image bytes
    /// * `file_name` - Object name within the receipts bucket
    ///
    /// # Returns
    /// The public URL of the stored object, or `None` on failure.
    async fn upload_receipt(&self, data: &[u8], file_name: &str) -> Option<String>;

    /// Probes the backend and the expense table.
    async fn check_health(&self) -> RemoteHealth;
}
