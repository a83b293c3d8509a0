//! `IRemoteStore` implementation over the REST client
//!
//! This is the fail-soft boundary of the remote adapter: every
//! `anyhow::Error` coming out of [`RestClient`] is logged here and
//! converted to the port's soft sentinel. Callers only ever observe
//! `None`/`false`, never an error value, so an unreachable backend
//! degrades into the local fallback path instead of failing the operation.

use tracing::warn;

use ledgerline_core::domain::{Expense, ExpenseId};
use ledgerline_core::ports::{IRemoteStore, NewExpense, RemoteHealth};

use crate::client::RestClient;

/// Supabase-backed implementation of `IRemoteStore`
pub struct SupabaseRemoteStore {
    client: RestClient,
}

impl SupabaseRemoteStore {
    /// Wraps a configured REST client
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl IRemoteStore for SupabaseRemoteStore {
    async fn list(&self) -> Option<Vec<Expense>> {
        match self.client.list_expenses().await {
            Ok(rows) => Some(rows),
            Err(e) => {
                warn!(error = %e, "Remote expense list failed");
                None
            }
        }
    }

    async fn get_by_id(&self, id: &ExpenseId) -> Option<Expense> {
        match self.client.get_expense(id).await {
            Ok(row) => row,
            Err(e) => {
                warn!(error = %e, id = %id, "Remote expense fetch failed");
                None
            }
        }
    }

    async fn insert(&self, new: &NewExpense) -> Option<Expense> {
        match self.client.insert_expense(new).await {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(error = %e, title = %new.title, "Remote expense insert failed");
                None
            }
        }
    }

    async fn update(&self, expense: &Expense) -> Option<Expense> {
        match self.client.update_expense(expense).await {
            Ok(row) => Some(row),
            Err(e) => {
                warn!(error = %e, id = %expense.id, "Remote expense update failed");
                None
            }
        }
    }

    async fn delete_by_id(&self, id: &ExpenseId) -> bool {
        match self.client.delete_expense(id).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, id = %id, "Remote expense delete failed");
                false
            }
        }
    }

    async fn upload_receipt(&self, data: &[u8], file_name: &str) -> Option<String> {
        match self.client.upload_receipt(data, file_name).await {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(error = %e, file_name, "Receipt upload failed");
                None
            }
        }
    }

    async fn check_health(&self) -> RemoteHealth {
        match self.client.probe_table().await {
            Ok(probe) => RemoteHealth {
                connected: true,
                has_table: probe.table_ok,
                row_count: probe.row_count,
            },
            Err(e) => {
                warn!(error = %e, "Remote health probe failed");
                RemoteHealth::unreachable()
            }
        }
    }
}
