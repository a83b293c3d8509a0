//! Delete command - remove an expense
//!
//! The local copy is always removed. The remote delete is best-effort and
//! reported when it could not be confirmed.

use anyhow::Result;
use clap::Args;

use ledgerline_core::domain::ExpenseId;

use crate::output::{get_formatter, OutputFormat};
use crate::wiring::App;

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Expense id (server id or local placeholder)
    pub id: String,
}

impl DeleteCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format.is_json());

        let id = ExpenseId::from_wire(&self.id);
        let outcome = app.sync.delete(&id).await;

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "id": self.id,
                "remote_deleted": outcome.remote_deleted,
            }));
            return Ok(());
        }

        if outcome.remote_deleted || id.is_pending() {
            formatter.success(&format!("Deleted expense {}", self.id));
        } else {
            formatter.success(&format!("Removed expense {} locally", self.id));
            formatter.warn("Remote delete was not confirmed");
        }

        Ok(())
    }
}
