//! Show command - display a single expense
//!
//! Looks the record up on the remote store when reachable, otherwise scans
//! the local cache.

use anyhow::Result;
use clap::Args;

use ledgerline_core::domain::ExpenseId;

use crate::output::{get_formatter, OutputFormat};
use crate::wiring::App;

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Expense id (server id or local placeholder)
    pub id: String,
}

impl ShowCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format.is_json());

        let id = ExpenseId::from_wire(&self.id);
        let Some(expense) = app.sync.get(&id).await else {
            formatter.error(&format!("No expense with id {}", self.id));
            std::process::exit(1);
        };

        if format.is_json() {
            formatter.print_json(&serde_json::to_value(&expense)?);
            return Ok(());
        }

        formatter.field("Id", expense.id.as_str());
        formatter.field("Title", &expense.title);
        formatter.field("Amount", &format!("{:.2}", expense.amount));
        formatter.field("Category", expense.category.name());
        formatter.field("Date", &expense.date.format("%Y-%m-%d").to_string());
        if let Some(receipt) = &expense.receipt_url {
            let value = if receipt.is_inline() {
                "inline image".to_string()
            } else {
                receipt.as_str().to_string()
            };
            formatter.field("Receipt", &value);
        }
        if expense.is_pending() {
            formatter.warn("Not yet pushed to the remote store");
        }

        Ok(())
    }
}
