//! List command - show expenses
//!
//! Pulls the remote list when the backend is reachable (pushing any pending
//! records first) and falls back to the local cache otherwise. `--pending`
//! restricts the output to records still waiting to be pushed.

use anyhow::Result;
use clap::Args;

use ledgerline_core::domain::Expense;

use crate::output::{get_formatter, OutputFormat};
use crate::wiring::App;

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only show records that have not reached the remote store yet
    #[arg(long)]
    pub pending: bool,
}

impl ListCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format.is_json());

        let mut expenses = app.sync.load_expenses().await;
        if self.pending {
            expenses.retain(Expense::is_pending);
        }

        if format.is_json() {
            formatter.print_json(&serde_json::to_value(&expenses)?);
            return Ok(());
        }

        if expenses.is_empty() {
            formatter.info("No expenses recorded");
            return Ok(());
        }

        for expense in &expenses {
            println!("{}", format_line(expense));
        }
        formatter.info(&format!("{} expense(s)", expenses.len()));

        Ok(())
    }
}

fn format_line(expense: &Expense) -> String {
    let marker = if expense.is_pending() { "*" } else { " " };
    format!(
        "{} {:<12} {:>10.2}  {:<14} {}  [{}]",
        marker,
        expense.date.format("%Y-%m-%d"),
        expense.amount,
        expense.category.name(),
        expense.title,
        expense.id,
    )
}
