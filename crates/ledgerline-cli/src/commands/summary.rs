//! Summary command - monthly spending breakdown
//!
//! Computes the total, count and per-category breakdown for one calendar
//! month from whatever list `load_expenses` returns (remote when reachable,
//! cached otherwise).

use anyhow::{bail, Result};
use chrono::{Datelike, Utc};
use clap::Args;

use ledgerline_core::domain::MonthlySummary;

use crate::output::{get_formatter, OutputFormat};
use crate::wiring::App;

#[derive(Debug, Args)]
pub struct SummaryCommand {
    /// Year to summarize, defaults to the current year
    #[arg(long)]
    pub year: Option<i32>,

    /// Month to summarize (1-12), defaults to the current month
    #[arg(long)]
    pub month: Option<u32>,
}

impl SummaryCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format.is_json());

        let now = Utc::now();
        let year = self.year.unwrap_or_else(|| now.year());
        let month = self.month.unwrap_or_else(|| now.month());
        if !(1..=12).contains(&month) {
            bail!("Month must be between 1 and 12, got {month}");
        }

        let expenses = app.sync.load_expenses().await;
        let summary = MonthlySummary::compute(&expenses, year, month);

        if format.is_json() {
            formatter.print_json(&serde_json::to_value(&summary)?);
            return Ok(());
        }

        formatter.field("Month", &format!("{year}-{month:02}"));
        formatter.field("Expenses", &summary.count.to_string());
        formatter.field("Total", &format!("{:.2}", summary.total));
        for (category, amount) in &summary.by_category {
            formatter.field(category.name(), &format!("{amount:.2}"));
        }

        Ok(())
    }
}
