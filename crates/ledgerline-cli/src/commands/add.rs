//! Add command - record a new expense
//!
//! Validates the input, then takes the dual-path write: remote first, local
//! fallback with a pending placeholder when the backend is unreachable. An
//! attached receipt image is uploaded (or inlined when the upload fails).

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;

use ledgerline_core::domain::{Category, ExpenseDraft};
use ledgerline_sync::WriteOutcome;

use crate::output::{get_formatter, OutputFormat};
use crate::wiring::App;

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Expense title
    #[arg(long)]
    pub title: String,

    /// Amount spent
    #[arg(long)]
    pub amount: f64,

    /// Category: Food, Transport, Shopping, Entertainment, Health, Bills, Other
    #[arg(long, default_value = "Other")]
    pub category: String,

    /// Expense date (YYYY-MM-DD or RFC 3339), defaults to now
    #[arg(long)]
    pub date: Option<String>,

    /// Path to a receipt image to attach
    #[arg(long)]
    pub receipt: Option<PathBuf>,
}

impl AddCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format.is_json());

        let category: Category = self
            .category
            .parse()
            .with_context(|| format!("Unknown category '{}'", self.category))?;
        let date = match &self.date {
            Some(raw) => parse_date(raw)?,
            None => Utc::now(),
        };

        let photo = match &self.receipt {
            Some(path) => Some(
                tokio::fs::read(path)
                    .await
                    .with_context(|| format!("Failed to read receipt {}", path.display()))?,
            ),
            None => None,
        };

        let draft = ExpenseDraft {
            title: self.title.clone(),
            amount: self.amount,
            category,
            date,
            receipt_url: None,
        };

        let outcome = match app.sync.create(draft, photo.as_deref()).await {
            Ok(outcome) => outcome,
            Err(e) => {
                formatter.error(&e.to_string());
                std::process::exit(1);
            }
        };

        if format.is_json() {
            let path = match &outcome {
                WriteOutcome::Remote(_) => "remote",
                WriteOutcome::LocalFallback(_) => "local",
            };
            formatter.print_json(&serde_json::json!({
                "path": path,
                "expense": outcome.expense(),
            }));
        } else {
            match &outcome {
                WriteOutcome::Remote(e) => {
                    formatter.success(&format!("Expense recorded (id {})", e.id));
                }
                WriteOutcome::LocalFallback(e) => {
                    formatter.warn("Backend unreachable, expense saved locally");
                    formatter.info(&format!(
                        "Pending id {} will sync when connectivity returns",
                        e.id
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Accepts a bare date (midnight UTC) or a full RFC 3339 timestamp.
fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("Invalid date '{raw}', expected YYYY-MM-DD or RFC 3339"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_date_parses_to_midnight_utc() {
        let dt = parse_date("2026-03-14").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-03-14T00:00:00+00:00");
    }

    #[test]
    fn rfc3339_parses_with_offset() {
        let dt = parse_date("2026-03-14T10:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-03-14T08:30:00+00:00");
    }

    #[test]
    fn garbage_date_is_rejected() {
        assert!(parse_date("next tuesday").is_err());
    }
}
