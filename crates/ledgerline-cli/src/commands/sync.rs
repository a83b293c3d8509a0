//! Sync command - push pending records and refresh the cache
//!
//! Pushes offline records one by one, then pulls the full remote list so the
//! cache reflects the backend. Reports what was pushed, what failed and what
//! is still pending.

use anyhow::Result;
use clap::Args;

use crate::output::{get_formatter, OutputFormat};
use crate::wiring::App;

#[derive(Debug, Args)]
pub struct SyncCommand {}

impl SyncCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format.is_json());

        if !app.sync.is_online().await {
            formatter.error("Backend unreachable, nothing was pushed");
            std::process::exit(1);
        }

        let report = app.sync.push_pending().await;
        let expenses = app.sync.load_expenses().await;

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "attempted": report.attempted,
                "pushed": report.pushed,
                "failed": report.failed,
                "skipped": report.skipped,
                "cached": expenses.len(),
            }));
            return Ok(());
        }

        if report.skipped {
            formatter.warn("A push is already in progress, skipped");
        } else if report.attempted == 0 {
            formatter.success("Nothing pending, cache refreshed");
        } else if report.failed == 0 {
            formatter.success(&format!("Pushed {} record(s)", report.pushed));
        } else {
            formatter.warn(&format!(
                "Pushed {} of {} record(s), {} still pending",
                report.pushed, report.attempted, report.failed
            ));
        }
        formatter.field("Cached", &expenses.len().to_string());

        Ok(())
    }
}
