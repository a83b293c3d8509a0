//! Status command - connectivity and backend health
//!
//! Shows whether the backend is reachable, whether the expenses table
//! responds, the remote row count and how many local records are pending.

use anyhow::Result;
use clap::Args;

use crate::output::{get_formatter, OutputFormat};
use crate::wiring::App;

#[derive(Debug, Args)]
pub struct StatusCommand {}

impl StatusCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format.is_json());

        let online = app.sync.is_online().await;
        let health = app.sync.remote_health().await;
        let pending = app.sync.pending_count().await;

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "online": online,
                "remote": {
                    "connected": health.connected,
                    "has_table": health.has_table,
                    "row_count": health.row_count,
                },
                "pending": pending,
            }));
            return Ok(());
        }

        formatter.field("Connectivity", if online { "online" } else { "offline" });
        formatter.field(
            "Backend",
            if health.connected {
                "reachable"
            } else {
                "unreachable"
            },
        );
        if health.connected {
            formatter.field("Table", if health.has_table { "ok" } else { "missing" });
            formatter.field("Remote rows", &health.row_count.to_string());
        }
        formatter.field("Pending", &pending.to_string());

        if pending > 0 && online {
            formatter.info("Run `ledgerline sync` to push pending records");
        }

        Ok(())
    }
}
