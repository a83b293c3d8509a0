//! Ledgerline CLI - Command-line interface for Ledgerline
//!
//! Provides commands for:
//! - Recording, listing and deleting expenses
//! - Pushing offline records and pulling the remote list
//! - Inspecting connectivity and backend health
//! - Monthly spending summaries and theme preference

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod wiring;

use commands::{
    add::AddCommand, delete::DeleteCommand, list::ListCommand, show::ShowCommand,
    status::StatusCommand, summary::SummaryCommand, sync::SyncCommand, theme::ThemeCommand,
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "ledgerline", version, about = "Offline-first expense tracker")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skip the remote store entirely, as if the network were down
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add(AddCommand),
    /// List expenses, remote when reachable, cached otherwise
    List(ListCommand),
    /// Show a single expense
    Show(ShowCommand),
    /// Delete an expense
    Delete(DeleteCommand),
    /// Push offline records to the remote store
    Sync(SyncCommand),
    /// Show connectivity, backend health and pending count
    Status(StatusCommand),
    /// Show the spending summary for a month
    Summary(SummaryCommand),
    /// Show or change the theme preference
    Theme(ThemeCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let app = wiring::build(cli.config.as_deref(), cli.offline).await?;

    match cli.command {
        Commands::Add(cmd) => cmd.execute(&app, format).await,
        Commands::List(cmd) => cmd.execute(&app, format).await,
        Commands::Show(cmd) => cmd.execute(&app, format).await,
        Commands::Delete(cmd) => cmd.execute(&app, format).await,
        Commands::Sync(cmd) => cmd.execute(&app, format).await,
        Commands::Status(cmd) => cmd.execute(&app, format).await,
        Commands::Summary(cmd) => cmd.execute(&app, format).await,
        Commands::Theme(cmd) => cmd.execute(&app, format).await,
    }
}
