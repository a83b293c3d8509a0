//! Theme command - show or change the theme preference
//!
//! The preference is a local setting and never synchronized. Anything other
//! than "dark" reads back as light.

use anyhow::Result;
use clap::Args;

use ledgerline_core::domain::Theme;
use ledgerline_core::ports::IExpenseCache;

use crate::output::{get_formatter, OutputFormat};
use crate::wiring::App;

#[derive(Debug, Args)]
pub struct ThemeCommand {
    /// New theme, omit to show the current one
    #[arg(value_parser = ["light", "dark"])]
    pub value: Option<String>,
}

impl ThemeCommand {
    pub async fn execute(&self, app: &App, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format.is_json());

        let theme = match &self.value {
            Some(raw) => {
                let theme = Theme::from_wire(raw);
                app.cache.save_theme(theme).await;
                theme
            }
            None => app.cache.load_theme().await,
        };

        if format.is_json() {
            formatter.print_json(&serde_json::json!({ "theme": theme.as_str() }));
        } else if self.value.is_some() {
            formatter.success(&format!("Theme set to {theme}"));
        } else {
            formatter.field("Theme", theme.as_str());
        }

        Ok(())
    }
}
