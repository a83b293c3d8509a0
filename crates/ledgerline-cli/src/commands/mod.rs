//! CLI command implementations
//!
//! One module per subcommand. Every command receives the wired
//! [`App`](crate::wiring::App) and the selected output format.

pub mod add;
pub mod delete;
pub mod list;
pub mod show;
pub mod status;
pub mod summary;
pub mod sync;
pub mod theme;
