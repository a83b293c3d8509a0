//! Domain entities and business logic
//!
//! This module contains the core domain types for Ledgerline:
//! - Expense entity with its identifier, category and receipt types
//! - Validated draft type for create/update input
//! - Monthly summary aggregation
//! - Theme preference
//! - Domain-specific error types

pub mod errors;
pub mod expense;
pub mod summary;
pub mod theme;

// Re-export commonly used types
pub use errors::DomainError;
pub use expense::{Category, Expense, ExpenseDraft, ExpenseId, Receipt};
pub use summary::MonthlySummary;
pub use theme::Theme;
