//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! mostly validation failures on user-provided expense data.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Title is empty or whitespace-only
    #[error("Title must not be empty")]
    EmptyTitle,

    /// Amount is zero, negative, NaN or infinite
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),

    /// Unknown category name
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}
