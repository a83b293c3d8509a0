//! SQLite implementation of the expense cache port
//!
//! The cache stores whole documents in a two-column key-value table. The
//! expense collection is one JSON array under `offline_expenses`; every
//! mutation deserializes the full collection, applies the change and writes
//! the full collection back. The theme flag lives under `theme_preference`.
//!
//! Inner methods return [`CacheError`] so tests can assert on failures; the
//! [`IExpenseCache`] impl at the bottom is where the fail-soft contract is
//! enforced, logging and swallowing every error.

use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use ledgerline_core::domain::{Expense, ExpenseId, Theme};
use ledgerline_core::ports::IExpenseCache;

use crate::CacheError;

/// Key of the cached expense collection
const EXPENSES_KEY: &str = "offline_expenses";
/// Key of the theme preference flag
const THEME_KEY: &str = "theme_preference";

/// SQLite-backed implementation of `IExpenseCache`
pub struct SqliteExpenseCache {
    pool: SqlitePool,
}

impl SqliteExpenseCache {
    /// Creates a cache backed by the given connection pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ------------------------------------------------------------------
    // Key-value primitives
    // ------------------------------------------------------------------

    async fn get_value(&self, key: &str) -> Result<Option<String>, CacheError> {
        let row = sqlx::query("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| r.get::<String, _>(0)))
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<(), CacheError> {
        sqlx::query(
            "INSERT INTO kv_store (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;
        tracing::trace!(key, "Cache entry written");
        Ok(())
    }

    async fn delete_value(&self, key: &str) -> Result<(), CacheError> {
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?;
        tracing::trace!(key, "Cache entry deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Collection operations
    // ------------------------------------------------------------------

    /// Loads the cached collection. A missing entry is an empty collection;
    /// an entry that no longer parses is treated the same after a warning,
    /// so one corrupt write cannot brick the app.
    pub async fn load_collection(&self) -> Result<Vec<Expense>, CacheError> {
        let Some(raw) = self.get_value(EXPENSES_KEY).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(expenses) => Ok(expenses),
            Err(e) => {
                tracing::warn!(error = %e, "Cached expense collection is corrupt, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the cached collection.
    pub async fn save_collection(&self, expenses: &[Expense]) -> Result<(), CacheError> {
        let json = serde_json::to_string(expenses)?;
        self.set_value(EXPENSES_KEY, &json).await?;
        tracing::debug!(count = expenses.len(), "Expense collection cached");
        Ok(())
    }
}

// ============================================================================
// IExpenseCache implementation (fail-soft boundary)
// ============================================================================

#[async_trait::async_trait]
impl IExpenseCache for SqliteExpenseCache {
    async fn load_all(&self) -> Vec<Expense> {
        match self.load_collection().await {
            Ok(expenses) => expenses,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load cached expenses");
                Vec::new()
            }
        }
    }

    async fn save_all(&self, expenses: &[Expense]) {
        if let Err(e) = self.save_collection(expenses).await {
            tracing::warn!(error = %e, "Failed to cache expense collection");
        }
    }

    async fn clear(&self) {
        if let Err(e) = self.delete_value(EXPENSES_KEY).await {
            tracing::warn!(error = %e, "Failed to clear cached expenses");
        }
    }

    async fn pending_only(&self) -> Vec<Expense> {
        self.load_all()
            .await
            .into_iter()
            .filter(Expense::is_pending)
            .collect()
    }

    async fn remove_by_ids(&self, ids: &[ExpenseId]) {
        if ids.is_empty() {
            return;
        }
        let mut expenses = self.load_all().await;
        let before = expenses.len();
        expenses.retain(|e| !ids.contains(&e.id));
        if expenses.len() != before {
            self.save_all(&expenses).await;
        }
        tracing::debug!(removed = before - expenses.len(), "Removed cached expenses");
    }

    async fn load_theme(&self) -> Theme {
        match self.get_value(THEME_KEY).await {
            Ok(Some(raw)) => Theme::from_wire(&raw),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load theme preference");
                Theme::default()
            }
        }
    }

    async fn save_theme(&self, theme: Theme) {
        if let Err(e) = self.set_value(THEME_KEY, theme.as_str()).await {
            tracing::warn!(error = %e, "Failed to save theme preference");
        }
    }
}
