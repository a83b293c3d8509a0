//! Supabase REST client
//!
//! Provides a typed HTTP client for the two Supabase surfaces Ledgerline
//! uses: the PostgREST expense table and the storage bucket for receipt
//! images. Handles authentication headers, JSON (de)serialization and
//! endpoint construction.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ledgerline_core::config::RemoteConfig;
//! use ledgerline_remote::client::RestClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = RemoteConfig {
//!     base_url: "https://proj.supabase.co".to_string(),
//!     api_key: "anon-key".to_string(),
//!     table: "expenses".to_string(),
//!     bucket: "receipts".to_string(),
//! };
//! let client = RestClient::new(&config);
//! let rows = client.list_expenses().await?;
//! println!("{} expenses", rows.len());
//! # Ok(())
//! # }
//! ```

use anyhow::{bail, Context, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;

use ledgerline_core::config::RemoteConfig;
use ledgerline_core::domain::{Expense, ExpenseId};
use ledgerline_core::ports::NewExpense;

/// Result of the table probe, before interpretation by the port layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    /// The table answered the count query
    pub table_ok: bool,
    /// Row count reported by the `Content-Range` header (0 when absent)
    pub row_count: u64,
}

/// HTTP client for Supabase REST calls
///
/// Wraps `reqwest::Client` with the `apikey`/bearer header pair and
/// endpoint construction for PostgREST and storage paths. The base URL is
/// taken from configuration, which is also how tests point the client at a
/// mock server.
pub struct RestClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL of the Supabase project
    base_url: String,
    /// API key sent on every request
    api_key: String,
    /// Expense table name
    table: String,
    /// Receipt bucket name
    bucket: String,
}

impl RestClient {
    /// Creates a new client from the remote configuration section
    pub fn new(config: &RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            table: config.table.clone(),
            bucket: config.bucket.clone(),
        }
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL and adds the `apikey` and
    /// Authorization headers Supabase expects on every call.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Path of the expense table endpoint
    fn table_path(&self) -> String {
        format!("/rest/v1/{}", self.table)
    }

    // ========================================================================
    // Expense table
    // ========================================================================

    /// Fetches all expenses, ordered by date descending.
    pub async fn list_expenses(&self) -> Result<Vec<Expense>> {
        let path = format!("{}?select=*&order=date.desc", self.table_path());
        debug!(path = %path, "Listing remote expenses");

        let response = self
            .request(Method::GET, &path)
            .send()
            .await
            .context("Failed to send expense list request")?;
        let response = Self::ensure_success(response).await?;

        response
            .json::<Vec<Expense>>()
            .await
            .context("Failed to decode expense list response")
    }

    /// Fetches a single expense by id. `Ok(None)` means the row does not exist.
    pub async fn get_expense(&self, id: &ExpenseId) -> Result<Option<Expense>> {
        let path = format!("{}?select=*&id=eq.{}", self.table_path(), id);
        let response = self
            .request(Method::GET, &path)
            .send()
            .await
            .context("Failed to send expense fetch request")?;
        let response = Self::ensure_success(response).await?;

        let mut rows: Vec<Expense> = response
            .json()
            .await
            .context("Failed to decode expense fetch response")?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    /// Inserts a new row and returns it as stored, including the
    /// server-assigned id and timestamps.
    pub async fn insert_expense(&self, new: &NewExpense) -> Result<Expense> {
        let response = self
            .request(Method::POST, &self.table_path())
            .header("Prefer", "return=representation")
            .json(new)
            .send()
            .await
            .context("Failed to send expense insert request")?;
        let response = Self::ensure_success(response).await?;

        let mut rows: Vec<Expense> = response
            .json()
            .await
            .context("Failed to decode expense insert response")?;
        if rows.is_empty() {
            bail!("Insert returned no representation");
        }
        Ok(rows.remove(0))
    }

    /// Updates the row matching the expense's id and returns the stored result.
    pub async fn update_expense(&self, expense: &Expense) -> Result<Expense> {
        let path = format!("{}?id=eq.{}", self.table_path(), expense.id);
        // PostgREST ignores absent fields, so the patch body is the same
        // shape as an insert payload.
        let body = NewExpense::from(expense);
        let response = self
            .request(Method::PATCH, &path)
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await
            .context("Failed to send expense update request")?;
        let response = Self::ensure_success(response).await?;

        let mut rows: Vec<Expense> = response
            .json()
            .await
            .context("Failed to decode expense update response")?;
        if rows.is_empty() {
            bail!("Update matched no rows for id {}", expense.id);
        }
        Ok(rows.remove(0))
    }

    /// Deletes the row matching the given id.
    pub async fn delete_expense(&self, id: &ExpenseId) -> Result<()> {
        let path = format!("{}?id=eq.{}", self.table_path(), id);
        let response = self
            .request(Method::DELETE, &path)
            .send()
            .await
            .context("Failed to send expense delete request")?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    // ========================================================================
    // Receipt storage
    // ========================================================================

    /// Uploads a receipt image to the bucket and returns its public URL.
    pub async fn upload_receipt(&self, data: &[u8], file_name: &str) -> Result<String> {
        let path = format!("/storage/v1/object/{}/{}", self.bucket, file_name);
        debug!(path = %path, bytes = data.len(), "Uploading receipt");

        let response = self
            .request(Method::POST, &path)
            .header("Content-Type", "image/jpeg")
            .body(data.to_vec())
            .send()
            .await
            .context("Failed to send receipt upload request")?;
        Self::ensure_success(response).await?;

        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, file_name
        ))
    }

    // ========================================================================
    // Health probe
    // ========================================================================

    /// Probes the expense table with an exact-count query.
    ///
    /// A transport failure is an `Err` (backend unreachable). A response,
    /// even an error response, means the backend answered: `table_ok`
    /// distinguishes a queryable table from a missing one.
    pub async fn probe_table(&self) -> Result<ProbeResult> {
        let path = format!("{}?select=id&limit=1", self.table_path());
        let response = self
            .request(Method::HEAD, &path)
            .header("Prefer", "count=exact")
            .send()
            .await
            .context("Failed to send health probe request")?;

        if !response.status().is_success() {
            return Ok(ProbeResult {
                table_ok: false,
                row_count: 0,
            });
        }

        // Content-Range: "0-0/5" -> total after the slash
        let row_count = response
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.rsplit('/').next())
            .and_then(|total| total.parse().ok())
            .unwrap_or(0);

        Ok(ProbeResult {
            table_ok: true,
            row_count,
        })
    }

    /// Converts non-2xx responses into errors carrying status and body.
    async fn ensure_success(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        bail!("Request failed with status {}: {}", status, body)
    }
}
