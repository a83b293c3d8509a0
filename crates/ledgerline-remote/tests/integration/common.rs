//! Shared test helpers for Supabase integration tests
//!
//! Provides wiremock-based mock server setup for the PostgREST table and
//! storage endpoints. Each helper returns a configured client or store
//! pointing at the mock server.

use wiremock::MockServer;

use ledgerline_core::config::RemoteConfig;
use ledgerline_remote::{RestClient, SupabaseRemoteStore};

/// Remote configuration pointing at the given mock server.
pub fn test_config(server: &MockServer) -> RemoteConfig {
    RemoteConfig {
        base_url: server.uri(),
        api_key: "test-anon-key".to_string(),
        table: "expenses".to_string(),
        bucket: "receipts".to_string(),
    }
}

/// Starts a mock server and returns it with a client pointed at it.
pub async fn setup_client() -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let client = RestClient::new(&test_config(&server));
    (server, client)
}

/// Starts a mock server and returns it with a full store pointed at it.
pub async fn setup_store() -> (MockServer, SupabaseRemoteStore) {
    let server = MockServer::start().await;
    let store = SupabaseRemoteStore::new(RestClient::new(&test_config(&server)));
    (server, store)
}

/// A remote row as PostgREST would return it.
pub fn expense_row(id: &str, title: &str, amount: f64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "amount": amount,
        "category": "Food",
        "date": "2026-05-20T10:00:00Z",
        "receipt_url": null,
        "created_at": "2026-05-20T10:00:01Z",
        "updated_at": "2026-05-20T10:00:01Z"
    })
}
