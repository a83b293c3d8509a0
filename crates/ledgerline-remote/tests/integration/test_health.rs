//! Tests for the remote health probe

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ledgerline_core::ports::IRemoteStore;

use crate::common::{setup_store, test_config};
use ledgerline_remote::{RestClient, SupabaseRemoteStore};

#[tokio::test]
async fn healthy_table_reports_row_count() {
    let (server, store) = setup_store().await;

    Mock::given(method("HEAD"))
        .and(path("/rest/v1/expenses"))
        .respond_with(ResponseTemplate::new(200).append_header("Content-Range", "0-0/42"))
        .mount(&server)
        .await;

    let health = store.check_health().await;
    assert!(health.connected);
    assert!(health.has_table);
    assert_eq!(health.row_count, 42);
}

#[tokio::test]
async fn missing_table_reports_connected_without_table() {
    let (server, store) = setup_store().await;

    Mock::given(method("HEAD"))
        .and(path("/rest/v1/expenses"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let health = store.check_health().await;
    assert!(health.connected);
    assert!(!health.has_table);
    assert_eq!(health.row_count, 0);
}

#[tokio::test]
async fn unreachable_backend_reports_disconnected() {
    // A dedicated listener: unlike pooled servers, dropping this server
    // actually closes the port, making the backend unreachable.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind listener");
    let server = MockServer::builder().listener(listener).start().await;
    let config = test_config(&server);
    drop(server);

    let store = SupabaseRemoteStore::new(RestClient::new(&config));
    let health = store.check_health().await;
    assert!(!health.connected);
    assert!(!health.has_table);
}

#[tokio::test]
async fn missing_count_header_reports_zero_rows() {
    let (server, store) = setup_store().await;

    Mock::given(method("HEAD"))
        .and(path("/rest/v1/expenses"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let health = store.check_health().await;
    assert!(health.has_table);
    assert_eq!(health.row_count, 0);
}
