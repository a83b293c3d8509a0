//! Tests for expense table operations

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ledgerline_core::domain::{Category, Expense, ExpenseId};
use ledgerline_core::ports::{IRemoteStore, NewExpense};

use crate::common::{expense_row, setup_client, setup_store};

#[tokio::test]
async fn list_returns_rows_in_response_order() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/expenses"))
        .and(query_param("order", "date.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            expense_row("b-2", "Newer", 20.0),
            expense_row("a-1", "Older", 10.0),
        ])))
        .mount(&server)
        .await;

    let rows = client.list_expenses().await.expect("list");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "Newer");
    assert_eq!(rows[1].title, "Older");
}

#[tokio::test]
async fn list_sends_api_key_headers() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/expenses"))
        .and(header("apikey", "test-anon-key"))
        .and(header("authorization", "Bearer test-anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    client.list_expenses().await.expect("list");
}

#[tokio::test]
async fn list_fails_on_server_error() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/expenses"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(client.list_expenses().await.is_err());
}

#[tokio::test]
async fn store_list_soft_fails_to_none() {
    let (server, store) = setup_store().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/expenses"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(store.list().await.is_none());
}

#[tokio::test]
async fn store_list_soft_fails_when_unreachable() {
    let server = MockServer::start().await;
    let config = crate::common::test_config(&server);
    drop(server);

    let store =
        ledgerline_remote::SupabaseRemoteStore::new(ledgerline_remote::RestClient::new(&config));
    assert!(store.list().await.is_none());
}

#[tokio::test]
async fn get_by_id_filters_on_id() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/expenses"))
        .and(query_param("id", "eq.a-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([expense_row("a-1", "Lunch", 10.0)])),
        )
        .mount(&server)
        .await;

    let row = client
        .get_expense(&ExpenseId::from_wire("a-1"))
        .await
        .expect("get");
    assert_eq!(row.unwrap().title, "Lunch");
}

#[tokio::test]
async fn get_by_id_returns_none_for_empty_result() {
    let (server, client) = setup_client().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/expenses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let row = client
        .get_expense(&ExpenseId::from_wire("missing"))
        .await
        .expect("get");
    assert!(row.is_none());
}

#[tokio::test]
async fn insert_returns_server_assigned_row() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/expenses"))
        .and(header("prefer", "return=representation"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!([expense_row("srv-9", "Coffee", 3.5)])),
        )
        .mount(&server)
        .await;

    let new = NewExpense {
        title: "Coffee".to_string(),
        amount: 3.5,
        category: Category::Food,
        date: "2026-05-20T10:00:00Z".parse().unwrap(),
        receipt_url: None,
    };
    let stored = client.insert_expense(&new).await.expect("insert");
    assert_eq!(stored.id, ExpenseId::from_wire("srv-9"));
    assert!(!stored.is_pending());
    assert!(stored.created_at.is_some());
}

#[tokio::test]
async fn update_patches_the_matching_row() {
    let (server, client) = setup_client().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/expenses"))
        .and(query_param("id", "eq.srv-9"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([expense_row("srv-9", "Espresso", 4.0)])),
        )
        .mount(&server)
        .await;

    let expense = Expense {
        id: ExpenseId::from_wire("srv-9"),
        title: "Espresso".to_string(),
        amount: 4.0,
        category: Category::Food,
        date: "2026-05-20T10:00:00Z".parse().unwrap(),
        receipt_url: None,
        created_at: None,
        updated_at: None,
    };
    let stored = client.update_expense(&expense).await.expect("update");
    assert_eq!(stored.title, "Espresso");
}

#[tokio::test]
async fn delete_succeeds_on_2xx() {
    let (server, store) = setup_store().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/expenses"))
        .and(query_param("id", "eq.srv-9"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    assert!(store.delete_by_id(&ExpenseId::from_wire("srv-9")).await);
}

#[tokio::test]
async fn delete_soft_fails_to_false() {
    let (server, store) = setup_store().await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/expenses"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(!store.delete_by_id(&ExpenseId::from_wire("srv-9")).await);
}
