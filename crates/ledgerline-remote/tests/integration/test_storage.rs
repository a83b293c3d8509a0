//! Tests for receipt uploads

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use ledgerline_core::ports::IRemoteStore;

use crate::common::{setup_client, setup_store};

#[tokio::test]
async fn upload_returns_public_url() {
    let (server, client) = setup_client().await;

    Mock::given(method("POST"))
        .and(path("/storage/v1/object/receipts/receipt_1700000000000.jpg"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"Key": "receipts/receipt_1700000000000.jpg"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let url = client
        .upload_receipt(b"jpeg-bytes", "receipt_1700000000000.jpg")
        .await
        .expect("upload");
    assert_eq!(
        url,
        format!(
            "{}/storage/v1/object/public/receipts/receipt_1700000000000.jpg",
            server.uri()
        )
    );
}

#[tokio::test]
async fn upload_soft_fails_to_none() {
    let (server, store) = setup_store().await;

    Mock::given(method("POST"))
        .and(path("/storage/v1/object/receipts/receipt_1.jpg"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    assert!(store
        .upload_receipt(b"jpeg-bytes", "receipt_1.jpg")
        .await
        .is_none());
}
