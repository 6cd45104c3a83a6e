//! Status classification, headers and response decoding through the real HTTP stack

use crate::integration::mock_server::{MockServerFixture, TEST_API_KEY};
use mockito::Matcher;
use moorcheh_sdk::{ErrorKind, MoorchehClient};
use serde_json::json;

#[tokio::test]
async fn test_status_classification_end_to_end() {
    let cases: &[(usize, ErrorKind)] = &[
        (400, ErrorKind::InvalidInput),
        (401, ErrorKind::Authentication),
        (403, ErrorKind::Authentication),
        (409, ErrorKind::Conflict),
        (429, ErrorKind::Api),
        (500, ErrorKind::Api),
        (502, ErrorKind::Api),
    ];

    for (status, kind) in cases {
        let fixture = MockServerFixture::new().await;
        let _m = fixture
            .mock_error("GET", "/namespaces", *status, "upstream said no")
            .await;

        let err = fixture.client().namespaces().list().await.unwrap_err();
        assert_eq!(err.kind(), *kind, "status {}", status);
        assert_eq!(err.status(), Some(*status as u16));
        assert!(err.message().contains("upstream said no"));
    }
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let fixture = MockServerFixture::new().await;
    let m = {
        let mut server = fixture.server.lock().await;
        server
            .mock("GET", "/namespaces")
            .match_header("x-api-key", TEST_API_KEY)
            .match_header("accept", "application/json")
            .match_header("content-type", "application/json")
            .match_header("user-agent", Matcher::Regex("^moorcheh-rust-sdk/".into()))
            .match_header("x-client-request-id", Matcher::Regex("^[0-9a-f-]{36}$".into()))
            .match_header("x-team", "search")
            .with_status(200)
            .with_body(r#"{"namespaces": []}"#)
            .create_async()
            .await
    };

    let client = MoorchehClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(format!("{}/", fixture.base_url))
        .header("x-team", "search")
        .build()
        .unwrap();
    let listing = client.namespaces().list().await.unwrap();
    assert!(listing.namespaces.is_empty());
    m.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_success_body_is_api_error() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_error("GET", "/namespaces", 200, "<html>maintenance</html>")
        .await;

    let err = fixture.client().namespaces().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(200));
    assert!(err.message().contains("<html>maintenance</html>"));
}

#[tokio::test]
async fn test_empty_success_body_decodes_to_empty_object() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture.mock_error("DELETE", "/namespaces/gone", 200, "").await;

    fixture.client().namespaces().delete("gone").await.unwrap();
}

#[tokio::test]
async fn test_unknown_fields_are_kept() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_json(
            "GET",
            "/namespaces",
            200,
            json!({
                "namespaces": [{"namespace_name": "a", "type": "text", "vector_dimension": null, "tier": "gold"}],
                "execution_time": 0.1,
                "request_id": "abc"
            }),
        )
        .await;

    let listing = fixture.client().namespaces().list().await.unwrap();
    assert_eq!(listing.extra.get("request_id"), Some(&json!("abc")));
    assert_eq!(listing.namespaces[0].extra.get("tier"), Some(&json!("gold")));
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = MoorchehClient::builder()
        .api_key(TEST_API_KEY)
        .base_url(format!("http://{}", addr))
        .build()
        .unwrap();
    let err = client.namespaces().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(err.message().starts_with("Network or request error"));
    assert!(err.is_retryable());
}
