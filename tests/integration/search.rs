//! Search scenarios

use crate::integration::mock_server::MockServerFixture;
use moorcheh_sdk::{ErrorKind, ItemId, SearchRequest};
use serde_json::json;

#[tokio::test]
async fn test_search_returns_server_object() {
    let fixture = MockServerFixture::new().await;
    let body = json!({"results": [{"id": "d1", "score": 0.9}], "execution_time": 0.01});
    let m = fixture
        .mock_json_matching(
            "POST",
            "/search",
            json!({"namespaces": ["ns1"], "query": "hello", "top_k": 2, "kiosk_mode": false}),
            200,
            body.clone(),
        )
        .await;

    let resp = fixture
        .client()
        .search()
        .query(SearchRequest::new(["ns1"], "hello").top_k(2))
        .await
        .unwrap();

    assert_eq!(resp.results.len(), 1);
    assert_eq!(resp.results[0].id, ItemId::from("d1"));
    assert_eq!(resp.results[0].score, Some(0.9));
    assert_eq!(serde_json::to_value(&resp).unwrap(), body);
    m.assert_async().await;
}

#[tokio::test]
async fn test_vector_query_with_threshold() {
    let fixture = MockServerFixture::new().await;
    let m = fixture
        .mock_json_matching(
            "POST",
            "/search",
            json!({"namespaces": ["vecs"], "query": [0.5, 0.25], "threshold": 0.5, "kiosk_mode": true}),
            200,
            json!({"results": [], "execution_time": 0.002}),
        )
        .await;

    let resp = fixture
        .client()
        .search()
        .query(
            SearchRequest::new(["vecs"], vec![0.5f32, 0.25])
                .threshold(0.5)
                .kiosk_mode(true),
        )
        .await
        .unwrap();
    assert!(resp.results.is_empty());
    m.assert_async().await;
}

#[tokio::test]
async fn test_invalid_search_never_reaches_server() {
    let fixture = MockServerFixture::new().await;
    let never = fixture.mock_never("POST", "/search").await;
    let client = fixture.client();

    let bad = [
        SearchRequest::new(["ns1"], "hello").top_k(0),
        SearchRequest::new(Vec::<String>::new(), "hello"),
        SearchRequest::new(["ns1", ""], "hello"),
        SearchRequest::new(["ns1"], ""),
        SearchRequest::new(["ns1"], Vec::<f32>::new()),
        SearchRequest::new(["ns1"], "hello").threshold(1.5),
        SearchRequest::new(["vecs"], vec![f32::INFINITY]),
        SearchRequest::new(["vecs"], vec![0.5, f32::NAN]),
    ];
    for request in bad {
        let err = client.search().query(request).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    never.assert_async().await;
}

#[tokio::test]
async fn test_search_404_is_not_namespace_error() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture.mock_error("POST", "/search", 404, "route not found").await;

    let err = fixture
        .client()
        .search()
        .query(SearchRequest::new(["ns1"], "hello"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.namespace(), None);
}
