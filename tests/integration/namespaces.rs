//! Namespace create / list / delete against the mock server

use crate::integration::mock_server::MockServerFixture;
use moorcheh_sdk::{ErrorKind, ItemId, NamespaceType};
use serde_json::json;

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let fixture = MockServerFixture::new().await;
    let create = fixture
        .mock_json_matching(
            "POST",
            "/namespaces",
            json!({"namespace_name": "ns1", "type": "vector", "vector_dimension": 10}),
            201,
            json!({
                "message": "Namespace created successfully",
                "namespace_name": "ns1",
                "type": "vector",
                "vector_dimension": 10
            }),
        )
        .await;
    let list = fixture
        .mock_json(
            "GET",
            "/namespaces",
            200,
            json!({
                "namespaces": [
                    {"namespace_name": "ns1", "type": "vector", "vector_dimension": 10, "itemCount": 0}
                ],
                "execution_time": 0.02
            }),
        )
        .await;

    let client = fixture.client();
    let created = client
        .namespaces()
        .create("ns1", NamespaceType::Vector, Some(10))
        .await
        .unwrap();
    assert_eq!(created.namespace_name.as_deref(), Some("ns1"));

    let listing = client.namespaces().list().await.unwrap();
    let ns = listing.get("ns1").expect("ns1 should be listed");
    assert_eq!(ns.namespace_type, NamespaceType::Vector);
    assert_eq!(ns.vector_dimension, Some(10));
    assert_eq!(ns.item_count, Some(0));
    assert_eq!(listing.execution_time, Some(0.02));

    create.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn test_text_namespace_sends_null_dimension() {
    let fixture = MockServerFixture::new().await;
    let create = fixture
        .mock_json_matching(
            "POST",
            "/namespaces",
            json!({"namespace_name": "docs", "type": "text", "vector_dimension": null}),
            201,
            json!({"message": "Namespace created successfully", "namespace_name": "docs", "type": "text"}),
        )
        .await;

    let client = fixture.client();
    let created = client
        .namespaces()
        .create("docs", NamespaceType::Text, None)
        .await
        .unwrap();
    assert_eq!(created.namespace_type, Some(NamespaceType::Text));
    create.assert_async().await;
}

#[tokio::test]
async fn test_create_existing_namespace_is_conflict() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_error("POST", "/namespaces", 409, "namespace already exists")
        .await;

    let err = fixture
        .client()
        .namespaces()
        .create("dup", NamespaceType::Text, None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err.status(), Some(409));
    assert!(err.message().contains("namespace already exists"));
}

#[tokio::test]
async fn test_invalid_create_never_reaches_server() {
    let fixture = MockServerFixture::new().await;
    let never = fixture.mock_never("POST", "/namespaces").await;
    let client = fixture.client();

    let cases = [
        ("", NamespaceType::Text, None),
        ("v", NamespaceType::Vector, None),
        ("v", NamespaceType::Vector, Some(0)),
        ("t", NamespaceType::Text, Some(8)),
    ];
    for (name, ty, dim) in cases {
        let err = client.namespaces().create(name, ty, dim).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(err.status(), None);
    }

    never.assert_async().await;
}

#[tokio::test]
async fn test_delete_missing_namespace() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_error("DELETE", "/namespaces/ghost", 404, "no such namespace")
        .await;

    let err = fixture.client().namespaces().delete("ghost").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NamespaceNotFound);
    assert_eq!(err.namespace(), Some("ghost"));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_delete_returns_unit() {
    let fixture = MockServerFixture::new().await;
    let m = fixture
        .mock_json(
            "DELETE",
            "/namespaces/old",
            200,
            json!({"message": "Namespace 'old' deleted successfully"}),
        )
        .await;

    fixture.client().namespaces().delete("old").await.unwrap();
    m.assert_async().await;
}

#[tokio::test]
async fn test_list_without_namespaces_key_is_api_error() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_json("GET", "/namespaces", 200, json!({"items": []}))
        .await;

    let err = fixture.client().namespaces().list().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Api);
    assert_eq!(err.status(), Some(200));
}

#[tokio::test]
async fn test_reserved_characters_stay_in_one_path_segment() {
    let fixture = MockServerFixture::new().await;
    let wrong = {
        let mut server = fixture.server.lock().await;
        server
            .mock("DELETE", "/namespaces/prod")
            .with_status(200)
            .expect(0)
            .create_async()
            .await
    };
    let right = fixture
        .mock_json("DELETE", "/namespaces/prod%23staging", 200, json!({"message": "deleted"}))
        .await;
    let missing = fixture
        .mock_error("DELETE", "/namespaces/a%2Fb%3Fx%3D1", 404, "no such namespace")
        .await;

    let client = fixture.client();
    client.namespaces().delete("prod#staging").await.unwrap();

    let err = client.namespaces().delete("a/b?x=1").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NamespaceNotFound);
    assert_eq!(err.namespace(), Some("a/b?x=1"));

    wrong.assert_async().await;
    right.assert_async().await;
    missing.assert_async().await;
}

#[tokio::test]
async fn test_dot_segment_names_never_reach_server() {
    let fixture = MockServerFixture::new().await;
    let root = fixture.mock_never("DELETE", "/").await;
    let collection = fixture.mock_never("DELETE", "/namespaces").await;
    let client = fixture.client();

    for name in [".", ".."] {
        let err = client.namespaces().delete(name).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("namespace_name")
        );
        assert!(client.documents().get(name, &[ItemId::from("a")]).await.is_err());
    }

    root.assert_async().await;
    collection.assert_async().await;
}
