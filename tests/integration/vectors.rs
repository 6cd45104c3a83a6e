//! Vector upload / delete with partial success

use crate::integration::mock_server::MockServerFixture;
use moorcheh_sdk::{ErrorKind, ItemId, VectorItem};
use serde_json::{json, Map};

fn vectors(n: usize) -> Vec<VectorItem> {
    (0..n)
        .map(|i| VectorItem::new(format!("vec-{}", i), vec![0.1, 0.2, 0.3]))
        .collect()
}

fn ids(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("vec-{}", i)).collect()
}

#[tokio::test]
async fn test_upload_vectors_created() {
    let fixture = MockServerFixture::new().await;
    let mut metadata = Map::new();
    metadata.insert("label".into(), json!("cat"));
    let m = fixture
        .mock_json_matching(
            "POST",
            "/namespaces/vecs/vectors",
            json!({"vectors": [{"id": "vec-1", "vector": [0.5, 0.25], "metadata": {"label": "cat"}}]}),
            201,
            json!({"status": "success", "vector_ids_processed": ["vec-1"], "errors": []}),
        )
        .await;

    let item = VectorItem::new("vec-1", vec![0.5, 0.25]).with_metadata(metadata);
    let resp = fixture.client().vectors().upload("vecs", &[item]).await.unwrap();
    assert_eq!(resp.status, "success");
    assert!(!resp.is_partial());
    m.assert_async().await;
}

#[tokio::test]
async fn test_partial_chunk_marks_whole_upload_partial() {
    let fixture = MockServerFixture::new().await;
    let path = "/namespaces/vecs/vectors";
    let first = fixture
        .mock_body_regex(
            path,
            r#"\[\{"id":"vec-0","#,
            201,
            json!({"status": "success", "vector_ids_processed": ids(0..100), "errors": []}),
            1,
        )
        .await;
    let second = fixture
        .mock_body_regex(
            path,
            r#"\[\{"id":"vec-100","#,
            207,
            json!({
                "status": "partial",
                "vector_ids_processed": ids(100..119),
                "errors": [{"id": "vec-119", "error": "Dimension mismatch"}]
            }),
            1,
        )
        .await;

    let resp = fixture.client().vectors().upload("vecs", &vectors(120)).await.unwrap();
    assert_eq!(resp.status, "partial");
    assert_eq!(resp.vector_ids_processed.len(), 119);
    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].id, Some(ItemId::from("vec-119")));

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_empty_vector_rejected_locally() {
    let fixture = MockServerFixture::new().await;
    let never = fixture.mock_never("POST", "/namespaces/vecs/vectors").await;

    let items = vec![VectorItem::new("ok", vec![1.0]), VectorItem::new("empty", vec![])];
    let err = fixture.client().vectors().upload("vecs", &items).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(
        err.context().and_then(|c| c.field_path.as_deref()),
        Some("vectors[1].vector")
    );
    never.assert_async().await;
}

#[tokio::test]
async fn test_dimension_mismatch_rejected_by_server() {
    let fixture = MockServerFixture::new().await;
    let _m = fixture
        .mock_error("POST", "/namespaces/vecs/vectors", 400, "Vector dimension mismatch")
        .await;

    let err = fixture.client().vectors().upload("vecs", &vectors(1)).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.status(), Some(400));
    assert!(err.message().contains("Vector dimension mismatch"));
}

#[tokio::test]
async fn test_delete_vectors_success_and_partial() {
    let fixture = MockServerFixture::new().await;
    let _ok = fixture
        .mock_json_matching(
            "POST",
            "/namespaces/vecs/vectors/delete",
            json!({"ids": ["vec1", 456]}),
            200,
            json!({"status": "success", "deleted_ids": ["vec1", 456], "errors": []}),
        )
        .await;
    let _partial = fixture
        .mock_json_matching(
            "POST",
            "/namespaces/vecs/vectors/delete",
            json!({"ids": ["vec9"]}),
            207,
            json!({"status": "partial", "deleted_ids": [], "errors": [{"id": "vec9", "error": "ID not found"}]}),
        )
        .await;

    let client = fixture.client();
    let resp = client
        .vectors()
        .delete("vecs", &[ItemId::from("vec1"), ItemId::from(456i64)])
        .await
        .unwrap();
    assert!(!resp.is_partial());
    assert_eq!(resp.deleted_ids, vec![ItemId::from("vec1"), ItemId::Int(456)]);

    let resp = client.vectors().delete("vecs", &[ItemId::from("vec9")]).await.unwrap();
    assert!(resp.is_partial());
    assert_eq!(resp.errors[0].error.as_deref(), Some("ID not found"));
}

#[tokio::test]
async fn test_non_finite_components_rejected_locally() {
    let fixture = MockServerFixture::new().await;
    let never = fixture.mock_never("POST", "/namespaces/vecs/vectors").await;
    let client = fixture.client();

    for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
        let items = vec![VectorItem::new("v", vec![bad, 1.0])];
        let err = client.vectors().upload("vecs", &items).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("vectors[0].vector")
        );
    }

    never.assert_async().await;
}
