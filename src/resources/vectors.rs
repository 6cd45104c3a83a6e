use super::{namespace_path, to_body, IdsBody};
use crate::batch::{chunk_count, run_chunked, UPLOAD_BATCH_SIZE};
use crate::client::validation::{validate_ids, validate_namespace_name, validate_vectors};
use crate::client::{MoorchehClient, RequestSpec};
use crate::types::{DeleteResponse, ItemId, VectorItem, VectorUploadResponse};
use crate::Result;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct VectorsBody<'a> {
    vectors: &'a [VectorItem],
}

/// Pre-computed vectors in a vector namespace.
#[derive(Debug, Clone, Copy)]
pub struct Vectors<'a> {
    client: &'a MoorchehClient,
}

impl<'a> Vectors<'a> {
    pub(crate) fn new(client: &'a MoorchehClient) -> Self {
        Self { client }
    }

    /// Uploads vectors, chunked like document uploads.
    ///
    /// Per-item failures (e.g. dimension mismatch) come back in `errors` with
    /// `status == "partial"`.
    pub async fn upload(&self, namespace_name: &str, vectors: &[VectorItem]) -> Result<VectorUploadResponse> {
        validate_namespace_name("namespace_name", namespace_name)?;
        validate_vectors(vectors)?;

        info!(
            namespace = namespace_name,
            vectors = vectors.len(),
            chunks = chunk_count(vectors.len(), UPLOAD_BATCH_SIZE),
            "uploading vectors"
        );

        let path = namespace_path(namespace_name, "/vectors");
        let path = path.as_str();
        let client = self.client;
        let merged: VectorUploadResponse = run_chunked(vectors, UPLOAD_BATCH_SIZE, move |_, chunk| async move {
            let body = to_body(&VectorsBody { vectors: chunk })?;
            client
                .execute_json::<VectorUploadResponse>(
                    RequestSpec::post(path, 201).with_body(body).with_alternate(207),
                )
                .await
        })
        .await?;

        info!(
            namespace = namespace_name,
            status = merged.status.as_str(),
            processed = merged.vector_ids_processed.len(),
            errors = merged.errors.len(),
            "upload vectors completed"
        );
        if merged.is_partial() {
            warn!(
                namespace = namespace_name,
                errors = merged.errors.len(),
                "upload vectors partially failed"
            );
        }
        Ok(merged)
    }

    /// Deletes vectors by id. A `207` partial result is returned, not raised.
    pub async fn delete(&self, namespace_name: &str, ids: &[ItemId]) -> Result<DeleteResponse> {
        validate_namespace_name("namespace_name", namespace_name)?;
        validate_ids(ids, None)?;

        let body = to_body(&IdsBody { ids })?;
        let deleted: DeleteResponse = self
            .client
            .execute_json(
                RequestSpec::post(namespace_path(namespace_name, "/vectors/delete"), 200)
                    .with_body(body)
                    .with_alternate(207),
            )
            .await?;

        info!(
            namespace = namespace_name,
            status = deleted.status.as_str(),
            deleted = deleted.deleted_ids.len(),
            errors = deleted.errors.len(),
            "delete vectors completed"
        );
        if deleted.is_partial() {
            warn!(
                namespace = namespace_name,
                errors = deleted.errors.len(),
                "delete vectors partially failed"
            );
        }
        Ok(deleted)
    }
}
