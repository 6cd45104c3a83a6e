use super::{namespace_path, to_body, IdsBody};
use crate::batch::{chunk_count, run_chunked, UPLOAD_BATCH_SIZE};
use crate::client::validation::{validate_documents, validate_ids, validate_namespace_name, MAX_GET_IDS};
use crate::client::{MoorchehClient, RequestSpec};
use crate::types::{DeleteResponse, Document, DocumentGetResponse, DocumentUploadResponse, ItemId};
use crate::Result;
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
struct DocumentsBody<'a> {
    documents: &'a [Document],
}

/// Text documents in a text namespace.
#[derive(Debug, Clone, Copy)]
pub struct Documents<'a> {
    client: &'a MoorchehClient,
}

impl<'a> Documents<'a> {
    pub(crate) fn new(client: &'a MoorchehClient) -> Self {
        Self { client }
    }

    /// Queues documents for embedding and indexing.
    ///
    /// Inputs larger than [`UPLOAD_BATCH_SIZE`] are sent in sequential chunks.
    /// If a chunk fails its error is returned and earlier chunks stay queued.
    pub async fn upload(&self, namespace_name: &str, documents: &[Document]) -> Result<DocumentUploadResponse> {
        validate_namespace_name("namespace_name", namespace_name)?;
        validate_documents(documents)?;

        info!(
            namespace = namespace_name,
            documents = documents.len(),
            chunks = chunk_count(documents.len(), UPLOAD_BATCH_SIZE),
            "uploading documents"
        );

        let path = namespace_path(namespace_name, "/documents");
        let path = path.as_str();
        let client = self.client;
        let merged: DocumentUploadResponse = run_chunked(documents, UPLOAD_BATCH_SIZE, move |_, chunk| async move {
            let body = to_body(&DocumentsBody { documents: chunk })?;
            client
                .execute_json::<DocumentUploadResponse>(RequestSpec::post(path, 202).with_body(body))
                .await
        })
        .await?;

        info!(
            namespace = namespace_name,
            queued = merged.submitted_ids.len(),
            "documents queued"
        );
        Ok(DocumentUploadResponse::queued(merged.submitted_ids))
    }

    /// Fetches stored documents by id. At most 100 ids per call.
    pub async fn get(&self, namespace_name: &str, ids: &[ItemId]) -> Result<DocumentGetResponse> {
        validate_namespace_name("namespace_name", namespace_name)?;
        validate_ids(ids, Some(MAX_GET_IDS))?;

        let body = to_body(&IdsBody { ids })?;
        let found: DocumentGetResponse = self
            .client
            .execute_json(RequestSpec::post(namespace_path(namespace_name, "/documents/get"), 200).with_body(body))
            .await?;

        info!(
            namespace = namespace_name,
            requested = ids.len(),
            found = found.documents.len(),
            "retrieved documents"
        );
        Ok(found)
    }

    /// Deletes documents by id. A `207` partial result is returned, not raised.
    pub async fn delete(&self, namespace_name: &str, ids: &[ItemId]) -> Result<DeleteResponse> {
        validate_namespace_name("namespace_name", namespace_name)?;
        validate_ids(ids, None)?;

        let body = to_body(&IdsBody { ids })?;
        let deleted: DeleteResponse = self
            .client
            .execute_json(
                RequestSpec::post(namespace_path(namespace_name, "/documents/delete"), 200)
                    .with_body(body)
                    .with_alternate(207),
            )
            .await?;

        info!(
            namespace = namespace_name,
            status = deleted.status.as_str(),
            deleted = deleted.deleted_ids.len(),
            errors = deleted.errors.len(),
            "delete documents completed"
        );
        if deleted.is_partial() {
            warn!(
                namespace = namespace_name,
                errors = deleted.errors.len(),
                "delete documents partially failed"
            );
        }
        Ok(deleted)
    }
}
