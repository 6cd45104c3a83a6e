use super::to_body;
use crate::client::validation::{require_positive, require_unit_interval, validate_search_target};
use crate::client::{MoorchehClient, RequestSpec};
use crate::types::{SearchRequest, SearchResponse};
use crate::Result;
use tracing::{debug, info};

/// Similarity search across one or more namespaces.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    client: &'a MoorchehClient,
}

impl<'a> Search<'a> {
    pub(crate) fn new(client: &'a MoorchehClient) -> Self {
        Self { client }
    }

    /// Runs a text or vector query. The query kind must match the namespaces' type.
    pub async fn query(&self, request: SearchRequest) -> Result<SearchResponse> {
        validate_search_target(&request.namespaces, &request.query)?;
        require_positive("top_k", request.top_k)?;
        if let Some(threshold) = request.threshold {
            require_unit_interval("threshold", threshold)?;
        }

        info!(
            query_type = request.query.kind(),
            namespaces = ?request.namespaces,
            top_k = request.top_k,
            threshold = ?request.threshold,
            kiosk_mode = request.kiosk_mode,
            "searching"
        );

        let body = to_body(&request)?;
        let response: SearchResponse = self
            .client
            .execute_json(RequestSpec::post("/search", 200).with_body(body))
            .await?;

        info!(
            results = response.results.len(),
            execution_time = ?response.execution_time,
            "search completed"
        );
        debug!(results = ?response.results, "search results");
        Ok(response)
    }
}
