use super::to_body;
use crate::client::validation::{require_non_empty, require_positive, require_unit_interval};
use crate::client::{MoorchehClient, RequestSpec};
use crate::types::answer::AnswerBody;
use crate::types::{AnswerRequest, AnswerResponse};
use crate::Result;
use tracing::info;

/// LLM-backed answer generation over a text namespace.
#[derive(Debug, Clone, Copy)]
pub struct Answer<'a> {
    client: &'a MoorchehClient,
}

impl<'a> Answer<'a> {
    pub(crate) fn new(client: &'a MoorchehClient) -> Self {
        Self { client }
    }

    /// Generates an answer grounded in the namespace's documents.
    ///
    /// Unset `top_k`, `ai_model`, `temperature` and `threshold` come from the
    /// client's [`AnswerDefaults`](crate::client::AnswerDefaults).
    pub async fn generate(&self, request: AnswerRequest) -> Result<AnswerResponse> {
        let defaults = self.client.config().answer_defaults();
        let top_k = request.top_k.unwrap_or(defaults.top_k);
        let ai_model = request.ai_model.as_deref().unwrap_or(&defaults.ai_model);
        let temperature = request.temperature.unwrap_or(defaults.temperature);
        let threshold = request.threshold.or(defaults.threshold);

        require_non_empty("namespace", &request.namespace)?;
        require_non_empty("query", &request.query)?;
        require_non_empty("ai_model", ai_model)?;
        require_positive("top_k", top_k)?;
        require_unit_interval("temperature", temperature)?;
        if let Some(threshold) = threshold {
            require_unit_interval("threshold", threshold)?;
        }

        info!(
            namespace = request.namespace.as_str(),
            ai_model,
            top_k,
            history_turns = request.chat_history.len(),
            "generating answer"
        );

        let body = to_body(&AnswerBody {
            namespace: &request.namespace,
            query: &request.query,
            top_k,
            search_type: "text",
            ai_model,
            chat_history: &request.chat_history,
            temperature,
            header_prompt: request.header_prompt.as_deref().unwrap_or(""),
            footer_prompt: request.footer_prompt.as_deref().unwrap_or(""),
            kiosk_mode: request.kiosk_mode,
            threshold,
        })?;

        let response: AnswerResponse = self
            .client
            .execute_json(RequestSpec::post("/answer", 200).with_body(body))
            .await?;

        info!(
            namespace = request.namespace.as_str(),
            model = ?response.model,
            answer_chars = response.answer.len(),
            "answer generated"
        );
        Ok(response)
    }
}
