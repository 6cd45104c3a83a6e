use super::builder::MoorchehClientBuilder;
use crate::resources::{Answer, Documents, Namespaces, Search, Vectors};
use crate::transport::Transport;
use crate::Result;
use reqwest::header::HeaderMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.moorcheh.ai/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_ANSWER_MODEL: &str = "anthropic.claude-sonnet-4-20250514-v1:0";

/// Defaults applied to `answer().generate(..)` when the request leaves a field unset.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerDefaults {
    pub ai_model: String,
    pub temperature: f64,
    pub top_k: u32,
    pub threshold: Option<f64>,
}

impl Default for AnswerDefaults {
    fn default() -> Self {
        Self {
            ai_model: DEFAULT_ANSWER_MODEL.to_string(),
            temperature: 0.7,
            top_k: 5,
            threshold: None,
        }
    }
}

impl AnswerDefaults {
    pub fn with_ai_model(mut self, model: impl Into<String>) -> Self {
        self.ai_model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Resolved, immutable client configuration.
#[derive(Clone)]
pub struct ClientConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: String,
    pub(crate) timeout: Duration,
    pub(crate) answer_defaults: AnswerDefaults,
}

impl ClientConfig {
    /// Base endpoint without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn answer_defaults(&self) -> &AnswerDefaults {
        &self.answer_defaults
    }

    /// Whether a credential is configured. The key itself is never exposed.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("answer_defaults", &self.answer_defaults)
            .finish()
    }
}

/// Client for the Moorcheh semantic search API.
///
/// Owns its transport exclusively. The transport (and its sockets) is released
/// when the client is dropped or [`close`](Self::close)d.
pub struct MoorchehClient {
    pub(crate) config: ClientConfig,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) default_headers: HeaderMap,
}

impl MoorchehClient {
    /// Creates a client from the environment (`MOORCHEH_API_KEY`,
    /// `MOORCHEH_BASE_URL`, `MOORCHEH_TIMEOUT_SECS`) and built-in defaults.
    ///
    /// Fails with [`Error::Authentication`](crate::Error::Authentication) when
    /// no API key can be resolved.
    pub fn new() -> Result<Self> {
        MoorchehClientBuilder::new().build()
    }

    pub fn builder() -> MoorchehClientBuilder {
        MoorchehClientBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn namespaces(&self) -> Namespaces<'_> {
        Namespaces::new(self)
    }

    pub fn documents(&self) -> Documents<'_> {
        Documents::new(self)
    }

    pub fn vectors(&self) -> Vectors<'_> {
        Vectors::new(self)
    }

    pub fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    pub fn answer(&self) -> Answer<'_> {
        Answer::new(self)
    }

    /// Releases the transport. Equivalent to dropping the client, plus a log line.
    pub fn close(self) {
        info!(base_url = %self.config.base_url, "HTTP client closed");
    }
}

impl Drop for MoorchehClient {
    fn drop(&mut self) {
        debug!(
            base_url = %self.config.base_url,
            "releasing transport"
        );
    }
}

impl fmt::Debug for MoorchehClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoorchehClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
