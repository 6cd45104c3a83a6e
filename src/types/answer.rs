//! Answer-generation types.

use super::search::SearchHit;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One previous conversation turn passed as context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            extra: Map::new(),
        }
    }
}

/// Answer request. Unset tuning fields fall back to the client's
/// [`AnswerDefaults`](crate::client::AnswerDefaults).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerRequest {
    pub namespace: String,
    pub query: String,
    pub top_k: Option<u32>,
    pub ai_model: Option<String>,
    pub temperature: Option<f64>,
    pub chat_history: Vec<ChatTurn>,
    pub header_prompt: Option<String>,
    pub footer_prompt: Option<String>,
    pub kiosk_mode: bool,
    pub threshold: Option<f64>,
}

impl AnswerRequest {
    pub fn new(namespace: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn ai_model(mut self, model: impl Into<String>) -> Self {
        self.ai_model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn chat_history(mut self, history: Vec<ChatTurn>) -> Self {
        self.chat_history = history;
        self
    }

    pub fn header_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.header_prompt = Some(prompt.into());
        self
    }

    pub fn footer_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.footer_prompt = Some(prompt.into());
        self
    }

    pub fn kiosk_mode(mut self, enabled: bool) -> Self {
        self.kiosk_mode = enabled;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

/// Body of `POST /answer`, after defaults are applied.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct AnswerBody<'a> {
    pub namespace: &'a str,
    pub query: &'a str,
    pub top_k: u32,
    #[serde(rename = "type")]
    pub search_type: &'static str,
    #[serde(rename = "aiModel")]
    pub ai_model: &'a str,
    #[serde(rename = "chatHistory")]
    pub chat_history: &'a [ChatTurn],
    pub temperature: f64,
    #[serde(rename = "headerPrompt")]
    pub header_prompt: &'a str,
    #[serde(rename = "footerPrompt")]
    pub footer_prompt: &'a str,
    pub kiosk_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(rename = "contextCount", default, skip_serializing_if = "Option::is_none")]
    pub context_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<SearchHit>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
