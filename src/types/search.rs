//! Similarity search types.

use super::common::ItemId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_SEARCH_TOP_K: u32 = 10;

/// Text for text namespaces, an embedding for vector namespaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchQuery {
    Text(String),
    Vector(Vec<f32>),
}

impl SearchQuery {
    pub fn is_empty(&self) -> bool {
        match self {
            SearchQuery::Text(s) => s.is_empty(),
            SearchQuery::Vector(v) => v.is_empty(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SearchQuery::Text(_) => "text",
            SearchQuery::Vector(_) => "vector",
        }
    }
}

impl From<&str> for SearchQuery {
    fn from(s: &str) -> Self {
        SearchQuery::Text(s.to_string())
    }
}

impl From<String> for SearchQuery {
    fn from(s: String) -> Self {
        SearchQuery::Text(s)
    }
}

impl From<Vec<f32>> for SearchQuery {
    fn from(v: Vec<f32>) -> Self {
        SearchQuery::Vector(v)
    }
}

impl From<&[f32]> for SearchQuery {
    fn from(v: &[f32]) -> Self {
        SearchQuery::Vector(v.to_vec())
    }
}

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub namespaces: Vec<String>,
    pub query: SearchQuery,
    pub top_k: u32,
    pub kiosk_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl SearchRequest {
    pub fn new<I, S>(namespaces: I, query: impl Into<SearchQuery>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
            query: query.into(),
            top_k: DEFAULT_SEARCH_TOP_K,
            kiosk_mode: false,
            threshold: None,
        }
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Minimum similarity score in `[0, 1]`.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn kiosk_mode(mut self, enabled: bool) -> Self {
        self.kiosk_mode = enabled;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
