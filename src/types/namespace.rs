//! Namespace types.

use crate::{Error, ErrorContext};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// What a namespace stores: text documents embedded server-side, or caller-supplied vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamespaceType {
    Text,
    Vector,
}

impl NamespaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamespaceType::Text => "text",
            NamespaceType::Vector => "vector",
        }
    }
}

impl fmt::Display for NamespaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match only: `"Text"` or `" text"` are rejected.
impl FromStr for NamespaceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(NamespaceType::Text),
            "vector" => Ok(NamespaceType::Vector),
            other => Err(Error::invalid_input_with_context(
                "Namespace type must be 'text' or 'vector'.",
                ErrorContext::new()
                    .with_field_path("type")
                    .with_details(format!("got '{}'", other)),
            )),
        }
    }
}

/// Body of `POST /namespaces`. `vector_dimension` is sent as `null` for text namespaces.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct CreateNamespaceRequest<'a> {
    pub namespace_name: &'a str,
    #[serde(rename = "type")]
    pub namespace_type: NamespaceType,
    pub vector_dimension: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNamespaceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace_name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub namespace_type: Option<NamespaceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_dimension: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of `GET /namespaces`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceInfo {
    pub namespace_name: String,
    #[serde(rename = "type")]
    pub namespace_type: NamespaceType,
    #[serde(default)]
    pub vector_dimension: Option<u32>,
    #[serde(rename = "itemCount", default, skip_serializing_if = "Option::is_none")]
    pub item_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamespaceList {
    pub namespaces: Vec<NamespaceInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NamespaceList {
    pub fn get(&self, name: &str) -> Option<&NamespaceInfo> {
        self.namespaces.iter().find(|ns| ns.namespace_name == name)
    }
}
