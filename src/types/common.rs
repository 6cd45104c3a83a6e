//! Item identifiers and per-item outcomes shared by bulk operations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifier of a document or vector. The service accepts strings or integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Text(String),
}

impl ItemId {
    /// Only text ids can be empty.
    pub fn is_empty(&self) -> bool {
        match self {
            ItemId::Text(s) => s.is_empty(),
            ItemId::Int(_) => false,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Int(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId::Text(s)
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Int(n)
    }
}

/// One failed item inside a partial-success (207) response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of deleting documents or vectors by id.
///
/// HTTP 200 carries `status: "success"`; HTTP 207 carries `status: "partial"`
/// with the failed ids in `errors`. Neither is an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
    pub deleted_ids: Vec<ItemId>,
    #[serde(default)]
    pub errors: Vec<ItemError>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DeleteResponse {
    pub fn is_partial(&self) -> bool {
        self.status == "partial" || !self.errors.is_empty()
    }
}
