//! Text document types.

use super::common::ItemId;
use crate::batch::Merge;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A text document to upload. Extra fields are sent alongside `id` and `text`
/// and come back as metadata in search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: ItemId,
    pub text: String,
    /// Never holds `id` or `text`, so flattening cannot override them.
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<ItemId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            fields: Map::new(),
        }
    }

    /// Adds a top-level metadata field. `id` and `text` are reserved and ignored here.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != "id" && key != "text" {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Extra top-level fields sent alongside `id` and `text`.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Sets the nested `metadata` object.
    pub fn with_metadata(self, metadata: Map<String, Value>) -> Self {
        self.with_field("metadata", Value::Object(metadata))
    }
}

/// `202 Accepted` body: documents are queued for embedding, not yet searchable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentUploadResponse {
    pub status: String,
    pub submitted_ids: Vec<ItemId>,
}

impl DocumentUploadResponse {
    pub fn queued(submitted_ids: Vec<ItemId>) -> Self {
        Self {
            status: "queued".to_string(),
            submitted_ids,
        }
    }
}

impl Default for DocumentUploadResponse {
    fn default() -> Self {
        Self::queued(Vec::new())
    }
}

impl Merge for DocumentUploadResponse {
    fn merge(&mut self, next: Self) {
        self.submitted_ids.extend(next.submitted_ids);
    }
}

/// A document as stored by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: ItemId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentGetResponse {
    pub documents: Vec<StoredDocument>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
