//! Pre-computed vector types.

use super::common::{ItemError, ItemId};
use crate::batch::Merge;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A vector to upload into a vector namespace. Its length must match the namespace dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorItem {
    pub id: ItemId,
    pub vector: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl VectorItem {
    pub fn new(id: impl Into<ItemId>, vector: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            vector,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }
}

/// `201 Created` (all processed) or `207 Multi-Status` (some failed) body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorUploadResponse {
    pub status: String,
    pub vector_ids_processed: Vec<ItemId>,
    #[serde(default)]
    pub errors: Vec<ItemError>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VectorUploadResponse {
    pub fn is_partial(&self) -> bool {
        self.status == "partial" || !self.errors.is_empty()
    }
}

impl Default for VectorUploadResponse {
    fn default() -> Self {
        Self {
            status: "success".to_string(),
            vector_ids_processed: Vec::new(),
            errors: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// A single partial chunk makes the whole upload partial.
impl Merge for VectorUploadResponse {
    fn merge(&mut self, next: Self) {
        let partial = self.is_partial() || next.is_partial();
        self.vector_ids_processed.extend(next.vector_ids_processed);
        self.errors.extend(next.errors);
        if partial {
            self.status = "partial".to_string();
        }
    }
}
