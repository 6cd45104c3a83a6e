//! 类型模块：与远端服务约定的请求/响应结构。
//!
//! # Types Module
//!
//! Typed request and response structures for every operation. Field names are
//! the wire contract with the service; responses keep unknown fields in an
//! `extra` map so a returned object is exactly what the server sent.
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`common`] | Item ids and per-item error entries |
//! | [`namespace`] | Namespace creation and listing |
//! | [`document`] | Text documents: upload, get, delete |
//! | [`vector`] | Pre-computed vectors: upload, delete |
//! | [`search`] | Similarity search |
//! | [`answer`] | LLM-backed answer generation |

pub mod answer;
pub mod common;
pub mod document;
pub mod namespace;
pub mod search;
pub mod vector;

pub use answer::{AnswerRequest, AnswerResponse, ChatTurn};
pub use common::{DeleteResponse, ItemError, ItemId};
pub use document::{Document, DocumentGetResponse, DocumentUploadResponse, StoredDocument};
pub use namespace::{CreateNamespaceResponse, NamespaceInfo, NamespaceList, NamespaceType};
pub use search::{SearchHit, SearchQuery, SearchRequest, SearchResponse};
pub use vector::{VectorItem, VectorUploadResponse};
