//! # moorcheh-sdk
//!
//! Moorcheh 语义检索服务的异步 Rust 客户端：命名空间、文档与向量写入、相似度检索和问答生成。
//!
//! Async client for the Moorcheh semantic search API.
//!
//! ## Overview
//!
//! The client translates typed method calls into HTTP/JSON requests, checks
//! arguments before anything leaves the process, and turns responses into
//! typed results or one of a small, closed set of [`ErrorKind`]s.
//!
//! - **Validated**: malformed input fails with [`Error::InvalidInput`] and never reaches the network
//! - **Classified errors**: every failure maps to exactly one kind, with status, raw server message and namespace where known
//! - **Partial success is a value**: `207` responses come back as results with an `errors` list
//! - **Chunked uploads**: document and vector uploads are split into sequential batches of 100
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use moorcheh_sdk::{MoorchehClient, NamespaceType, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> moorcheh_sdk::Result<()> {
//!     // Reads MOORCHEH_API_KEY (and optionally MOORCHEH_BASE_URL) from the environment.
//!     let client = MoorchehClient::new()?;
//!
//!     client
//!         .namespaces()
//!         .create("my-docs", NamespaceType::Text, None)
//!         .await?;
//!
//!     let results = client
//!         .search()
//!         .query(SearchRequest::new(["my-docs"], "What is Moorcheh?").top_k(3))
//!         .await?;
//!     println!("{} hit(s)", results.results.len());
//!
//!     client.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder, configuration and request dispatch |
//! | [`resources`] | Namespace, document, vector, search and answer operations |
//! | [`types`] | Typed request and response structures |
//! | [`batch`] | Fixed-size chunking for bulk uploads |
//! | [`transport`] | HTTP seam and the reqwest-backed transport |
//! | [`error_kind`] | The closed set of error kinds |

pub mod batch;
pub mod client;
pub mod error_kind;
pub mod resources;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{AnswerDefaults, ClientConfig, MoorchehClient, MoorchehClientBuilder};
pub use error_kind::ErrorKind;
pub use types::{
    AnswerRequest, AnswerResponse, ChatTurn, CreateNamespaceResponse, DeleteResponse, Document,
    DocumentGetResponse, DocumentUploadResponse, ItemError, ItemId, NamespaceInfo, NamespaceList,
    NamespaceType, SearchHit, SearchQuery, SearchRequest, SearchResponse, StoredDocument,
    VectorItem, VectorUploadResponse,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
