//! 资源操作：命名空间、文档、向量、检索与问答。
//!
//! # Resources
//!
//! Each handle borrows the client and exposes one group of operations. Every
//! operation follows the same shape: validate arguments, build the typed body,
//! dispatch with its expected (and alternate) status, decode the typed result.
//!
//! | Handle | Operations | Success status |
//! |--------|------------|----------------|
//! | [`Namespaces`] | `create` / `delete` / `list` | 201 / 200 / 200 |
//! | [`Documents`] | `upload` / `get` / `delete` | 202 / 200 / 200 or 207 |
//! | [`Vectors`] | `upload` / `delete` | 201 or 207 / 200 or 207 |
//! | [`Search`] | `query` | 200 |
//! | [`Answer`] | `generate` | 200 |
//!
//! A `207` is a partial success, returned as a value with a non-empty
//! `errors` list; it is never an `Err`.

mod answer;
mod documents;
mod namespaces;
mod search;
mod vectors;

pub use answer::Answer;
pub use documents::Documents;
pub use namespaces::Namespaces;
pub use search::Search;
pub use vectors::Vectors;

use crate::types::ItemId;
use crate::{Error, ErrorContext, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::Value;

/// `{ "ids": [...] }`, shared by get and delete calls.
#[derive(Debug, Serialize)]
pub(crate) struct IdsBody<'a> {
    pub ids: &'a [ItemId],
}

pub(crate) fn to_body<T: Serialize>(body: &T) -> Result<Value> {
    serde_json::to_value(body).map_err(|e| {
        Error::client_with_context(
            format!("Failed to serialize request body: {}", e),
            ErrorContext::new().with_source("serialization"),
        )
    })
}

/// Everything except RFC 3986 unreserved characters.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// `/namespaces/{name}{suffix}` with the name encoded as exactly one path segment.
pub(crate) fn namespace_path(namespace: &str, suffix: &str) -> String {
    format!(
        "/namespaces/{}{}",
        utf8_percent_encode(namespace, PATH_SEGMENT),
        suffix
    )
}
