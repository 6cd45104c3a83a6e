//! 参数校验：在任何网络调用之前拒绝非法输入。
//!
//! Argument validation.
//!
//! Plain functions called at the top of each resource operation. Every check
//! fails with [`Error::InvalidInput`](crate::Error::InvalidInput) carrying the
//! offending argument (or item index) as `field_path`. Emptiness is literal:
//! strings are not trimmed, except for document text which must contain
//! something other than whitespace.

use crate::types::{Document, ItemId, NamespaceType, SearchQuery, VectorItem};
use crate::{Error, ErrorContext, Result};

/// Maximum number of ids accepted by `documents().get(..)`.
pub const MAX_GET_IDS: usize = 100;

fn invalid(field: impl Into<String>, message: impl Into<String>) -> Error {
    Error::invalid_input_with_context(message, ErrorContext::new().with_field_path(field))
}

pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(invalid(field, format!("'{}' must be a non-empty string.", field)));
    }
    Ok(())
}

/// A name used as a URL path segment. It is percent-encoded on the way out,
/// but `.` and `..` would still be collapsed by URL normalization.
pub(crate) fn validate_namespace_name(field: &str, name: &str) -> Result<()> {
    require_non_empty(field, name)?;
    if name == "." || name == ".." {
        return Err(invalid(field, format!("'{}' cannot be '.' or '..'.", field)));
    }
    Ok(())
}

pub(crate) fn require_items<T>(field: &str, items: &[T], of_what: &str) -> Result<()> {
    if items.is_empty() {
        return Err(invalid(
            field,
            format!("'{}' must be a non-empty list of {}.", field, of_what),
        ));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(invalid(field, format!("'{}' must be a positive integer.", field)));
    }
    Ok(())
}

/// Closed interval `[0, 1]`. NaN is rejected.
pub(crate) fn require_unit_interval(field: &str, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(Error::invalid_input_with_context(
            format!("'{}' must be a number between 0 and 1.", field),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(format!("got {}", value)),
        ));
    }
    Ok(())
}

pub(crate) fn validate_namespace_shape(namespace_type: NamespaceType, vector_dimension: Option<u32>) -> Result<()> {
    match (namespace_type, vector_dimension) {
        (NamespaceType::Vector, Some(d)) if d > 0 => Ok(()),
        (NamespaceType::Vector, _) => Err(invalid(
            "vector_dimension",
            "Vector dimension must be a positive integer for type 'vector'.",
        )),
        (NamespaceType::Text, None) => Ok(()),
        (NamespaceType::Text, Some(_)) => Err(invalid(
            "vector_dimension",
            "Vector dimension should not be provided for type 'text'.",
        )),
    }
}

pub(crate) fn validate_ids(ids: &[ItemId], max: Option<usize>) -> Result<()> {
    require_items("ids", ids, "strings or integers")?;
    if let Some(max) = max {
        if ids.len() > max {
            return Err(Error::invalid_input_with_context(
                format!("Maximum of {} document IDs can be requested per call.", max),
                ErrorContext::new()
                    .with_field_path("ids")
                    .with_details(format!("got {}", ids.len())),
            ));
        }
    }
    if let Some(i) = ids.iter().position(ItemId::is_empty) {
        return Err(invalid(
            format!("ids[{}]", i),
            "All items in 'ids' list must be non-empty strings or integers.",
        ));
    }
    Ok(())
}

pub(crate) fn validate_documents(documents: &[Document]) -> Result<()> {
    require_items("documents", documents, "documents")?;
    for (i, doc) in documents.iter().enumerate() {
        if doc.id.is_empty() {
            return Err(invalid(
                format!("documents[{}].id", i),
                format!("Item at index {} in 'documents' is missing required key 'id' or it is empty.", i),
            ));
        }
        if doc.text.trim().is_empty() {
            return Err(invalid(
                format!("documents[{}].text", i),
                format!(
                    "Item at index {} in 'documents' is missing required key 'text' or it is not a non-empty string.",
                    i
                ),
            ));
        }
    }
    Ok(())
}

pub(crate) fn validate_vectors(vectors: &[VectorItem]) -> Result<()> {
    require_items("vectors", vectors, "vector items")?;
    for (i, item) in vectors.iter().enumerate() {
        if item.id.is_empty() {
            return Err(invalid(
                format!("vectors[{}].id", i),
                format!("Item at index {} in 'vectors' is missing required key 'id' or it is empty.", i),
            ));
        }
        if item.vector.is_empty() {
            return Err(invalid(
                format!("vectors[{}].vector", i),
                format!("Item at index {} with id '{}' has an empty 'vector' list.", i, item.id),
            ));
        }
        if let Some(j) = item.vector.iter().position(|x| !x.is_finite()) {
            return Err(Error::invalid_input_with_context(
                format!("Item at index {} with id '{}' has a non-finite value in 'vector'.", i, item.id),
                ErrorContext::new()
                    .with_field_path(format!("vectors[{}].vector", i))
                    .with_details(format!("component {} is {}", j, item.vector[j])),
            ));
        }
    }
    Ok(())
}

pub(crate) fn validate_search_target(namespaces: &[String], query: &SearchQuery) -> Result<()> {
    require_items("namespaces", namespaces, "strings")?;
    if let Some(i) = namespaces.iter().position(String::is_empty) {
        return Err(invalid(
            format!("namespaces[{}]", i),
            "All items in 'namespaces' list must be non-empty strings.",
        ));
    }
    if query.is_empty() {
        return Err(invalid("query", "'query' cannot be empty."));
    }
    if let SearchQuery::Vector(v) = query {
        if v.iter().any(|x| !x.is_finite()) {
            return Err(invalid("query", "'query' vector must contain only finite numbers."));
        }
    }
    Ok(())
}
