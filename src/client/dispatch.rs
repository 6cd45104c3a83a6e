//! 请求分发：所有资源操作的唯一出口，负责发送请求并将响应归类为结果或错误。
//!
//! Request dispatcher.
//!
//! Every resource operation funnels through [`MoorchehClient::execute`]. The
//! outcome is resolved in this order:
//!
//! 1. transport timeout → `Network` carrying the configured timeout
//! 2. other transport failure → `Network` (or `Client` if the request could not be built)
//! 3. status equals the expected or alternate status → success
//!    - `204` → [`Payload::Empty`]
//!    - `image/*` content type → [`Payload::Binary`]
//!    - otherwise JSON; an empty body decodes to `{}`
//! 4. any other status → classified by [`classify_status`]
//!
//! No retries, no shared state mutation.

use super::core::MoorchehClient;
use crate::error_kind::ErrorKind;
use crate::transport::{HttpRequest, HttpResponse, TransportError};
use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use percent_encoding::percent_decode_str;
use reqwest::header::HeaderValue;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-client-request-id";

/// Everything needed to issue one call and judge its outcome.
#[derive(Debug, Clone)]
pub(crate) struct RequestSpec {
    pub method: Method,
    /// Path relative to the base endpoint, starting with `/`
    pub path: String,
    pub body: Option<Value>,
    pub expected: u16,
    /// Second accepted status, e.g. `207` for partial success
    pub alternate: Option<u16>,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>, expected: u16) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            expected,
            alternate: None,
        }
    }

    pub fn get(path: impl Into<String>, expected: u16) -> Self {
        Self::new(Method::GET, path, expected)
    }

    pub fn post(path: impl Into<String>, expected: u16) -> Self {
        Self::new(Method::POST, path, expected)
    }

    pub fn delete(path: impl Into<String>, expected: u16) -> Self {
        Self::new(Method::DELETE, path, expected)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_alternate(mut self, status: u16) -> Self {
        self.alternate = Some(status);
        self
    }

    fn accepts(&self, status: u16) -> bool {
        status == self.expected || self.alternate == Some(status)
    }
}

/// Successful response content.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Payload {
    /// Decoded JSON body; `{}` for an empty body
    Json(Value),
    /// Raw bytes of an image response, uninterpreted
    Binary(Bytes),
    /// `204 No Content`
    Empty,
}

impl MoorchehClient {
    /// Issues one request and resolves it into a payload or a classified error.
    ///
    /// Returns the status alongside the payload so typed decoding can report it.
    pub(crate) async fn execute(&self, spec: RequestSpec) -> Result<(u16, Payload)> {
        let request_id = Uuid::new_v4().to_string();
        let url = format!("{}{}", self.config.base_url, spec.path);

        let mut headers = self.default_headers.clone();
        if let Ok(v) = HeaderValue::from_str(&request_id) {
            headers.insert(REQUEST_ID_HEADER, v);
        }

        debug!(
            method = %spec.method,
            path = spec.path.as_str(),
            request_id = request_id.as_str(),
            has_body = spec.body.is_some(),
            "sending request"
        );

        let start = Instant::now();
        let request = HttpRequest {
            method: spec.method.clone(),
            url,
            headers,
            body: spec.body.clone(),
        };

        let response = match self.transport.send(request).await {
            Ok(r) => r,
            Err(e) => {
                error!(
                    path = spec.path.as_str(),
                    request_id = request_id.as_str(),
                    error = %e,
                    "request failed before a response was received"
                );
                return Err(classify_transport_error(e, self.config.timeout));
            }
        };

        let status = response.status;
        let outcome = resolve_response(&spec, response);
        match &outcome {
            Ok(_) => debug!(
                path = spec.path.as_str(),
                request_id = request_id.as_str(),
                http_status = status,
                duration_ms = start.elapsed().as_millis() as u64,
                "request succeeded"
            ),
            Err(e) => warn!(
                path = spec.path.as_str(),
                request_id = request_id.as_str(),
                http_status = status,
                error_kind = e.kind().name(),
                duration_ms = start.elapsed().as_millis() as u64,
                "request failed: {}",
                e
            ),
        }
        outcome.map(|payload| (status, payload))
    }

    /// Dispatches and decodes the JSON object body into `T`.
    pub(crate) async fn execute_json<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        let path = spec.path.clone();
        let (status, payload) = self.execute(spec).await?;
        decode_object(&path, status, payload)
    }
}

/// Resolves a received response against the spec. Pure.
pub(crate) fn resolve_response(spec: &RequestSpec, response: HttpResponse) -> Result<Payload> {
    let status = response.status;
    if !spec.accepts(status) {
        return Err(classify_status(&spec.path, status, &response.text()));
    }

    if status == 204 {
        return Ok(Payload::Empty);
    }

    let is_image = response
        .content_type
        .as_deref()
        .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false);
    if is_image {
        info!(http_status = status, "received binary image response");
        return Ok(Payload::Binary(response.body));
    }

    if response.body.is_empty() {
        return Ok(Payload::Json(Value::Object(serde_json::Map::new())));
    }

    match serde_json::from_slice::<Value>(&response.body) {
        Ok(v) => Ok(Payload::Json(v)),
        Err(e) => {
            warn!(
                path = spec.path.as_str(),
                http_status = status,
                error = %e,
                "failed to decode JSON response on success status"
            );
            Err(Error::api(
                Some(status),
                format!("Failed to decode JSON response: {}", response.text()),
            ))
        }
    }
}

/// Maps a non-accepted status to an error. Total over all statuses.
pub(crate) fn classify_status(path: &str, status: u16, body: &str) -> Error {
    match ErrorKind::from_http_status(status) {
        ErrorKind::InvalidInput => Error::InvalidInput {
            message: format!("Bad Request: {}", body),
            status: Some(status),
            context: ErrorContext::new().with_source("server"),
        },
        ErrorKind::Authentication => Error::Authentication {
            message: format!("Forbidden/Unauthorized: {}", body),
            status: Some(status),
        },
        ErrorKind::Conflict => Error::Conflict {
            message: format!("Conflict: {}", body),
        },
        _ if status == 404 => match namespace_from_path(path) {
            Some(namespace) => Error::NamespaceNotFound {
                namespace,
                message: format!("Resource not found: {}", body),
            },
            None => Error::api(Some(404), format!("Not Found: {}", body)),
        },
        _ if status >= 400 => Error::api(Some(status), format!("API Error: {}", body)),
        _ => Error::api(
            Some(status),
            format!("Unexpected status {}: {}", status, body),
        ),
    }
}

/// Name following the `namespaces` segment, for namespace-scoped paths.
///
/// The segment is percent-decoded back to the caller's name. `None` when the
/// path is not of the form `/namespaces/...`. A scoped path without a usable
/// name segment yields `"unknown"`.
pub(crate) fn namespace_from_path(path: &str) -> Option<String> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if !path.contains("/namespaces/") {
        return None;
    }
    let parts: Vec<&str> = path.trim_matches('/').split('/').collect();
    let name = parts
        .iter()
        .position(|p| *p == "namespaces")
        .and_then(|i| parts.get(i + 1))
        .filter(|s| !s.is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string());
    Some(name)
}

/// Classifies a transport failure. The timeout message carries the configured timeout.
pub(crate) fn classify_transport_error(err: TransportError, timeout: Duration) -> Error {
    match err {
        TransportError::Timeout(_) => Error::Network {
            message: format!(
                "Request timed out after {} seconds.",
                timeout.as_secs_f64()
            ),
            source: err,
        },
        TransportError::Http(_) => Error::Network {
            message: format!("Network or request error: {}", err),
            source: err,
        },
        TransportError::Other(ref msg) => Error::client_with_context(
            format!("An unexpected error occurred: {}", msg),
            ErrorContext::new().with_source("transport"),
        ),
    }
}

/// Turns a success payload into the operation's typed result.
///
/// Anything other than a JSON object, or an object missing required keys, is `Api`.
pub(crate) fn decode_object<T: DeserializeOwned>(path: &str, status: u16, payload: Payload) -> Result<T> {
    match payload {
        Payload::Json(value @ Value::Object(_)) => serde_json::from_value(value).map_err(|e| {
            warn!(path, http_status = status, error = %e, "response structure mismatch");
            Error::api(
                Some(status),
                format!("Invalid response structure from {}: {}", path, e),
            )
        }),
        _ => Err(Error::api(
            Some(status),
            format!("Unexpected response format from {}.", path),
        )),
    }
}
