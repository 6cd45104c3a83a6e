//! 错误分类：客户端可见的封闭错误种类及其 HTTP 状态映射。
//!
//! Client-visible error kinds.
//!
//! Every failure surfaced by this crate belongs to exactly one of the kinds
//! below. The mapping from HTTP status to kind is deterministic and lives here
//! so the dispatcher and callers agree on it.
//!
//! | Kind                | Typical source                          | Retry as-is? |
//! |---------------------|-----------------------------------------|--------------|
//! | `InvalidInput`      | local validation, HTTP 400              | no           |
//! | `Authentication`    | missing credential, HTTP 401 / 403      | no           |
//! | `NamespaceNotFound` | HTTP 404 on a `/namespaces/{name}` path | no           |
//! | `Conflict`          | HTTP 409                                | no           |
//! | `Api`               | other non-2xx, undecodable success body | maybe        |
//! | `Network`           | timeout, connection reset, DNS          | maybe        |
//! | `Client`            | anything else unexpected                | no           |
//!
//! ## Example
//!
//! ```rust
//! use moorcheh_sdk::error_kind::ErrorKind;
//!
//! let kind = ErrorKind::from_http_status(409);
//! assert_eq!(kind, ErrorKind::Conflict);
//! assert_eq!(kind.name(), "conflict");
//! assert!(!kind.retryable());
//! ```

use std::fmt;

/// Closed set of error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed request, rejected locally or by the server (400)
    InvalidInput,
    /// Bad or missing credential (401/403)
    Authentication,
    /// Target namespace does not exist (404 on a namespace-scoped path)
    NamespaceNotFound,
    /// Resource already exists (409)
    Conflict,
    /// Any other non-success status, or a success status with a malformed body
    Api,
    /// Transport-level failure
    Network,
    /// Catch-all for unexpected failures while processing a call
    Client,
}

impl ErrorKind {
    /// Returns the stable snake_case name (e.g. `"namespace_not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidInput => "invalid_input",
            Self::Authentication => "authentication",
            Self::NamespaceNotFound => "namespace_not_found",
            Self::Conflict => "conflict",
            Self::Api => "api",
            Self::Network => "network",
            Self::Client => "client",
        }
    }

    /// Whether a caller may reasonably retry the same call unchanged (with its own backoff).
    ///
    /// This crate never retries by itself.
    #[inline]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Api | Self::Network)
    }

    /// Maps a non-success HTTP status to a kind, ignoring the request path.
    ///
    /// 404 maps to `Api` here; the dispatcher upgrades it to `NamespaceNotFound`
    /// when the path is namespace-scoped.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::InvalidInput,
            401 | 403 => Self::Authentication,
            409 => Self::Conflict,
            _ => Self::Api,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
