use crate::error_kind::ErrorKind;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for local validation and unexpected failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Argument or item path that caused the error (e.g., "namespace_name", "documents[3].text")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected range, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "documents.upload", "dispatcher")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the Moorcheh client.
///
/// One variant per [`ErrorKind`]. Every variant carries the raw server message
/// (or a local reason), the status code where one exists, and the namespace
/// name when it could be derived from the request path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: {message}{}", format_context(.context))]
    InvalidInput {
        message: String,
        /// `Some(400)` when the server rejected the request, `None` for local checks
        status: Option<u16>,
        context: ErrorContext,
    },

    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        status: Option<u16>,
    },

    #[error("Namespace '{namespace}' not found: {message}")]
    NamespaceNotFound { namespace: String, message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("API error{}: {message}", format_status(.status))]
    Api { status: Option<u16>, message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: TransportError,
    },

    #[error("Client error: {message}{}", format_context(.context))]
    Client {
        message: String,
        context: ErrorContext,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_status(status: &Option<u16>) -> String {
    match status {
        Some(s) => format!(" (HTTP {})", s),
        None => String::new(),
    }
}

impl Error {
    /// Local validation failure; never reaches the network.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: msg.into(),
            status: None,
            context: ErrorContext::new(),
        }
    }

    /// Local validation failure with structured context.
    pub fn invalid_input_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::InvalidInput {
            message: msg.into(),
            status: None,
            context,
        }
    }

    pub fn authentication(msg: impl Into<String>) -> Self {
        Error::Authentication {
            message: msg.into(),
            status: None,
        }
    }

    /// Success status (or unexpected shape) that could not be turned into the typed result.
    pub fn api(status: Option<u16>, msg: impl Into<String>) -> Self {
        Error::Api {
            status,
            message: msg.into(),
        }
    }

    pub fn client_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Client {
            message: msg.into(),
            context,
        }
    }

    /// The kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::Authentication { .. } => ErrorKind::Authentication,
            Error::NamespaceNotFound { .. } => ErrorKind::NamespaceNotFound,
            Error::Conflict { .. } => ErrorKind::Conflict,
            Error::Api { .. } => ErrorKind::Api,
            Error::Network { .. } => ErrorKind::Network,
            Error::Client { .. } => ErrorKind::Client,
        }
    }

    /// HTTP status code, absent for local and transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::InvalidInput { status, .. }
            | Error::Authentication { status, .. }
            | Error::Api { status, .. } => *status,
            Error::NamespaceNotFound { .. } => Some(404),
            Error::Conflict { .. } => Some(409),
            Error::Network { .. } | Error::Client { .. } => None,
        }
    }

    /// Namespace name extracted from the request path, for `NamespaceNotFound`.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            Error::NamespaceNotFound { namespace, .. } => Some(namespace),
            _ => None,
        }
    }

    /// Raw server message or local reason, without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::InvalidInput { message, .. }
            | Error::Authentication { message, .. }
            | Error::NamespaceNotFound { message, .. }
            | Error::Conflict { message }
            | Error::Api { message, .. }
            | Error::Network { message, .. }
            | Error::Client { message, .. } => message,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::InvalidInput { context, .. } | Error::Client { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind().retryable()
    }
}
