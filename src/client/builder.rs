use super::core::{AnswerDefaults, ClientConfig, MoorchehClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub const API_KEY_ENV: &str = "MOORCHEH_API_KEY";
pub const BASE_URL_ENV: &str = "MOORCHEH_BASE_URL";
pub const TIMEOUT_ENV: &str = "MOORCHEH_TIMEOUT_SECS";

const API_KEY_HEADER: &str = "x-api-key";
const SDK_USER_AGENT: &str = concat!("moorcheh-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// Builder for [`MoorchehClient`].
///
/// Every setting resolves as: explicit setter, then environment variable,
/// then built-in default. The API key has no default.
#[derive(Default)]
pub struct MoorchehClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    headers: Vec<(String, String)>,
    answer_defaults: Option<AnswerDefaults>,
    transport: Option<Arc<dyn Transport>>,
}

impl MoorchehClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// API key sent as `x-api-key`. Falls back to `MOORCHEH_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Base endpoint. Falls back to `MOORCHEH_BASE_URL`, then the production URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout. Falls back to `MOORCHEH_TIMEOUT_SECS`, then 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request. Later values override earlier ones,
    /// including the built-in defaults.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn answer_defaults(mut self, defaults: AnswerDefaults) -> Self {
        self.answer_defaults = Some(defaults);
        self
    }

    /// Replaces the reqwest transport, e.g. with a test double.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client. No network activity happens here.
    pub fn build(self) -> Result<MoorchehClient> {
        self.build_with_env(|key| std::env::var(key).ok())
    }

    pub(crate) fn build_with_env<F>(self, env: F) -> Result<MoorchehClient>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| lookup(API_KEY_ENV))
            .ok_or_else(|| {
                Error::authentication(
                    "API key not provided. Pass it to the constructor or set the MOORCHEH_API_KEY environment variable.",
                )
            })?;

        let base_url = match self.base_url.filter(|u| !u.is_empty()) {
            Some(url) => url,
            None => lookup(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };
        let base_url = normalize_base_url(&base_url)?;

        let timeout = match self.timeout {
            Some(t) => t,
            None => match lookup(TIMEOUT_ENV) {
                Some(raw) => parse_timeout_secs(&raw)?,
                None => DEFAULT_TIMEOUT,
            },
        };
        if timeout.is_zero() {
            return Err(Error::invalid_input_with_context(
                "Timeout must be greater than zero.",
                ErrorContext::new().with_field_path("timeout"),
            ));
        }

        let default_headers = build_headers(&api_key, &self.headers)?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => Arc::new(HttpTransport::new(timeout).map_err(|e| {
                Error::client_with_context(
                    e.to_string(),
                    ErrorContext::new().with_source("client_builder"),
                )
            })?),
        };

        info!(
            base_url = %base_url,
            sdk_version = env!("CARGO_PKG_VERSION"),
            timeout_secs = timeout.as_secs_f64(),
            "MoorchehClient initialized"
        );

        Ok(MoorchehClient {
            config: ClientConfig {
                api_key,
                base_url,
                timeout,
                answer_defaults: self.answer_defaults.unwrap_or_default(),
            },
            transport,
            default_headers,
        })
    }
}

/// Checks the URL is absolute http(s) and strips trailing slashes.
fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = url::Url::parse(raw).map_err(|e| {
        Error::invalid_input_with_context(
            format!("Invalid base URL '{}': {}", raw, e),
            ErrorContext::new().with_field_path("base_url"),
        )
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::invalid_input_with_context(
            format!("Base URL must use http or https, got '{}'.", parsed.scheme()),
            ErrorContext::new().with_field_path("base_url"),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    let secs: f64 = raw.trim().parse().map_err(|_| {
        Error::invalid_input_with_context(
            format!("{} must be a number of seconds, got '{}'.", TIMEOUT_ENV, raw),
            ErrorContext::new().with_field_path(TIMEOUT_ENV),
        )
    })?;
    if !secs.is_finite() || secs <= 0.0 {
        return Err(Error::invalid_input_with_context(
            "Timeout must be greater than zero.",
            ErrorContext::new().with_field_path(TIMEOUT_ENV),
        ));
    }
    Ok(Duration::from_secs_f64(secs))
}

fn build_headers(api_key: &str, custom: &[(String, String)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(SDK_USER_AGENT));

    let mut key = HeaderValue::from_str(api_key).map_err(|_| {
        Error::invalid_input_with_context(
            "API key contains characters not allowed in an HTTP header.",
            ErrorContext::new().with_field_path("api_key"),
        )
    })?;
    key.set_sensitive(true);
    headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

    for (name, value) in custom {
        let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| {
            Error::invalid_input_with_context(
                format!("Invalid header name '{}'.", name),
                ErrorContext::new().with_field_path("headers"),
            )
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|_| {
            Error::invalid_input_with_context(
                format!("Invalid value for header '{}'.", name),
                ErrorContext::new().with_field_path("headers"),
            )
        })?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}
