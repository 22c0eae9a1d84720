//! Per-call context and request preparation
//!
//! [`ApiContext`] is the immutable authentication/environment bundle a
//! caller supplies for one call. [`PreparedCall`] is the intermediate step
//! that assembles endpoint, header map, and payload from context plus
//! resolved configuration before transmission.

use base64::Engine;
use http::{header, HeaderMap, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};
use url::Url;
use uuid::Uuid;

use crate::{
    config::{Config, ResolvedConfig},
    error::{Error, Result},
};

/// Per-call authentication and environment bundle.
///
/// Immutable per call. A fresh request id is generated unless the caller
/// provides one.
#[derive(Debug, Clone)]
pub struct ApiContext {
    /// Bearer access token for the call.
    pub access_token: SecretString,
    /// Idempotency id sent as `PayPal-Request-Id`.
    pub request_id: String,
    /// Caller-supplied headers; they win over SDK defaults on conflict.
    pub headers: HeaderMap,
    /// Version tag baked into the `User-Agent` header. Defaults to the
    /// crate name and version.
    pub sdk_version: Option<String>,
    /// Per-call configuration overrides, merged over the client's.
    pub config: Option<Config>,
}

impl ApiContext {
    /// Create a context from an access token, generating a request id.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: SecretString::new(access_token.into().into_boxed_str()),
            request_id: Uuid::new_v4().to_string(),
            headers: HeaderMap::new(),
            sdk_version: None,
            config: None,
        }
    }

    /// Use an explicit request id instead of the generated one.
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }

    /// Add a custom header. Caller headers take precedence over SDK
    /// defaults; setting the same name twice keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to
    /// HTTP specifications.
    pub fn with_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key = key_str
            .parse::<HeaderName>()
            .map_err(|e| Error::HttpClient(format!("Invalid header name '{key_str}': {e}")))?;
        let value = value_str
            .parse::<HeaderValue>()
            .map_err(|e| Error::HttpClient(format!("Invalid header value '{value_str}': {e}")))?;

        self.headers.insert(key, value);
        Ok(self)
    }

    /// Override the SDK version tag used in the `User-Agent` header.
    pub fn with_sdk_version(mut self, version: impl Into<String>) -> Self {
        self.sdk_version = Some(version.into());
        self
    }

    /// Attach per-call configuration overrides.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }
}

/// An API call assembled and ready for the executor.
///
/// Lifetime is one request: it owns the endpoint, the merged header map,
/// and the serialized payload.
#[derive(Debug)]
pub(crate) struct PreparedCall {
    pub endpoint: Url,
    pub headers: HeaderMap,
    pub payload: String,
}

impl PreparedCall {
    /// Build a bearer-authorized call from context and resolved config.
    ///
    /// SDK defaults (`Authorization`, `PayPal-Request-Id`, `User-Agent`)
    /// are inserted first, then caller headers overlaid, so caller values
    /// win on conflict. `HeaderMap` keys are case-insensitive-unique with
    /// last-writer-wins semantics.
    pub fn new(
        context: &ApiContext,
        config: &ResolvedConfig,
        payload: String,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header_value(&format!(
                "Bearer {}",
                context.access_token.expose_secret()
            ))?,
        );
        headers.insert(
            HeaderName::from_static("paypal-request-id"),
            header_value(&context.request_id)?,
        );
        headers.insert(
            header::USER_AGENT,
            header_value(&user_agent(context.sdk_version.as_deref()))?,
        );

        for (key, value) in &context.headers {
            headers.insert(key.clone(), value.clone());
        }

        Ok(Self {
            endpoint: parse_endpoint(&config.endpoint)?,
            headers,
            payload,
        })
    }

    /// Build a basic-authorized call for the OAuth token endpoint.
    pub fn with_basic_auth(config: &ResolvedConfig, payload: String) -> Result<Self> {
        let (client_id, client_secret) = config.credentials()?;
        let credentials = base64::engine::general_purpose::STANDARD.encode(format!(
            "{}:{}",
            client_id.expose_secret(),
            client_secret.expose_secret()
        ));

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header_value(&format!("Basic {credentials}"))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded"),
        );
        headers.insert(header::USER_AGENT, header_value(&user_agent(None))?);

        Ok(Self {
            endpoint: parse_endpoint(&config.endpoint)?,
            headers,
            payload,
        })
    }
}

/// Default SDK user-agent string, e.g.
/// `PayPalSDK/paypal-rest-rust 0.1.0 (linux; x86_64)`.
pub(crate) fn user_agent(sdk_version: Option<&str>) -> String {
    match sdk_version {
        Some(tag) => format!(
            "PayPalSDK/{} ({}; {})",
            tag,
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        None => format!(
            "PayPalSDK/paypal-rest-rust {} ({}; {})",
            crate::VERSION,
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    value
        .parse::<HeaderValue>()
        .map_err(|e| Error::HttpClient(format!("Invalid header value '{value}': {e}")))
}

pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url> {
    if endpoint.trim().is_empty() {
        return Err(Error::InvalidUrl("endpoint cannot be empty".to_string()));
    }

    let url: Url = endpoint
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::InvalidUrl(format!(
            "Invalid URL scheme '{scheme}'. Only 'http' and 'https' are supported."
        ))),
    }
}
