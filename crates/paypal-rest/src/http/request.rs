//! HTTP request executor

use std::time::Duration;

use http::{header, HeaderMap, HeaderValue, Method};
use tracing::debug;
use url::Url;

use super::{Connector, Response};
use crate::error::{translate, Error, HttpFailure, Result};

/// Builder for one HTTP exchange.
///
/// Performs the single send for a call: fills the default content type,
/// sanitizes the user agent, logs outgoing headers, writes the payload, and
/// reads the full response body as text. Failure statuses come back as
/// translated errors; the executor never retries on its own.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    method: Method,
    url: Url,
    headers: HeaderMap,
    payload: String,
    timeout: Option<Duration>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            payload: String::new(),
            timeout: None,
        }
    }

    /// Replace the header map wholesale.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set the request payload. Empty means no body is written, which is
    /// the norm for GET and DELETE.
    pub fn payload(mut self, payload: String) -> Self {
        self.payload = payload;
        self
    }

    /// Override the connector's timeout for this request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Execute the exchange and return the response.
    ///
    /// # Errors
    ///
    /// - [`Error::Connection`] for transport failures before a response
    /// - [`Error::Timeout`] when the configured timeout elapses
    /// - [`Error::Http`] or a domain variant for failure status codes
    pub async fn send(mut self, connector: &Connector) -> Result<Response> {
        if !self.headers.contains_key(header::CONTENT_TYPE) {
            self.headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }

        if let Some(agent) = self.headers.remove(header::USER_AGENT) {
            self.headers
                .insert(header::USER_AGENT, sanitize_user_agent(&agent));
        }

        for (name, value) in &self.headers {
            debug!("{}: {}", name, value.to_str().unwrap_or("<opaque>"));
        }

        let mut request = connector
            .client()
            .request(self.method.clone(), self.url.as_str())
            .headers(self.headers);

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }
        if !self.payload.is_empty() {
            request = request.body(self.payload);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.timeout.unwrap_or(Duration::ZERO))
            } else {
                Error::Connection(e.to_string())
            }
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        if status.is_client_error() || status.is_server_error() {
            return Err(translate(HttpFailure::new(status, body, headers)));
        }

        Ok(Response::new(status, headers, body))
    }
}

/// Restrict a user-agent value to single-byte (ISO-8859-1) characters.
///
/// Non-encodable characters are dropped rather than failing the request.
/// Control bytes are dropped too, keeping the result a valid header value.
fn sanitize_user_agent(value: &HeaderValue) -> HeaderValue {
    let bytes: Vec<u8> = String::from_utf8_lossy(value.as_bytes())
        .chars()
        .filter(|c| ('\u{20}'..='\u{ff}').contains(c) && *c != '\u{7f}')
        .map(|c| c as u8)
        .collect();

    // The filter above only admits valid header value bytes.
    HeaderValue::from_bytes(&bytes).unwrap_or_else(|_| HeaderValue::from_static(""))
}
