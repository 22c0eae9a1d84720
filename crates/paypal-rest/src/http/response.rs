//! HTTP response and result-shape mapping

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::Result;

/// A successful HTTP response with its body read as text.
///
/// Callers pick the result shape explicitly: discard it, take the raw text
/// via [`Response::text`] or [`Response::into_body`], or deserialize a
/// structured value via [`Response::json`].
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl Response {
    /// Create a response from its raw pieces.
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: String) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body text, unchanged.
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Consume the response, returning the raw body.
    pub fn into_body(self) -> String {
        self.body
    }

    /// Deserialize the body into a structured value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] when the body does not match
    /// the expected shape. Fatal for the call; never retried.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
