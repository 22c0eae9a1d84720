//! Error types for the PayPal SDK
//!
//! This module provides the crate-wide error enum plus the translation step
//! that upgrades generic HTTP failures into domain-specific errors when the
//! response body matches a known error schema.

use std::time::Duration;

use http::{HeaderMap, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::types::{IdentityError, PaymentsError};

/// Result type alias for operations that can fail with a PayPal SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the PayPal SDK.
///
/// Callers match on the variant instead of relying on an exception
/// hierarchy: domain failures carry both the structured error body and the
/// underlying [`HttpFailure`], so generic handlers still see status, raw
/// body, and headers through [`Error::http_failure`].
#[derive(Debug, Error)]
pub enum Error {
    /// A response was received with a failure status code and its body did
    /// not match any known domain error schema.
    #[error("HTTP error (status {})", .0.status)]
    Http(HttpFailure),

    /// A Payments API failure parsed from a 400 response body.
    #[error("Payments API error: {}: {}", .details.name, .details.message)]
    Payments {
        /// The originating HTTP failure.
        failure: HttpFailure,
        /// Parsed details of the Payments error.
        details: PaymentsError,
    },

    /// An Identity API failure parsed from an OAuth token endpoint response.
    #[error("Identity API error: {}", .details.error)]
    Identity {
        /// The originating HTTP failure.
        failure: HttpFailure,
        /// Parsed details of the Identity error.
        details: IdentityError,
    },

    /// Network-level failure before any response was received (DNS, TLS,
    /// connect). Carries no status code.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request exceeded the configured timeout.
    #[error("Request timeout after {0:?}")]
    Timeout(Duration),

    /// Missing required configuration (e.g. absent credentials). Fails
    /// before any network call.
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    /// Invalid endpoint or resource URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization or deserialization failure. Fatal for the call, never
    /// retried.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP client configuration or initialization error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Other errors not covered by specific variants.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A received HTTP response with a failure status code.
///
/// Base diagnostic data for every domain error: status, raw body text, and
/// response headers.
#[derive(Debug, Clone)]
pub struct HttpFailure {
    /// HTTP status code of the failed response.
    pub status: StatusCode,
    /// Raw response body text, possibly empty.
    pub body: String,
    /// Response headers.
    pub headers: HeaderMap,
}

impl HttpFailure {
    /// Create a failure from the raw pieces of a response.
    pub fn new(status: StatusCode, body: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            status,
            body: body.into(),
            headers,
        }
    }
}

/// Returns true if a resend is considered safe for this status code.
///
/// The set is fixed: 408 Request Timeout, 500 Internal Server Error,
/// 502 Bad Gateway, 503 Service Unavailable. 429 is deliberately not
/// included. Classification only: the SDK never loops retries itself.
pub fn is_retry_eligible(status: StatusCode) -> bool {
    matches!(status.as_u16(), 408 | 500 | 502 | 503)
}

/// Translate a received HTTP failure into the SDK error for it.
///
/// A 400 whose body parses as a Payments error becomes [`Error::Payments`],
/// superseding the generic failure. Any parse failure degrades silently to
/// [`Error::Http`] carrying the raw body.
pub(crate) fn translate(failure: HttpFailure) -> Error {
    if failure.status == StatusCode::BAD_REQUEST {
        if let Ok(details) = serde_json::from_str::<PaymentsError>(&failure.body) {
            debug!(
                name = %details.name,
                message = %details.message,
                "translated 400 response into payments error"
            );
            return Error::Payments { failure, details };
        }
    }
    Error::Http(failure)
}

impl Error {
    /// Base HTTP failure data, available from the generic variant and every
    /// domain variant alike.
    pub fn http_failure(&self) -> Option<&HttpFailure> {
        match self {
            Error::Http(failure)
            | Error::Payments { failure, .. }
            | Error::Identity { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// HTTP status code, when a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        self.http_failure().map(|f| f.status)
    }

    /// Check whether a caller may sensibly resend the request.
    ///
    /// True only for HTTP failures whose status is in the fixed
    /// retry-eligible set; always false for transport, configuration, and
    /// serialization failures.
    pub fn is_retry_eligible(&self) -> bool {
        self.status().is_some_and(is_retry_eligible)
    }

    /// Short machine-readable error name from the domain error body, if any.
    pub fn error_name(&self) -> Option<&str> {
        match self {
            Error::Payments { details, .. } => Some(&details.name),
            Error::Identity { details, .. } => Some(&details.error),
            _ => None,
        }
    }

    /// Human-readable error description from the domain error body, if any.
    pub fn error_description(&self) -> Option<&str> {
        match self {
            Error::Payments { details, .. } => Some(&details.message),
            Error::Identity { details, .. } => details.error_description.as_deref(),
            _ => None,
        }
    }

    /// Link to documentation for the error, if the domain body carried one.
    pub fn help_link(&self) -> Option<&str> {
        match self {
            Error::Payments { details, .. } => details.information_link.as_deref(),
            Error::Identity { details, .. } => details.error_uri.as_deref(),
            _ => None,
        }
    }

    /// Upgrade a generic HTTP failure into an identity error when its body
    /// matches the identity schema.
    ///
    /// Used at the OAuth token endpoint, where failure bodies follow the
    /// `error`/`error_description`/`error_uri` shape regardless of status
    /// code. Never fails: a body that does not parse leaves the error
    /// untouched.
    pub(crate) fn into_identity(self) -> Error {
        match self {
            Error::Http(failure) => {
                match serde_json::from_str::<IdentityError>(&failure.body) {
                    Ok(details) => {
                        debug!(
                            "identity error\n   Error:   {}\n   Message: {}\n   URI:     {}",
                            details.error,
                            details.error_description.as_deref().unwrap_or(""),
                            details.error_uri.as_deref().unwrap_or(""),
                        );
                        Error::Identity { failure, details }
                    }
                    Err(_) => Error::Http(failure),
                }
            }
            other => other,
        }
    }
}
