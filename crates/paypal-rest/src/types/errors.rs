//! Structured error bodies per API domain
//!
//! The Payments and Identity APIs report failures with different field
//! names but the same semantics: a short name, a description, a
//! documentation link, and an optional detail list.

use serde::{Deserialize, Serialize};

/// Error body returned by the Payments API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentsError {
    /// Machine-readable error name, e.g. `VALIDATION_ERROR`.
    pub name: String,
    /// Human-readable description of the failure.
    pub message: String,
    /// Link to documentation about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_link: Option<String>,
    /// PayPal-internal identifier for the failed request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_id: Option<String>,
    /// Field-level validation details.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

/// One field-level issue inside a [`PaymentsError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// The request field the issue refers to.
    pub field: String,
    /// Description of the issue with that field.
    pub issue: String,
}

/// Error body returned by the Identity API (OAuth token endpoint).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityError {
    /// Machine-readable error name, e.g. `invalid_client`.
    pub error: String,
    /// Human-readable description of the failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    /// Link to documentation about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payments_error_requires_name_and_message() {
        // A body missing the required fields must not be mistaken for a
        // payments error.
        assert!(serde_json::from_str::<PaymentsError>(r#"{"error":"invalid_client"}"#).is_err());
        assert!(serde_json::from_str::<PaymentsError>(r#"{"name":"X"}"#).is_err());
    }

    #[test]
    fn payments_error_detail_list_defaults_to_empty() {
        let parsed: PaymentsError =
            serde_json::from_str(r#"{"name":"VALIDATION_ERROR","message":"Invalid request"}"#)
                .unwrap();
        assert!(parsed.details.is_empty());
        assert_eq!(parsed.information_link, None);
    }

    #[test]
    fn identity_error_tolerates_missing_optional_fields() {
        let parsed: IdentityError =
            serde_json::from_str(r#"{"error":"invalid_client"}"#).unwrap();
        assert_eq!(parsed.error, "invalid_client");
        assert_eq!(parsed.error_description, None);
        assert_eq!(parsed.error_uri, None);
    }
}
