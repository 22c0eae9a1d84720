//! OAuth2 access token response

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Access token issued by the OAuth token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    /// Token type, always `Bearer` for client-credentials grants.
    pub token_type: String,
    /// The token itself. Kept as a secret; use [`AccessToken::bearer_token`]
    /// to pass it into an [`crate::ApiContext`].
    pub access_token: SecretString,
    /// Application id the token was issued for.
    #[serde(default)]
    pub app_id: Option<String>,
    /// Seconds until the token expires.
    pub expires_in: u64,
}

impl AccessToken {
    /// The raw token value for use in an `Authorization: Bearer` header.
    pub fn bearer_token(&self) -> String {
        self.access_token.expose_secret().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_token_endpoint_response() {
        let body = r#"{"scope":"openid","access_token":"A21AAF","token_type":"Bearer","app_id":"APP-80W2","expires_in":32400}"#;
        let token: AccessToken = serde_json::from_str(body).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.bearer_token(), "A21AAF");
        assert_eq!(token.app_id.as_deref(), Some("APP-80W2"));
        assert_eq!(token.expires_in, 32400);
    }
}
