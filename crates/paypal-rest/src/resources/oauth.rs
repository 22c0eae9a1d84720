//! OAuth token endpoint
//!
//! Client-credentials token acquisition with basic authorization. Failures
//! from this endpoint carry identity-shaped error bodies, so the generic
//! HTTP failure is upgraded to [`crate::Error::Identity`] here.

use http::Method;
use tracing::{debug, warn};

use crate::{client::Client, error::Result, types::AccessToken};

/// OAuth API resource.
#[derive(Clone)]
pub struct OAuth {
    client: Client,
}

impl OAuth {
    /// Create a new OAuth resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Request an access token with the client-credentials grant.
    ///
    /// Requires `client_id` and `client_secret` in the configuration; their
    /// absence fails before any network call.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use paypal_rest::Client;
    /// # async fn example(client: Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let token = client.oauth().request_access_token().await?;
    /// println!("expires in {}s", token.expires_in);
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self))]
    pub async fn request_access_token(&self) -> Result<AccessToken> {
        let config = self.client.config();
        let call = crate::context::PreparedCall::with_basic_auth(
            config,
            "grant_type=client_credentials".to_string(),
        )?;

        debug!("requesting access token");
        let response = self
            .client
            .send_prepared(
                call,
                Method::POST,
                "/v1/oauth2/token",
                self.client.connector(),
                config.timeout,
            )
            .await
            .map_err(|e| {
                let e = e.into_identity();
                warn!(error = %e, "token request failed");
                e
            })?;

        response.json()
    }
}
