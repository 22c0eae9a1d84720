//! Main client implementation for the PayPal REST API

use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Duration;

use http::Method;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::{Config, Mode, ResolvedConfig},
    context::{ApiContext, PreparedCall},
    error::{Error, Result},
    http::{Connector, RequestBuilder, Response},
    resources::{OAuth, Payments},
};

/// Main client for interacting with the PayPal REST API.
///
/// Holds the resolved configuration and the transport connection; cheap to
/// clone and safe for concurrent calls. All shared state is immutable after
/// construction.
///
/// # Example
///
/// ```rust,no_run
/// use paypal_rest::Client;
///
/// let client = Client::builder()
///     .client_id("my-client-id")
///     .client_secret("my-client-secret")
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// Caller overrides, kept for per-call config merging.
    overrides: Config,
    /// Fully resolved configuration.
    config: ResolvedConfig,
    /// Transport connection for the resolved endpoint.
    connector: Connector,

    // Lazy-initialized resources
    payments: OnceLock<Payments>,
    oauth: OnceLock<OAuth>,
}

impl Client {
    /// Create a client from configuration overrides.
    pub fn new(overrides: Config) -> Result<Self> {
        let config = overrides.resolve();

        // Fail fast on an unusable endpoint rather than on the first call.
        crate::context::parse_endpoint(&config.endpoint)?;

        let connector = Connector::new(&config)?;
        Ok(Self {
            inner: Arc::new(ClientInner {
                overrides,
                config,
                connector,
                payments: OnceLock::new(),
                oauth: OnceLock::new(),
            }),
        })
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from `PAYPAL_*` environment variables.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// The resolved configuration this client runs with.
    pub fn config(&self) -> &ResolvedConfig {
        &self.inner.config
    }

    /// Access the Payments API resource.
    pub fn payments(&self) -> &Payments {
        self.inner
            .payments
            .get_or_init(|| Payments::new(self.clone()))
    }

    /// Access the OAuth token endpoint.
    pub fn oauth(&self) -> &OAuth {
        self.inner.oauth.get_or_init(|| OAuth::new(self.clone()))
    }

    /// Execute a call and return the raw response.
    ///
    /// The full pipeline: merge any per-call config override, prepare the
    /// call (headers, payload, endpoint), join the resource path, execute,
    /// and translate failures. `payload` may be empty for GET/DELETE.
    pub async fn execute_raw(
        &self,
        context: &ApiContext,
        method: Method,
        resource: &str,
        payload: String,
    ) -> Result<Response> {
        match &context.config {
            None => {
                let call = PreparedCall::new(context, &self.inner.config, payload)?;
                self.send_prepared(call, method, resource, &self.inner.connector, self.inner.config.timeout)
                    .await
            }
            Some(overlay) => {
                // Per-call override: re-resolve and take a fresh connection
                // for it. Reconstruction is idempotent, so this is safe to
                // race.
                let config = self.inner.overrides.clone().merge(overlay.clone()).resolve();
                let connector = Connector::new(&config)?;
                let call = PreparedCall::new(context, &config, payload)?;
                self.send_prepared(call, method, resource, &connector, config.timeout)
                    .await
            }
        }
    }

    /// Execute a call and deserialize the response body.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        context: &ApiContext,
        method: Method,
        resource: &str,
        payload: String,
    ) -> Result<T> {
        self.execute_raw(context, method, resource, payload)
            .await?
            .json()
    }

    /// Execute a call and return the response body unchanged.
    pub async fn execute_text(
        &self,
        context: &ApiContext,
        method: Method,
        resource: &str,
        payload: String,
    ) -> Result<String> {
        Ok(self
            .execute_raw(context, method, resource, payload)
            .await?
            .into_body())
    }

    /// Execute a call and discard the response body.
    pub async fn execute_empty(
        &self,
        context: &ApiContext,
        method: Method,
        resource: &str,
        payload: String,
    ) -> Result<()> {
        self.execute_raw(context, method, resource, payload).await?;
        Ok(())
    }

    /// Send an already-prepared call through the executor. Used directly by
    /// the OAuth resource, which prepares basic-auth calls itself.
    pub(crate) async fn send_prepared(
        &self,
        call: PreparedCall,
        method: Method,
        resource: &str,
        connector: &Connector,
        timeout: Duration,
    ) -> Result<Response> {
        let url = join_resource(&call.endpoint, resource)?;
        RequestBuilder::new(method, url)
            .headers(call.headers)
            .payload(call.payload)
            .timeout(timeout)
            .send(connector)
            .await
    }

    /// The connector bound to the client's own configuration.
    pub(crate) fn connector(&self) -> &Connector {
        &self.inner.connector
    }
}

fn join_resource(base: &Url, resource: &str) -> Result<Url> {
    base.join(resource).map_err(|e| {
        Error::InvalidUrl(format!(
            "Cannot create URL; base={base}, resource={resource}: {e}"
        ))
    })
}

/// Builder for creating a configured [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    config: Config,
}

impl ClientBuilder {
    /// Set the API environment (sandbox or live).
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = Some(mode);
        self
    }

    /// Set an explicit base endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = Some(endpoint.into());
        self
    }

    /// Set the connection timeout per HTTP exchange.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the advisory retry count surfaced to callers.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.config.max_retries = Some(max_retries);
        self
    }

    /// Set an HTTP proxy URL.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Set the OAuth client id.
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config.client_id = Some(SecretString::new(client_id.into().into_boxed_str()));
        self
    }

    /// Set the OAuth client secret.
    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.config.client_secret = Some(SecretString::new(client_secret.into().into_boxed_str()));
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        Client::new(self.config)
    }
}
