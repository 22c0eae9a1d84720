//! Transport connection acquisition

use crate::{
    config::ResolvedConfig,
    error::{Error, Result},
};

/// A ready-to-use transport connection for one endpoint configuration.
///
/// Wraps a `reqwest::Client` built with the configured timeout, proxy, and
/// TLS verification enabled by default. reqwest pools connections
/// internally as an optimization; a fresh `Connector` built from the same
/// config is always valid, so reuse is never a correctness requirement.
#[derive(Debug, Clone)]
pub struct Connector {
    client: reqwest::Client,
}

impl Connector {
    /// Build a connector from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the proxy URL is invalid or the
    /// underlying client cannot be constructed.
    pub fn new(config: &ResolvedConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::HttpClient(format!("Invalid proxy '{proxy}': {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }

    /// The underlying HTTP client.
    pub(crate) fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
