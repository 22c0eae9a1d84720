//! Configuration for the PayPal client
//!
//! Callers supply a [`Config`] of overrides; [`Config::resolve`] merges in
//! defaults for every recognized setting and produces an immutable
//! [`ResolvedConfig`] that is threaded through call arguments. There is no
//! process-wide configuration singleton.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::{LIVE_ENDPOINT, SANDBOX_ENDPOINT};

/// API environment selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Sandbox environment (`api.sandbox.paypal.com`). The default.
    #[default]
    Sandbox,
    /// Live environment (`api.paypal.com`).
    Live,
}

impl Mode {
    /// Base endpoint URL for this mode.
    pub fn base_url(&self) -> &'static str {
        match self {
            Mode::Sandbox => SANDBOX_ENDPOINT,
            Mode::Live => LIVE_ENDPOINT,
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Mode::Sandbox),
            "live" => Ok(Mode::Live),
            other => Err(crate::Error::MissingConfig(format!(
                "invalid mode '{other}': expected 'sandbox' or 'live'"
            ))),
        }
    }
}

/// Caller-supplied configuration overrides.
///
/// Every field is optional; unset fields fall back to defaults during
/// [`Config::resolve`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API environment (sandbox or live).
    pub mode: Option<Mode>,
    /// Explicit base endpoint URL, overriding the mode's default.
    pub endpoint: Option<String>,
    /// Connection timeout for each HTTP exchange.
    pub timeout: Option<Duration>,
    /// Advisory retry count for callers acting on retry-eligible failures.
    pub max_retries: Option<u32>,
    /// HTTP proxy URL.
    pub proxy: Option<String>,
    /// OAuth client id.
    pub client_id: Option<SecretString>,
    /// OAuth client secret.
    pub client_secret: Option<SecretString>,
}

impl Config {
    /// Create a configuration with client credentials.
    pub fn with_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            client_id: Some(SecretString::new(client_id.into().into_boxed_str())),
            client_secret: Some(SecretString::new(client_secret.into().into_boxed_str())),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `PAYPAL_CLIENT_ID` / `PAYPAL_CLIENT_SECRET` for credentials
    /// - `PAYPAL_MODE` (`sandbox` or `live`)
    /// - `PAYPAL_ENDPOINT` for an explicit base URL
    /// - `PAYPAL_TIMEOUT` for the request timeout (in seconds)
    /// - `PAYPAL_MAX_RETRIES` for the advisory retry count
    /// - `PAYPAL_PROXY` for an HTTP proxy
    #[cfg(feature = "env")]
    pub fn from_env() -> crate::Result<Self> {
        use std::env;

        let mut config = Self::default();

        if let Ok(client_id) = env::var("PAYPAL_CLIENT_ID") {
            config.client_id = Some(SecretString::new(client_id.into_boxed_str()));
        }
        if let Ok(client_secret) = env::var("PAYPAL_CLIENT_SECRET") {
            config.client_secret = Some(SecretString::new(client_secret.into_boxed_str()));
        }
        if let Ok(mode) = env::var("PAYPAL_MODE") {
            config.mode = Some(mode.parse()?);
        }
        if let Ok(endpoint) = env::var("PAYPAL_ENDPOINT") {
            config.endpoint = Some(endpoint);
        }
        if let Ok(timeout_str) = env::var("PAYPAL_TIMEOUT") {
            if let Ok(timeout_secs) = timeout_str.parse::<u64>() {
                config.timeout = Some(Duration::from_secs(timeout_secs));
            }
        }
        if let Ok(max_retries_str) = env::var("PAYPAL_MAX_RETRIES") {
            if let Ok(max_retries) = max_retries_str.parse::<u32>() {
                config.max_retries = Some(max_retries);
            }
        }
        if let Ok(proxy) = env::var("PAYPAL_PROXY") {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking
    /// precedence for every field it sets.
    pub fn merge(mut self, other: Config) -> Self {
        if other.mode.is_some() {
            self.mode = other.mode;
        }
        if other.endpoint.is_some() {
            self.endpoint = other.endpoint;
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        if other.max_retries.is_some() {
            self.max_retries = other.max_retries;
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }
        if other.client_id.is_some() {
            self.client_id = other.client_id;
        }
        if other.client_secret.is_some() {
            self.client_secret = other.client_secret;
        }
        self
    }

    /// Fill defaults for every recognized setting.
    ///
    /// Never produces a partial result. Credentials stay optional here;
    /// flows that require authentication check them via
    /// [`ResolvedConfig::credentials`] before any network call.
    pub fn resolve(&self) -> ResolvedConfig {
        let mode = self.mode.unwrap_or_default();
        ResolvedConfig {
            mode,
            endpoint: self
                .endpoint
                .clone()
                .unwrap_or_else(|| mode.base_url().to_string()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            proxy: self.proxy.clone(),
            client_id: self.client_id.clone(),
            client_secret: self.client_secret.clone(),
        }
    }
}

/// Default connection timeout per HTTP exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(360);

/// Default advisory retry count.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Fully merged configuration with defaults filled for every setting.
///
/// Immutable after construction; safe to share across concurrent calls.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// API environment.
    pub mode: Mode,
    /// Base endpoint URL.
    pub endpoint: String,
    /// Connection timeout per HTTP exchange.
    pub timeout: Duration,
    /// Advisory retry count for callers.
    pub max_retries: u32,
    /// HTTP proxy URL, if any.
    pub proxy: Option<String>,
    /// OAuth client id, if provided.
    pub client_id: Option<SecretString>,
    /// OAuth client secret, if provided.
    pub client_secret: Option<SecretString>,
}

impl ResolvedConfig {
    /// Client credentials, required for the OAuth token flow.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MissingConfig`] when either credential is
    /// absent. This fails before any network call is made.
    pub fn credentials(&self) -> crate::Result<(&SecretString, &SecretString)> {
        let client_id = self
            .client_id
            .as_ref()
            .ok_or_else(|| crate::Error::MissingConfig("client_id".to_string()))?;
        let client_secret = self
            .client_secret
            .as_ref()
            .ok_or_else(|| crate::Error::MissingConfig("client_secret".to_string()))?;
        Ok((client_id, client_secret))
    }
}

impl PartialEq for ResolvedConfig {
    fn eq(&self, other: &Self) -> bool {
        fn secret_eq(a: &Option<SecretString>, b: &Option<SecretString>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => a.expose_secret() == b.expose_secret(),
                (None, None) => true,
                _ => false,
            }
        }

        self.mode == other.mode
            && self.endpoint == other.endpoint
            && self.timeout == other.timeout
            && self.max_retries == other.max_retries
            && self.proxy == other.proxy
            && secret_eq(&self.client_id, &other.client_id)
            && secret_eq(&self.client_secret, &other.client_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_fills_every_default() {
        let resolved = Config::default().resolve();
        assert_eq!(resolved.mode, Mode::Sandbox);
        assert_eq!(resolved.endpoint, SANDBOX_ENDPOINT);
        assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
        assert_eq!(resolved.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(resolved.proxy, None);
    }

    #[test]
    fn live_mode_selects_live_endpoint() {
        let resolved = Config {
            mode: Some(Mode::Live),
            ..Config::default()
        }
        .resolve();
        assert_eq!(resolved.endpoint, LIVE_ENDPOINT);
    }

    #[test]
    fn explicit_endpoint_overrides_mode() {
        let resolved = Config {
            mode: Some(Mode::Live),
            endpoint: Some("https://localhost:8443".to_string()),
            ..Config::default()
        }
        .resolve();
        assert_eq!(resolved.endpoint, "https://localhost:8443");
    }

    #[test]
    fn resolve_is_idempotent() {
        let config = Config {
            mode: Some(Mode::Live),
            timeout: Some(Duration::from_secs(15)),
            client_id: Some(SecretString::new("id".into())),
            client_secret: Some(SecretString::new("secret".into())),
            ..Config::default()
        };

        assert_eq!(config.resolve(), config.resolve());
    }

    #[test]
    fn merge_prefers_other_set_fields() {
        let base = Config {
            mode: Some(Mode::Live),
            timeout: Some(Duration::from_secs(30)),
            proxy: Some("http://proxy1".to_string()),
            ..Config::default()
        };
        let overlay = Config {
            timeout: Some(Duration::from_secs(60)),
            max_retries: Some(5),
            ..Config::default()
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.mode, Some(Mode::Live));
        assert_eq!(merged.timeout, Some(Duration::from_secs(60)));
        assert_eq!(merged.max_retries, Some(5));
        // other's None must not clear an existing value
        assert_eq!(merged.proxy, Some("http://proxy1".to_string()));
    }

    #[test]
    fn credentials_missing_is_a_configuration_failure() {
        let resolved = Config::default().resolve();
        let err = resolved.credentials().unwrap_err();
        assert!(matches!(err, crate::Error::MissingConfig(ref key) if key == "client_id"));
    }

    #[test]
    fn mode_parses_case_insensitively() {
        assert_eq!("SANDBOX".parse::<Mode>().unwrap(), Mode::Sandbox);
        assert_eq!("live".parse::<Mode>().unwrap(), Mode::Live);
    }

    #[test]
    fn unrecognized_mode_reports_the_invalid_value() {
        let err = "staging".parse::<Mode>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid mode 'staging'"), "{message}");
    }

    #[cfg(feature = "env")]
    #[test]
    fn config_from_env_variables() {
        temp_env::with_vars(
            [
                ("PAYPAL_CLIENT_ID", Some("env-id".to_string())),
                ("PAYPAL_CLIENT_SECRET", Some("env-secret".to_string())),
                ("PAYPAL_MODE", Some("live".to_string())),
                ("PAYPAL_TIMEOUT", Some("120".to_string())),
                ("PAYPAL_MAX_RETRIES", Some("5".to_string())),
                ("PAYPAL_PROXY", Some("http://proxy-env".to_string())),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.mode, Some(Mode::Live));
                assert_eq!(config.timeout, Some(Duration::from_secs(120)));
                assert_eq!(config.max_retries, Some(5));
                assert_eq!(config.proxy, Some("http://proxy-env".to_string()));

                let resolved = config.resolve();
                let (id, secret) = resolved.credentials().unwrap();
                assert_eq!(id.expose_secret(), "env-id");
                assert_eq!(secret.expose_secret(), "env-secret");
            },
        );
    }
}
