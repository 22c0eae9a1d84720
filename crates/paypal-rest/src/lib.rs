//! # paypal-rest
//!
//! Rust SDK for the PayPal REST API supporting:
//! - OAuth2 client-credentials token acquisition
//! - Payments API (create/get)
//! - Typed per-domain error translation (payments, identity)
//! - Retry-eligibility classification for transient HTTP failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paypal_rest::{ApiContext, Client, Payment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .client_id("my-client-id")
//!         .client_secret("my-client-secret")
//!         .build()?;
//!
//!     let token = client.oauth().request_access_token().await?;
//!     let context = ApiContext::new(token.bearer_token());
//!
//!     let payment = client
//!         .payments()
//!         .get(&context, "PAY-123")
//!         .await?;
//!     println!("{:?}", payment.state);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{Config, Mode, ResolvedConfig};
pub use context::ApiContext;
pub use error::{is_retry_eligible, Error, HttpFailure, Result};
pub use http::Response;
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use paypal_rest::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        types::{AccessToken, IdentityError, Payment, PaymentsError},
        ApiContext, Client, Config, Error, Mode, Result,
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Base endpoint for live-mode API calls
pub const LIVE_ENDPOINT: &str = "https://api.paypal.com";

/// Base endpoint for sandbox-mode API calls
pub const SANDBOX_ENDPOINT: &str = "https://api.sandbox.paypal.com";
