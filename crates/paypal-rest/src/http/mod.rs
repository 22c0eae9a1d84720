//! HTTP layer: connection acquisition, request execution, response mapping

pub use connector::Connector;
pub use request::RequestBuilder;
pub use response::Response;

mod connector;
mod request;
mod response;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
