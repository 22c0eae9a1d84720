//! API resource endpoints
//!
//! One module per API area; each resource borrows the client and drives
//! the request pipeline for its endpoints.

pub mod oauth;
pub mod payments;

pub use oauth::OAuth;
pub use payments::Payments;
