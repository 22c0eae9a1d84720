//! Data types for requests, responses, and domain error bodies

mod errors;
mod payment;
mod token;

pub use errors::{ErrorDetail, IdentityError, PaymentsError};
pub use payment::{Amount, Payer, Payment, Transaction};
pub use token::AccessToken;
