//! Common test utilities and helpers

use paypal_rest::{Amount, Client, Payer, Payment, Transaction};

/// A test bearer token
#[allow(dead_code)]
pub fn test_access_token() -> String {
    "A21AAFtest0123456789".to_string()
}

/// Build a client pointed at a mock server
#[allow(dead_code)]
pub fn test_client(endpoint: &str) -> Client {
    Client::builder()
        .endpoint(endpoint)
        .client_id("test-client-id")
        .client_secret("test-client-secret")
        .build()
        .expect("Failed to build client")
}

/// A minimal valid payment draft
#[allow(dead_code)]
pub fn sale_draft() -> Payment {
    Payment {
        intent: Some("sale".to_string()),
        payer: Some(Payer {
            payment_method: "paypal".to_string(),
        }),
        transactions: vec![Transaction {
            amount: Amount {
                total: "12.99".to_string(),
                currency: "USD".to_string(),
            },
            description: Some("test sale".to_string()),
        }],
        ..Payment::default()
    }
}
