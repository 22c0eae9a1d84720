//! Payments API data carriers
//!
//! The same `Payment` shape is used for create requests and for responses;
//! server-assigned fields are optional and skipped when unset.

use serde::{Deserialize, Serialize};

/// A payment resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Server-assigned payment identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Payment intent, e.g. `sale`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    /// Server-assigned payment state, e.g. `created`, `approved`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Source of the funds for this payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<Payer>,
    /// Transactional details for the payment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,
}

impl Payment {
    /// Start a payment draft with the given intent.
    pub fn with_intent(intent: impl Into<String>) -> Self {
        Self {
            intent: Some(intent.into()),
            ..Self::default()
        }
    }
}

/// The payer funding a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payer {
    /// Payment method, e.g. `paypal` or `credit_card`.
    pub payment_method: String,
}

/// One transaction inside a payment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount being collected.
    pub amount: Amount,
    /// Free-text description shown to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A currency amount. Totals are decimal strings, as the API requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Total charged, e.g. `"12.99"`.
    pub total: String,
    /// Three-letter currency code, e.g. `"USD"`.
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn draft_skips_unset_fields() {
        let draft = Payment {
            intent: Some("sale".to_string()),
            payer: Some(Payer {
                payment_method: "paypal".to_string(),
            }),
            transactions: vec![Transaction {
                amount: Amount {
                    total: "12.99".to_string(),
                    currency: "USD".to_string(),
                },
                description: None,
            }],
            ..Payment::default()
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "intent": "sale",
                "payer": {"payment_method": "paypal"},
                "transactions": [{"amount": {"total": "12.99", "currency": "USD"}}],
            })
        );
    }

    #[test]
    fn response_round_trips() {
        let body = r#"{"id":"PAY-123","intent":"sale","state":"created"}"#;
        let payment: Payment = serde_json::from_str(body).unwrap();
        assert_eq!(payment.id.as_deref(), Some("PAY-123"));

        let echoed: Payment =
            serde_json::from_str(&serde_json::to_string(&payment).unwrap()).unwrap();
        assert_eq!(echoed, payment);
    }
}
