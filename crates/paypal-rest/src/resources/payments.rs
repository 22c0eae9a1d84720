//! Payments API endpoint

use http::Method;
use tracing::{debug, warn};

use crate::{client::Client, context::ApiContext, error::Result, types::Payment};

/// Payments API resource.
#[derive(Clone)]
pub struct Payments {
    client: Client,
}

impl Payments {
    /// Create a new Payments resource.
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a payment.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use paypal_rest::{ApiContext, Client, Amount, Payer, Payment, Transaction};
    /// # async fn example(client: Client, context: ApiContext) -> Result<(), Box<dyn std::error::Error>> {
    /// let draft = Payment {
    ///     intent: Some("sale".to_string()),
    ///     payer: Some(Payer { payment_method: "paypal".to_string() }),
    ///     transactions: vec![Transaction {
    ///         amount: Amount { total: "12.99".to_string(), currency: "USD".to_string() },
    ///         description: None,
    ///     }],
    ///     ..Payment::default()
    /// };
    ///
    /// let payment = client.payments().create(&context, &draft).await?;
    /// println!("created {}", payment.id.as_deref().unwrap_or("?"));
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, context, draft), fields(request_id = %context.request_id))]
    pub async fn create(&self, context: &ApiContext, draft: &Payment) -> Result<Payment> {
        let payload = serde_json::to_string(draft)?;
        debug!("creating payment");

        let result: Result<Payment> = self
            .client
            .execute(context, Method::POST, "/v1/payments/payment", payload)
            .await;

        match &result {
            Ok(payment) => debug!(id = payment.id.as_deref(), "payment created"),
            Err(e) => warn!(error = %e, "payment creation failed"),
        }
        result
    }

    /// Look up a payment by id.
    #[tracing::instrument(skip(self, context), fields(request_id = %context.request_id))]
    pub async fn get(&self, context: &ApiContext, payment_id: &str) -> Result<Payment> {
        self.client
            .execute(
                context,
                Method::GET,
                &format!("/v1/payments/payment/{payment_id}"),
                String::new(),
            )
            .await
    }
}
