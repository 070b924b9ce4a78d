//! In-memory checkout gateway
//!
//! Issues fake sessions without touching the network. Records every
//! purchase it receives so callers can assert on outbound traffic.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::checkout::{CheckoutSession, RedirectUrls, ValidatedPurchase};
use crate::error::{PaymentError, Result};
use crate::gateway::CheckoutGateway;

/// Mock gateway
#[derive(Default)]
pub struct MockGateway {
    calls: Mutex<Vec<ValidatedPurchase>>,
    failure: Option<String>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::default(),
            failure: Some(message.into()),
        }
    }

    /// Purchases received so far, in order
    pub async fn calls(&self) -> Vec<ValidatedPurchase> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl CheckoutGateway for MockGateway {
    async fn create_session(
        &self,
        purchase: &ValidatedPurchase,
        _urls: &RedirectUrls,
    ) -> Result<CheckoutSession> {
        self.calls.lock().await.push(purchase.clone());

        if let Some(ref message) = self.failure {
            return Err(PaymentError::Stripe(message.clone()));
        }

        let id = format!("cs_test_{}", uuid::Uuid::new_v4().simple());
        let url = format!("https://checkout.stripe.com/c/pay/{id}");
        Ok(CheckoutSession { id, url })
    }

    fn name(&self) -> &str {
        "MockGateway"
    }
}
