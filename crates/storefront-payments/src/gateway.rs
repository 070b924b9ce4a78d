//! Checkout Gateways
//!
//! The relay talks to a payment provider through [`CheckoutGateway`].
//! [`StripeGateway`] creates real hosted checkout sessions.

use async_trait::async_trait;
use stripe::{
    CheckoutSession as StripeCheckoutSession, CheckoutSessionMode, Client,
    CreateCheckoutSession, CreateCheckoutSessionLineItems,
    CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData,
    CreateCheckoutSessionPaymentMethodTypes, Currency,
};

use crate::checkout::{CheckoutSession, RedirectUrls, ValidatedPurchase};
use crate::error::{PaymentError, Result};

/// Every session is denominated in this currency
pub const CHECKOUT_CURRENCY: Currency = Currency::BRL;

/// Hosted checkout provider (Strategy pattern)
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Create one hosted checkout session. Exactly one outbound call, no retry.
    async fn create_session(
        &self,
        purchase: &ValidatedPurchase,
        urls: &RedirectUrls,
    ) -> Result<CheckoutSession>;

    /// Gateway name
    fn name(&self) -> &str;
}

/// Stripe client wrapper
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    /// Create a new Stripe gateway
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Build a gateway from an optional secret key.
    ///
    /// A blank key counts as missing.
    pub fn from_secret(secret_key: Option<&str>) -> Result<Self> {
        match secret_key.map(str::trim) {
            Some(key) if !key.is_empty() => Ok(Self::new(key)),
            _ => Err(PaymentError::Config("STRIPE_SECRET_KEY not set".into())),
        }
    }
}

#[async_trait]
impl CheckoutGateway for StripeGateway {
    async fn create_session(
        &self,
        purchase: &ValidatedPurchase,
        urls: &RedirectUrls,
    ) -> Result<CheckoutSession> {
        let mut params = CreateCheckoutSession::new();
        params.mode = Some(CheckoutSessionMode::Payment);
        params.payment_method_types = Some(vec![CreateCheckoutSessionPaymentMethodTypes::Card]);
        params.customer_email = Some(&purchase.email);
        params.success_url = Some(&urls.success_url);
        params.cancel_url = Some(&urls.cancel_url);

        params.line_items = Some(vec![CreateCheckoutSessionLineItems {
            quantity: Some(purchase.quantity),
            price_data: Some(CreateCheckoutSessionLineItemsPriceData {
                currency: CHECKOUT_CURRENCY,
                unit_amount: Some(purchase.unit_amount),
                product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                    name: purchase.product_name.clone(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        }]);

        let session = StripeCheckoutSession::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Stripe(e.to_string()))?;

        let url = session
            .url
            .ok_or_else(|| PaymentError::Stripe("No checkout URL returned".into()))?;

        tracing::info!(session_id = %session.id, "Created checkout session");

        Ok(CheckoutSession {
            id: session.id.to_string(),
            url,
        })
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_secret_is_missing() {
        assert!(matches!(
            StripeGateway::from_secret(None),
            Err(PaymentError::Config(_))
        ));
        assert!(StripeGateway::from_secret(Some("  ")).is_err());
    }

    #[test]
    fn test_secret_builds_gateway() {
        let gateway = StripeGateway::from_secret(Some("sk_test_123")).unwrap();
        assert_eq!(gateway.name(), "Stripe");
    }
}
