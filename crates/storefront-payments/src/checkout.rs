//! Purchase Requests and Checkout Sessions
//!
//! A [`PurchaseRequest`] is whatever the landing page posted. It only becomes
//! a [`ValidatedPurchase`] once every field has been checked, and only a
//! validated purchase can reach a gateway.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// Largest unit amount (in minor units) the gateway accepts for one line item
pub const MAX_UNIT_AMOUNT: i64 = 99_999_999;

/// Placeholder the gateway substitutes with the real session id on redirect
const SESSION_ID_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// Purchase intent as submitted by the client
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    /// Display name of the product on the hosted checkout page
    pub product_name: String,

    /// Unit price in major currency units (e.g. `99.90`)
    pub price: Decimal,

    /// Number of units, defaults to 1
    #[serde(default = "default_quantity")]
    pub quantity: u64,

    /// Buyer email, prefilled on the hosted checkout page
    pub email: String,
}

const fn default_quantity() -> u64 {
    1
}

impl PurchaseRequest {
    /// Check every field and convert the price to minor units.
    pub fn validate(self) -> Result<ValidatedPurchase> {
        let product_name = self.product_name.trim();
        if product_name.is_empty() {
            return Err(PaymentError::InvalidRequest(
                "productName must not be empty".into(),
            ));
        }

        if self.price <= Decimal::ZERO {
            return Err(PaymentError::InvalidRequest(
                "price must be greater than zero".into(),
            ));
        }
        let unit_amount = to_minor_units(self.price)?;

        if self.quantity == 0 {
            return Err(PaymentError::InvalidRequest(
                "quantity must be at least 1".into(),
            ));
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(PaymentError::InvalidRequest(
                "email must be a valid address".into(),
            ));
        }

        Ok(ValidatedPurchase {
            product_name: product_name.to_string(),
            unit_amount,
            quantity: self.quantity,
            email: email.to_string(),
        })
    }
}

/// Rounds half away from zero, so `0.005` becomes one minor unit.
fn to_minor_units(price: Decimal) -> Result<i64> {
    let invalid = || PaymentError::InvalidRequest("price is out of range".into());

    let cents = price
        .checked_mul(dec!(100))
        .ok_or_else(invalid)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(invalid)?;

    if cents < 1 {
        return Err(PaymentError::InvalidRequest(
            "price is below the smallest currency unit".into(),
        ));
    }
    if cents > MAX_UNIT_AMOUNT {
        return Err(invalid());
    }
    Ok(cents)
}

/// A purchase that passed validation and may be sent to a gateway
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedPurchase {
    pub product_name: String,

    /// Unit price in minor units (cents)
    pub unit_amount: i64,

    pub quantity: u64,

    pub email: String,
}

/// Where the gateway sends the buyer afterwards
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUrls {
    pub success_url: String,
    pub cancel_url: String,
}

impl RedirectUrls {
    /// Derive both callback URLs from the client's base URL.
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            success_url: format!("{base}/success?session_id={SESSION_ID_PLACEHOLDER}"),
            cancel_url: format!("{base}/cancel"),
        }
    }
}

/// Session returned by the gateway, passed through to the client untouched
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Gateway session id
    pub id: String,

    /// Hosted checkout URL to redirect the buyer to
    pub url: String,
}
