//! # storefront-payments
//!
//! Purchase validation and hosted checkout sessions for the storefront relay.
//!
//! ## Flow
//!
//! ```text
//! ┌──────────────┐  PurchaseRequest  ┌──────────────┐  1 call  ┌──────────────┐
//! │ Landing page │──────────────────▶│    Relay     │─────────▶│   Gateway    │
//! │  (checkout)  │◀──────────────────│  (validate)  │◀─────────│ (hosted page)│
//! └──────────────┘   { id, url }     └──────────────┘          └──────────────┘
//! ```
//!
//! The relay never stores anything. A request is validated into a
//! [`ValidatedPurchase`] before any outbound call, then handed to a
//! [`CheckoutGateway`] which returns the gateway's session id and hosted URL
//! unchanged. There is no retry and no idempotency key: two identical
//! requests create two sessions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_payments::{CheckoutGateway, PurchaseRequest, RedirectUrls, StripeGateway};
//!
//! let gateway = StripeGateway::new("sk_test_xxx");
//! let urls = RedirectUrls::from_base("http://localhost:5173");
//!
//! let purchase = request.validate()?;
//! let session = gateway.create_session(&purchase, &urls).await?;
//!
//! // Redirect the buyer to: session.url
//! ```

mod checkout;
mod error;
mod gateway;
mod mock;

pub use checkout::{
    CheckoutSession, MAX_UNIT_AMOUNT, PurchaseRequest, RedirectUrls, ValidatedPurchase,
};
pub use error::{PaymentError, Result};
pub use gateway::{CHECKOUT_CURRENCY, CheckoutGateway, StripeGateway};
pub use mock::MockGateway;
