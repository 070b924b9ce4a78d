//! Application State

use std::sync::Arc;

use storefront_payments::{CheckoutGateway, RedirectUrls};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout gateway (optional - None if no secret key is configured)
    pub gateway: Option<Arc<dyn CheckoutGateway>>,

    /// Success/cancel callbacks derived from the client URL
    pub redirects: RedirectUrls,
}
