//! storefront checkout relay
//!
//! Axum server with a liveness probe and one endpoint that turns a purchase
//! request into a hosted Stripe checkout session.

mod config;
mod handlers;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_payments::{CheckoutGateway, RedirectUrls, StripeGateway};

use crate::config::ServerConfig;
use crate::routes::{build_router, cors_layer};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    let gateway: Option<Arc<dyn CheckoutGateway>> =
        match StripeGateway::from_secret(config.stripe_secret_key.as_deref()) {
            Ok(stripe) => {
                tracing::info!("✓ Stripe configured");
                Some(Arc::new(stripe))
            }
            Err(e) => {
                tracing::warn!("⚠ {} - checkout disabled", e);
                tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
                None
            }
        };

    let state = AppState {
        gateway,
        redirects: RedirectUrls::from_base(&config.client_url),
    };

    let app = build_router(state, cors_layer(&config.cors_origin)?);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server running on port {}", config.port);
    tracing::info!("  GET  /                         - Liveness probe");
    tracing::info!("  POST /create-checkout-session  - Create Stripe checkout");
    tracing::info!("  Client URL: {}", config.client_url);

    axum::serve(listener, app).await?;

    Ok(())
}
