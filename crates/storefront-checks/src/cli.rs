//! Shared startup for the check binaries

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CheckConfig;

/// Install logging, load `.env`, and read the configuration once.
///
/// Logging defaults to `warn` so report lines stay readable; set `RUST_LOG`
/// for scan details.
pub fn init() -> CheckConfig {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    CheckConfig::from_env()
}
