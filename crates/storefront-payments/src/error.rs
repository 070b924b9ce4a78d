//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Gateway call failed or returned an unusable session
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Purchase request rejected before any outbound call
    #[error("Invalid purchase request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Whether the caller sent something we refused to forward
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Message returned to HTTP callers.
    ///
    /// Gateway errors are passed through verbatim; the relay adds nothing
    /// the gateway did not say.
    pub fn user_message(&self) -> String {
        match self {
            Self::Stripe(msg) | Self::InvalidRequest(msg) => msg.clone(),
            Self::Config(_) => "Stripe not configured on server (check .env).".into(),
        }
    }
}
