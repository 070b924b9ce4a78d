//! HTTP Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;

use storefront_payments::{CheckoutSession, PaymentError, PurchaseRequest};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Create a hosted checkout session and return it verbatim
pub async fn create_checkout_session(
    State(state): State<AppState>,
    payload: Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<Json<CheckoutSession>, ApiError> {
    let gateway = state.gateway.as_ref().ok_or_else(|| {
        let err = PaymentError::Config("STRIPE_SECRET_KEY not set".into());
        tracing::warn!("Checkout rejected: {}", err);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, err.user_message())
    })?;

    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!("Malformed checkout body: {}", rejection.body_text());
        api_error(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let purchase = request.validate().map_err(|e| {
        tracing::debug!("Checkout rejected: {}", e);
        api_error(StatusCode::BAD_REQUEST, e.user_message())
    })?;

    let session = gateway
        .create_session(&purchase, &state.redirects)
        .await
        .map_err(|e| {
            tracing::error!(gateway = gateway.name(), "Checkout error: {}", e);
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e.user_message())
        })?;

    Ok(Json(session))
}
