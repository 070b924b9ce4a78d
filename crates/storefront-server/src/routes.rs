//! Router

use anyhow::Context;
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{create_checkout_session, health_check};
use crate::state::AppState;

/// CORS restricted to the landing page origin
pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = origin
        .parse()
        .with_context(|| format!("CORS_ORIGIN is not a valid header value: {origin:?}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/create-checkout-session", post(create_checkout_session))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use storefront_payments::{MockGateway, RedirectUrls};
    use tower::ServiceExt;

    const ORIGIN: &str = "http://localhost:5173";

    fn app(gateway: Option<Arc<MockGateway>>) -> Router {
        let state = AppState {
            gateway: gateway.map(|g| g as Arc<dyn storefront_payments::CheckoutGateway>),
            redirects: RedirectUrls::from_base(ORIGIN),
        };
        build_router(state, cors_layer(ORIGIN).unwrap())
    }

    fn checkout(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/create-checkout-session")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn course() -> Value {
        json!({"productName": "Course", "price": 99.90, "quantity": 1, "email": "a@b.com"})
    }

    #[tokio::test]
    async fn test_health_check_is_repeatable() {
        let app = app(None);
        for _ in 0..2 {
            let request = Request::get("/").body(Body::empty()).unwrap();
            let (status, body) = send(app.clone(), request).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, json!({"ok": true}));
        }
    }

    #[tokio::test]
    async fn test_checkout_returns_session() {
        let gateway = Arc::new(MockGateway::new());
        let (status, body) = send(app(Some(gateway.clone())), checkout(&course())).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body["id"].as_str().unwrap().is_empty());
        assert!(!body["url"].as_str().unwrap().is_empty());

        let calls = gateway.calls().await;
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].unit_amount, 9990);
        assert_eq!(calls[0].email, "a@b.com");
    }

    #[tokio::test]
    async fn test_checkout_without_credential() {
        let (status, body) = send(app(None), checkout(&course())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": "Stripe not configured on server (check .env)."})
        );
    }

    #[tokio::test]
    async fn test_invalid_purchase_never_reaches_gateway() {
        let gateway = Arc::new(MockGateway::new());
        let bad = json!({"productName": "Course", "price": -1, "email": "a@b.com"});

        let (status, body) = send(app(Some(gateway.clone())), checkout(&bad)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("price"));
        assert!(gateway.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let gateway = Arc::new(MockGateway::new());
        let (status, body) =
            send(app(Some(gateway.clone())), checkout(&json!({"price": "abc"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert!(gateway.calls().await.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_failure_is_500() {
        let gateway = Arc::new(MockGateway::failing("Invalid API Key provided"));
        let (status, body) = send(app(Some(gateway)), checkout(&course())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Invalid API Key provided"}));
    }

    #[tokio::test]
    async fn test_duplicate_requests_create_two_sessions() {
        let gateway = Arc::new(MockGateway::new());
        let app = app(Some(gateway.clone()));

        let (_, first) = send(app.clone(), checkout(&course())).await;
        let (_, second) = send(app, checkout(&course())).await;

        assert_ne!(first["id"], second["id"]);
        assert_eq!(gateway.calls().await.len(), 2);
    }

    #[test]
    fn test_invalid_cors_origin() {
        assert!(cors_layer("bad\norigin").is_err());
    }
}
