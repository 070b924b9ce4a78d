//! API Client

use serde::{Deserialize, Serialize};

/// Relay base URL, fixed at build time
pub const API_BASE: &str = match option_env!("STOREFRONT_API_URL") {
    Some(url) => url,
    None => "http://localhost:4242",
};

/// Body of `POST /create-checkout-session`
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub product_name: String,
    pub price: String,
    pub quantity: u64,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct CheckoutResponse {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

pub fn checkout_endpoint(base: &str) -> String {
    format!("{}/create-checkout-session", base.trim_end_matches('/'))
}

pub const REDIRECT_FAILED: &str = "Could not open the checkout page. Please try again.";

/// Map the outcome of navigating to the hosted checkout to a UI error.
///
/// `None` means there was no window to navigate.
pub fn redirect_error<E>(outcome: Option<Result<(), E>>) -> Option<String> {
    match outcome {
        Some(Ok(())) => None,
        Some(Err(_)) | None => Some(REDIRECT_FAILED.into()),
    }
}

/// Create a checkout session and return the hosted checkout URL
pub async fn create_checkout(request: &CheckoutRequest) -> Result<String, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(checkout_endpoint(API_BASE))
        .json(request)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: CheckoutResponse = response.json().await.map_err(|e| e.to_string())?;
        Ok(data.url)
    } else {
        match response.json::<ErrorResponse>().await {
            Ok(data) => Err(data.error),
            Err(_) => Err("Failed to create checkout".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let request = CheckoutRequest {
            product_name: "ENEM Turbo".into(),
            price: "99.90".into(),
            quantity: 2,
            email: "a@b.com".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["productName"], "ENEM Turbo");
        assert_eq!(value["price"], "99.90");
        assert_eq!(value["quantity"], 2);
    }

    #[test]
    fn test_checkout_endpoint() {
        assert_eq!(
            checkout_endpoint("http://localhost:4242/"),
            "http://localhost:4242/create-checkout-session"
        );
    }

    #[test]
    fn test_redirect_failure_surfaces_error() {
        assert_eq!(redirect_error::<()>(Some(Ok(()))), None);
        assert_eq!(redirect_error(Some(Err("blocked"))).as_deref(), Some(REDIRECT_FAILED));
        assert_eq!(redirect_error::<()>(None).as_deref(), Some(REDIRECT_FAILED));
    }
}
