//! Helpers shared by router tests.

use axum::{
    Router,
    body::Body,
    http::Request,
    response::Response,
};
use fx_shared::config::DEFAULT_SUPPORTED_CURRENCIES;
use fx_shared::{CurrencyServiceConfig, RateServiceClientConfig, ServerConfig};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::CurrencyServiceState;

/// Sends a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collects the response body.
pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Collects the response body and parses it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// Builds a currency service router pointed at `rate_service_url`, with the
/// default supported currencies.
pub fn currency_app(rate_service_url: &str) -> Router {
    currency_app_with_timeout(rate_service_url, 2000)
}

/// Same as [`currency_app`] with a custom rate service timeout.
pub fn currency_app_with_timeout(rate_service_url: &str, timeout_ms: u64) -> Router {
    let config = CurrencyServiceConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        rate_service: RateServiceClientConfig {
            base_url: rate_service_url.to_string(),
            timeout_ms,
        },
        supported_currencies: DEFAULT_SUPPORTED_CURRENCIES
            .iter()
            .map(ToString::to_string)
            .collect(),
    };

    crate::create_currency_router(CurrencyServiceState::from_config(&config).unwrap())
}
