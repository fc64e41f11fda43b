//! Supported currency listing routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::CurrencyServiceState;

/// Creates the currency routes.
pub fn routes() -> Router<CurrencyServiceState> {
    Router::new().route("/currencies", get(list_currencies))
}

/// Response listing the supported currency codes.
#[derive(Debug, Serialize)]
pub struct CurrenciesResponse {
    /// Currency codes, in configured order.
    pub currencies: Vec<String>,
}

/// GET `/currencies` - List supported currencies.
///
/// The list comes from configuration and is not checked against the rates
/// the exchange rate service can actually serve.
async fn list_currencies(State(state): State<CurrencyServiceState>) -> Json<CurrenciesResponse> {
    Json(CurrenciesResponse {
        currencies: state.currencies.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use crate::test_support::{body_json, currency_app, get};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_currencies() {
        let response = get(currency_app("http://127.0.0.1:1"), "/currencies").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "currencies": ["USD", "EUR", "INR", "JPY", "GBP"] })
        );
    }
}
