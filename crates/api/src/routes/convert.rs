//! Currency conversion routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use fx_core::currency::{Conversion, DEFAULT_AMOUNT, DEFAULT_FROM, DEFAULT_TO};
use fx_shared::{AppError, AppResult};
use tracing::{error, info, warn};

use crate::{CurrencyServiceState, error::error_response, extractors::QueryParams};

/// Creates the conversion routes.
pub fn routes() -> Router<CurrencyServiceState> {
    Router::new().route("/convert", get(convert))
}

/// Query parameters for a conversion.
///
/// `amount` stays a string until the handler parses it, so a bad number is
/// reported by the handler instead of being rejected by the extractor.
#[derive(Debug)]
pub struct ConvertQuery {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Amount in the source currency.
    pub amount: String,
}

impl From<&QueryParams> for ConvertQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            from: params.first_or("from", DEFAULT_FROM),
            to: params.first_or("to", DEFAULT_TO),
            amount: params.first_or("amount", DEFAULT_AMOUNT),
        }
    }
}

/// Parses the raw amount. No range or sign check is applied.
///
/// A non-numeric value is an internal error, not a client error.
fn parse_amount(raw: &str) -> AppResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| AppError::Internal(format!("could not parse amount '{raw}': {e}")))
}

/// GET `/convert` - Convert an amount using the exchange rate service.
async fn convert(
    State(state): State<CurrencyServiceState>,
    params: QueryParams,
) -> Response {
    let query = ConvertQuery::from(&params);

    let amount = match parse_amount(&query.amount) {
        Ok(amount) => amount,
        Err(e) => {
            error!(
                error = %e,
                error_code = e.error_code(),
                "Failed to parse conversion amount"
            );
            return error_response(&e);
        }
    };

    match state.rate_client.fetch_rate(&query.from, &query.to).await {
        Ok(rate) => {
            let conversion = Conversion::new(query.from, query.to, amount, rate);
            info!(
                from = %conversion.from,
                to = %conversion.to,
                amount = conversion.amount,
                converted = conversion.converted,
                "Conversion completed"
            );

            (StatusCode::OK, Json(conversion)).into_response()
        }
        Err(e) => {
            let message = e.to_string();
            let err = AppError::from(e);
            warn!(
                from = %query.from,
                to = %query.to,
                error = %message,
                error_code = err.error_code(),
                "Rate service call failed"
            );
            error_response(&err)
        }
    }
}
