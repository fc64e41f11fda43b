//! Exchange rate lookup routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use fx_core::currency::{DEFAULT_FROM, DEFAULT_TO};
use fx_shared::AppError;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{RateServiceState, error::error_response, extractors::QueryParams};

/// Creates the rate lookup routes.
pub fn routes() -> Router<RateServiceState> {
    Router::new().route("/rate", get(get_rate))
}

/// Query parameters for a rate lookup.
#[derive(Debug)]
pub struct RateQuery {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
}

impl From<&QueryParams> for RateQuery {
    fn from(params: &QueryParams) -> Self {
        Self {
            from: params.first_or("from", DEFAULT_FROM),
            to: params.first_or("to", DEFAULT_TO),
        }
    }
}

/// Response for a rate lookup.
#[derive(Debug, Serialize)]
pub struct RateResponse {
    /// Source currency code.
    pub from: String,
    /// Target currency code.
    pub to: String,
    /// Multiplier from source to target.
    pub rate: f64,
}

/// GET `/rate` - Look up the rate for a currency pair.
async fn get_rate(
    State(state): State<RateServiceState>,
    params: QueryParams,
) -> Response {
    let query = RateQuery::from(&params);

    match state.rates.lookup(&query.from, &query.to) {
        Ok(lookup) => {
            debug!(
                from = %query.from,
                to = %query.to,
                rate = lookup.rate,
                lookup_method = lookup.lookup_method.as_str(),
                "Rate resolved"
            );

            let response = RateResponse {
                from: query.from,
                to: query.to,
                rate: lookup.rate,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            let err = AppError::from(e);
            warn!(
                from = %query.from,
                to = %query.to,
                error_code = err.error_code(),
                "Rate lookup failed"
            );
            error_response(&err)
        }
    }
}
