//! API route definitions.

use axum::Router;

use crate::{CurrencyServiceState, RateServiceState};

pub mod convert;
pub mod currencies;
pub mod health;
pub mod landing;
pub mod rates;

/// Creates the exchange rate service routes.
pub fn rate_service_routes() -> Router<RateServiceState> {
    Router::new()
        .merge(health::routes::<RateServiceState>())
        .merge(rates::routes())
}

/// Creates the currency service routes.
pub fn currency_service_routes() -> Router<CurrencyServiceState> {
    Router::new()
        .merge(landing::routes())
        .merge(health::routes::<CurrencyServiceState>())
        .merge(currencies::routes())
        .merge(convert::routes())
}
