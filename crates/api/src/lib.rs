//! HTTP layer for the currency and exchange rate services.
//!
//! This crate provides:
//! - The exchange rate service router (`/health`, `/rate`)
//! - The currency service router (`/`, `/health`, `/currencies`, `/convert`)
//! - The outbound client the currency service uses to fetch rates
//! - Error-to-response rendering
//! - A query extractor that resolves repeated parameters first-wins

pub mod client;
pub mod error;
pub mod extractors;
pub mod routes;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use axum::Router;
use fx_core::currency::RateTable;
use fx_shared::CurrencyServiceConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use client::{RateClient, RateClientError};

/// State shared across exchange rate service handlers.
#[derive(Clone)]
pub struct RateServiceState {
    /// Rate table built at startup, read-only afterwards.
    pub rates: Arc<RateTable>,
}

impl RateServiceState {
    /// Wraps a rate table for sharing across handlers.
    #[must_use]
    pub fn new(rates: RateTable) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }
}

/// State shared across currency service handlers.
#[derive(Clone)]
pub struct CurrencyServiceState {
    /// Client for the exchange rate service.
    pub rate_client: Arc<RateClient>,
    /// Currency codes advertised by `/currencies`.
    pub currencies: Arc<[String]>,
}

impl CurrencyServiceState {
    /// Builds the state from loaded configuration.
    pub fn from_config(config: &CurrencyServiceConfig) -> Result<Self, RateClientError> {
        let rate_client = RateClient::new(&config.rate_service)?;

        Ok(Self {
            rate_client: Arc::new(rate_client),
            currencies: config.supported_currencies.clone().into(),
        })
    }
}

/// Creates the exchange rate service router.
pub fn create_rate_router(state: RateServiceState) -> Router {
    Router::new()
        .merge(routes::rate_service_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Creates the currency service router.
pub fn create_currency_router(state: CurrencyServiceState) -> Router {
    Router::new()
        .merge(routes::currency_service_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
