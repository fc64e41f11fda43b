//! Exchange Rate Service
//!
//! Serves direct and inverse lookups from a static rate table.

use tokio::net::TcpListener;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fx_api::{RateServiceState, create_rate_router};
use fx_core::currency::RateTable;
use fx_shared::ExchangeRateServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "exchange_rate_service=debug,fx_api=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = ExchangeRateServiceConfig::load()?;

    // Build the rate table once; handlers only read it
    let rates = RateTable::standard();
    for (from, to, rate) in rates.pairs() {
        debug!(from, to, rate, "Rate pair");
    }
    info!(pairs = rates.len(), "Rate table loaded");

    // Create router
    let app = create_rate_router(RateServiceState::new(rates));

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Exchange rate service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
