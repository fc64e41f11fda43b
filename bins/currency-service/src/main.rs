//! Currency Service
//!
//! Front service that converts amounts using rates fetched from the
//! exchange rate service.

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fx_api::{CurrencyServiceState, create_currency_router};
use fx_shared::CurrencyServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "currency_service=debug,fx_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = CurrencyServiceConfig::load()?;
    info!(
        rate_service_url = %config.rate_service.base_url,
        timeout_ms = config.rate_service.timeout_ms,
        currencies = config.supported_currencies.len(),
        "Rate service client configured"
    );

    // Create application state
    let state = CurrencyServiceState::from_config(&config)?;

    // Create router
    let app = create_currency_router(state);

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Currency service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
