//! Client for the exchange rate service.

use std::error::Error as _;

use fx_shared::{AppError, RateServiceClientConfig};
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

/// Message returned to callers when the rate service answers with a non-200
/// status.
pub const RATE_UNAVAILABLE: &str = "rate unavailable";

/// Errors from calls to the exchange rate service.
///
/// Transport faults and non-200 answers are kept apart because they surface
/// differently: a fault carries its own description to the caller, while an
/// error status collapses into [`RATE_UNAVAILABLE`].
#[derive(Debug, Error)]
pub enum RateClientError {
    /// The HTTP client could not be constructed.
    #[error("{}", fault_message(.0))]
    Build(reqwest::Error),

    /// The request never produced a response (timeout, refused, DNS, ...).
    #[error("{}", fault_message(.0))]
    Transport(reqwest::Error),

    /// A 200 response whose body could not be read as JSON.
    #[error("{}", fault_message(.0))]
    Decode(reqwest::Error),

    /// The service answered with something other than 200.
    #[error("rate service returned {0}")]
    Status(StatusCode),
}

impl From<RateClientError> for AppError {
    fn from(err: RateClientError) -> Self {
        match err {
            // The upstream body is dropped here, so a 404 and a 500 look the
            // same to the caller while transport faults keep their detail.
            // Worth revisiting if callers ever need to tell them apart.
            RateClientError::Status(_) => Self::ExternalService(RATE_UNAVAILABLE.to_string()),
            other => Self::ExternalService(other.to_string()),
        }
    }
}

/// Joins a reqwest error with its source chain, so timeouts and refused
/// connections say what actually happened.
fn fault_message(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Body of a successful `/rate` answer.
#[derive(Debug, Deserialize)]
struct RateBody {
    /// A body without `rate` is treated as a rate of 1.0. This silently turns
    /// a malformed answer into an identity conversion.
    #[serde(default = "default_rate")]
    rate: f64,
}

const fn default_rate() -> f64 {
    1.0
}

/// HTTP client for the exchange rate service.
#[derive(Debug, Clone)]
pub struct RateClient {
    http: reqwest::Client,
    rate_url: String,
}

impl RateClient {
    /// Creates a client with the configured base URL and timeout.
    pub fn new(config: &RateServiceClientConfig) -> Result<Self, RateClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(RateClientError::Build)?;

        Ok(Self {
            http,
            rate_url: format!("{}/rate", config.base_url.trim_end_matches('/')),
        })
    }

    /// Fetches the rate for converting `from` into `to`.
    ///
    /// Makes exactly one attempt bounded by the configured timeout.
    #[instrument(skip(self))]
    pub async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, RateClientError> {
        let response = self
            .http
            .get(&self.rate_url)
            .query(&[("from", from), ("to", to)])
            .send()
            .await
            .map_err(RateClientError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(RateClientError::Status(status));
        }

        let body: RateBody = response.json().await.map_err(RateClientError::Decode)?;
        debug!(rate = body.rate, "Rate received");

        Ok(body.rate)
    }
}
