//! Rate lookup errors.

use fx_shared::AppError;
use thiserror::Error;

/// Errors from rate table lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// Neither the pair nor its inverse is in the table.
    #[error("No exchange rate found for {0}/{1}")]
    RateNotFound(String, String),
}

impl From<RateError> for AppError {
    fn from(err: RateError) -> Self {
        match err {
            RateError::RateNotFound(..) => Self::NotFound("rate not found".to_string()),
        }
    }
}
