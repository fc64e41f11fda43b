//! Rate table lookups and amount conversion.

pub mod conversion;
pub mod error;
pub mod exchange;

#[cfg(test)]
mod props;

pub use conversion::{Conversion, DEFAULT_AMOUNT, DEFAULT_FROM, DEFAULT_TO, convert_amount};
pub use error::RateError;
pub use exchange::{RateLookup, RateLookupMethod, RateTable};
