//! Exchange rate table and lookup.

use std::collections::HashMap;

use super::error::RateError;

/// How a rate was resolved from the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLookupMethod {
    /// The requested pair is in the table.
    Direct,
    /// Only the reverse pair is in the table; the rate is its reciprocal.
    Inverse,
}

impl RateLookupMethod {
    /// Returns the lowercase name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Inverse => "inverse",
        }
    }
}

/// Result of a successful rate lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLookup {
    /// Multiplier from source to destination currency.
    pub rate: f64,
    /// How the rate was obtained.
    pub lookup_method: RateLookupMethod,
}

/// Immutable table of currency pair rates.
///
/// Keys are ordered `(from, to)` pairs and values satisfy
/// `amount_in_to = amount_in_from * rate`. The table is built once at startup
/// and only read afterwards, so it can be shared behind an `Arc` without
/// locking.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<(String, String), f64>,
}

impl RateTable {
    /// Builds a table from `((from, to), rate)` entries.
    ///
    /// Later entries for the same pair replace earlier ones.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = ((S, S), f64)>,
        S: Into<String>,
    {
        let rates = entries
            .into_iter()
            .map(|((from, to), rate)| ((from.into(), to.into()), rate))
            .collect();
        Self { rates }
    }

    /// Returns the hand-maintained table served in production.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries([
            (("USD", "INR"), 83.0),
            (("USD", "EUR"), 0.92),
            (("EUR", "INR"), 90.3),
            (("INR", "USD"), 0.012),
            (("JPY", "USD"), 0.0068),
        ])
    }

    /// Looks up the rate for converting `from` into `to`.
    ///
    /// A direct entry always wins over the reciprocal of the reverse entry.
    /// Only single-hop resolution is attempted: `JPY -> INR` is not derived
    /// through `USD` even though both legs exist.
    ///
    /// The reciprocal is not guarded against a zero entry; the table never
    /// holds one.
    pub fn lookup(&self, from: &str, to: &str) -> Result<RateLookup, RateError> {
        if let Some(rate) = self.get(from, to) {
            return Ok(RateLookup {
                rate,
                lookup_method: RateLookupMethod::Direct,
            });
        }

        if let Some(inverse) = self.get(to, from) {
            return Ok(RateLookup {
                rate: 1.0 / inverse,
                lookup_method: RateLookupMethod::Inverse,
            });
        }

        Err(RateError::RateNotFound(from.to_string(), to.to_string()))
    }

    /// Iterates over the directly stored pairs and their rates.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.rates
            .iter()
            .map(|((from, to), rate)| (from.as_str(), to.as_str(), *rate))
    }

    /// Number of directly stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns `true` if the table holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.rates
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }
}
