//! Currency conversion logic.
//!
//! Amounts and rates are plain `f64`. No rounding is applied to the result.

use serde::Serialize;

/// Source currency used when a request does not name one.
pub const DEFAULT_FROM: &str = "USD";
/// Destination currency used when a request does not name one.
pub const DEFAULT_TO: &str = "INR";
/// Raw amount used when a request does not carry one.
pub const DEFAULT_AMOUNT: &str = "1";

/// Converts an amount using the given exchange rate.
#[must_use]
pub fn convert_amount(amount: f64, rate: f64) -> f64 {
    amount * rate
}

/// Outcome of a single conversion, echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Source currency code.
    pub from: String,
    /// Destination currency code.
    pub to: String,
    /// Amount in the source currency.
    pub amount: f64,
    /// Amount in the destination currency.
    pub converted: f64,
}

impl Conversion {
    /// Applies `rate` to `amount` and records the request alongside the result.
    #[must_use]
    pub fn new(from: String, to: String, amount: f64, rate: f64) -> Self {
        Self {
            from,
            to,
            amount,
            converted: convert_amount(amount, rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::RateTable;

    #[test]
    fn test_convert_usd_to_inr() {
        let rate = RateTable::standard().lookup("USD", "INR").unwrap().rate;
        assert_eq!(convert_amount(10.0, rate), 830.0);
    }

    #[test]
    fn test_convert_eur_to_inr() {
        let rate = RateTable::standard().lookup("EUR", "INR").unwrap().rate;
        assert_eq!(convert_amount(2.0, rate), 180.6);
    }

    #[test]
    fn test_negative_and_zero_amounts_pass_through() {
        assert_eq!(convert_amount(-2.0, 83.0), -166.0);
        assert_eq!(convert_amount(0.0, 83.0), 0.0);
    }

    #[test]
    fn test_conversion_serializes_all_fields() {
        let conversion = Conversion::new("USD".into(), "INR".into(), 10.0, 83.0);
        let json = serde_json::to_value(&conversion).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "from": "USD",
                "to": "INR",
                "amount": 10.0,
                "converted": 830.0
            })
        );
    }
}
