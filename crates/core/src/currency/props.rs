//! Property-based tests for rate lookups and conversion.
//!
//! - Inverse lookup law
//! - Direct entries take precedence
//! - Conversion is linear in the amount and keeps its sign

use proptest::prelude::*;

use super::conversion::convert_amount;
use super::exchange::{RateLookupMethod, RateTable};

/// Strategy to generate positive rates (0.0001 to 10000.0).
fn positive_rate() -> impl Strategy<Value = f64> {
    (1u32..100_000_000u32).prop_map(|v| f64::from(v) / 10_000.0)
}

/// Strategy to generate three-letter upper-case currency codes.
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// Strategy to generate amounts, negative ones included.
fn amount() -> impl Strategy<Value = f64> {
    -1_000_000.0f64..1_000_000.0f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* table holding only (s, d), looking up (d, s) SHALL return
    /// exactly `1.0 / rate(s, d)`.
    #[test]
    fn prop_inverse_lookup_is_reciprocal(
        from in currency_code(),
        to in currency_code(),
        rate in positive_rate(),
    ) {
        prop_assume!(from != to);
        let table = RateTable::from_entries([((from.clone(), to.clone()), rate)]);

        let forward = table.lookup(&from, &to).unwrap();
        let backward = table.lookup(&to, &from).unwrap();

        prop_assert_eq!(forward.lookup_method, RateLookupMethod::Direct);
        prop_assert_eq!(backward.lookup_method, RateLookupMethod::Inverse);
        prop_assert_eq!(backward.rate, 1.0 / forward.rate);
    }

    /// *For any* table holding both directions, each direction SHALL return
    /// its own stored value.
    #[test]
    fn prop_direct_entries_take_precedence(
        from in currency_code(),
        to in currency_code(),
        forward in positive_rate(),
        backward in positive_rate(),
    ) {
        prop_assume!(from != to);
        let table = RateTable::from_entries([
            ((from.clone(), to.clone()), forward),
            ((to.clone(), from.clone()), backward),
        ]);

        prop_assert_eq!(table.lookup(&from, &to).unwrap().rate, forward);
        prop_assert_eq!(table.lookup(&to, &from).unwrap().rate, backward);
    }

    /// *For any* pair outside the standard table, the lookup SHALL miss.
    #[test]
    fn prop_unknown_pairs_miss(
        from in currency_code(),
        to in currency_code(),
    ) {
        let table = RateTable::standard();
        let known = table
            .pairs()
            .any(|(a, b, _)| (a == from && b == to) || (a == to && b == from));
        prop_assume!(!known);

        prop_assert!(table.lookup(&from, &to).is_err());
    }

    /// *For any* amount, a rate of 1 SHALL return the amount unchanged.
    #[test]
    fn prop_unit_rate_preserves_amount(amount in amount()) {
        prop_assert_eq!(convert_amount(amount, 1.0), amount);
    }

    /// *For any* amount and rate, doubling the amount SHALL double the result.
    #[test]
    fn prop_convert_is_linear_in_amount(amount in amount(), rate in positive_rate()) {
        // Scaling by two is exact in binary floating point.
        prop_assert_eq!(
            convert_amount(amount * 2.0, rate),
            convert_amount(amount, rate) * 2.0
        );
    }

    /// *For any* non-zero amount and positive rate, the result SHALL keep the
    /// sign of the amount.
    #[test]
    fn prop_positive_rate_preserves_sign(amount in amount(), rate in positive_rate()) {
        prop_assume!(amount.abs() > 1e-6);
        let converted = convert_amount(amount, rate);

        prop_assert!(converted != 0.0);
        prop_assert_eq!(converted.is_sign_negative(), amount.is_sign_negative());
    }
}
