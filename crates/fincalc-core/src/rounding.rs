//! Currency rounding policy.
//!
//! Every calculator computes in full `Decimal` precision and rounds exactly
//! once, at the output boundary. The policy is round-half-up (midpoint away
//! from zero) to whole currency units, matching how the calculator pages
//! display amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round to a whole currency unit, half-up.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a rate or factor to four decimal places for reporting.
pub fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(4, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_up_at_midpoint() {
        assert_eq!(round_currency(dec!(2661.5)), dec!(2662));
        assert_eq!(round_currency(dec!(2661.4999)), dec!(2661));
    }

    #[test]
    fn rounds_away_from_zero_for_negatives() {
        assert_eq!(round_currency(dec!(-10.5)), dec!(-11));
    }

    #[test]
    fn round_rate_keeps_four_places() {
        assert_eq!(round_rate(dec!(0.00583333)), dec!(0.0058));
    }
}
