//! Bracket tables for the supported tax regimes.
//!
//! The tables are data, not code: a rate change is an edit to one slice
//! here, and every caller picks it up. Bounds are half-open `[lower, upper)`
//! with `upper = None` marking the final open-ended bracket.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Which bracket table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    New,
    Old,
}

/// One marginal bracket: income up to `upper` is taxed at `rate`.
#[derive(Debug, Clone, Copy)]
pub struct TaxBracket {
    /// Upper bound of the bracket (exclusive). `None` for the top bracket.
    pub upper: Option<Decimal>,
    /// Marginal rate as a decimal (0.05 = 5%).
    pub rate: Decimal,
}

const NEW_REGIME: &[TaxBracket] = &[
    TaxBracket { upper: Some(dec!(300_000)), rate: dec!(0) },
    TaxBracket { upper: Some(dec!(600_000)), rate: dec!(0.05) },
    TaxBracket { upper: Some(dec!(900_000)), rate: dec!(0.10) },
    TaxBracket { upper: Some(dec!(1_200_000)), rate: dec!(0.15) },
    TaxBracket { upper: Some(dec!(1_500_000)), rate: dec!(0.20) },
    TaxBracket { upper: None, rate: dec!(0.30) },
];

const OLD_REGIME: &[TaxBracket] = &[
    TaxBracket { upper: Some(dec!(250_000)), rate: dec!(0) },
    TaxBracket { upper: Some(dec!(500_000)), rate: dec!(0.05) },
    TaxBracket { upper: Some(dec!(1_000_000)), rate: dec!(0.20) },
    TaxBracket { upper: None, rate: dec!(0.30) },
];

impl Regime {
    /// The bracket table for this regime, in ascending order.
    pub fn brackets(&self) -> &'static [TaxBracket] {
        match self {
            Regime::New => NEW_REGIME,
            Regime::Old => OLD_REGIME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn tables_are_ascending_with_open_top() {
        for regime in [Regime::New, Regime::Old] {
            let brackets = regime.brackets();
            let mut prev = Decimal::ZERO;
            for (i, b) in brackets.iter().enumerate() {
                match b.upper {
                    Some(upper) => {
                        assert!(upper > prev, "{regime:?} bracket {i} out of order");
                        prev = upper;
                    }
                    None => assert_eq!(i, brackets.len() - 1),
                }
            }
            assert!(brackets.last().unwrap().upper.is_none());
        }
    }

    #[test]
    fn rates_never_decrease() {
        for regime in [Regime::New, Regime::Old] {
            let brackets = regime.brackets();
            for pair in brackets.windows(2) {
                assert!(pair[1].rate >= pair[0].rate);
            }
        }
    }
}
