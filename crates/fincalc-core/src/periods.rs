//! Period and compounding helpers shared by the growth and loan calculators.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::FinCalcError;
use crate::FinCalcResult;

/// Compute (1 + rate)^n via iterative multiplication (avoids Decimal::powd drift).
///
/// Growth that leaves Decimal's range is reported as invalid input, not a
/// panic; rates and durations are otherwise unbounded.
pub fn compound(rate: Decimal, n: u32) -> FinCalcResult<Decimal> {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| FinCalcError::InvalidInput {
                field: "rate".into(),
                reason: "compound growth exceeds the representable range".into(),
            })?;
    }
    Ok(result)
}

/// Convert a duration in years into a whole number of compounding periods.
///
/// Fractional years are honored to period granularity: 2.5 years at monthly
/// compounding is 30 periods. Durations that round to zero periods are
/// rejected.
pub fn periods_from_years(
    years: Decimal,
    periods_per_year: u32,
    field: &str,
) -> FinCalcResult<u32> {
    if years <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: field.into(),
            reason: "duration must be > 0 years".into(),
        });
    }

    let periods = (years * Decimal::from(periods_per_year))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    match periods.to_u32() {
        Some(p) if p >= 1 => Ok(p),
        _ => Err(FinCalcError::InvalidInput {
            field: field.into(),
            reason: "duration must cover at least one period".into(),
        }),
    }
}

/// Whole months in a duration given in years.
pub fn months_from_years(years: Decimal, field: &str) -> FinCalcResult<u32> {
    periods_from_years(years, 12, field)
}

/// Periodic rate from an annual percentage: r% / 100 / periods_per_year.
pub fn periodic_rate(annual_rate_percent: Decimal, periods_per_year: u32) -> Decimal {
    annual_rate_percent / Decimal::from(100) / Decimal::from(periods_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn compound_matches_known_power() {
        // 1.1^3 = 1.331
        assert_eq!(compound(dec!(0.10), 3).unwrap(), dec!(1.331));
    }

    #[test]
    fn compound_zero_periods_is_one() {
        assert_eq!(compound(dec!(0.07), 0).unwrap(), Decimal::ONE);
    }

    #[test]
    fn compound_overflow_is_an_error() {
        // 2^120 is far past Decimal's 96-bit mantissa
        assert!(compound(Decimal::ONE, 120).is_err());
    }

    #[test]
    fn months_from_whole_and_fractional_years() {
        assert_eq!(months_from_years(dec!(10), "years").unwrap(), 120);
        assert_eq!(months_from_years(dec!(2.5), "years").unwrap(), 30);
    }

    #[test]
    fn months_rejects_non_positive_years() {
        assert!(months_from_years(Decimal::ZERO, "years").is_err());
        assert!(months_from_years(dec!(-1), "years").is_err());
    }

    #[test]
    fn months_rejects_sub_month_duration() {
        assert!(months_from_years(dec!(0.01), "years").is_err());
    }

    #[test]
    fn periodic_rate_is_percent_over_periods() {
        assert_eq!(periodic_rate(dec!(12), 12), dec!(0.01));
        assert_eq!(periodic_rate(dec!(0), 12), Decimal::ZERO);
    }
}
