//! Required Minimum Distributions.
//!
//! RMD = account balance / distribution period, where the period comes from
//! the IRS Uniform Lifetime Table. The table is data; a revision to the IRS
//! life-expectancy factors is an edit here and nowhere else.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::rounding::round_currency;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinCalcResult;

/// First age at which a distribution is required.
pub const RMD_START_AGE: u32 = 72;

/// IRS Uniform Lifetime Table: (age, distribution period in years).
const UNIFORM_LIFETIME: &[(u32, Decimal)] = &[
    (72, dec!(27.4)),
    (73, dec!(26.5)),
    (74, dec!(25.5)),
    (75, dec!(24.6)),
    (76, dec!(23.7)),
    (77, dec!(22.9)),
    (78, dec!(22.0)),
    (79, dec!(21.1)),
    (80, dec!(20.2)),
    (81, dec!(19.4)),
    (82, dec!(18.5)),
    (83, dec!(17.7)),
    (84, dec!(16.8)),
    (85, dec!(16.0)),
    (86, dec!(15.2)),
    (87, dec!(14.4)),
    (88, dec!(13.7)),
    (89, dec!(12.9)),
    (90, dec!(12.2)),
    (91, dec!(11.5)),
    (92, dec!(10.8)),
    (93, dec!(10.1)),
    (94, dec!(9.5)),
    (95, dec!(8.9)),
    (96, dec!(8.4)),
    (97, dec!(7.8)),
    (98, dec!(7.3)),
    (99, dec!(6.8)),
    (100, dec!(6.4)),
    (101, dec!(6.0)),
    (102, dec!(5.6)),
    (103, dec!(5.2)),
    (104, dec!(4.9)),
    (105, dec!(4.6)),
    (106, dec!(4.3)),
    (107, dec!(4.1)),
    (108, dec!(3.9)),
    (109, dec!(3.7)),
    (110, dec!(3.5)),
    (111, dec!(3.4)),
    (112, dec!(3.3)),
    (113, dec!(3.1)),
    (114, dec!(3.0)),
    (115, dec!(2.9)),
    (116, dec!(2.8)),
    (117, dec!(2.7)),
    (118, dec!(2.5)),
    (119, dec!(2.3)),
    (120, dec!(2.0)),
];

/// Input for an RMD calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RmdInput {
    /// Account balance as of December 31 of the prior year. Must be >= 0.
    pub balance: Money,
    /// Account owner's age this year. Must be >= 72.
    pub age: u32,
}

/// Result of an RMD calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RmdResult {
    /// Distribution period from the Uniform Lifetime Table.
    pub distribution_period: Decimal,
    /// Required withdrawal, rounded to a whole currency unit.
    pub required_distribution: Money,
}

fn distribution_period(age: u32) -> Option<Decimal> {
    if age < RMD_START_AGE {
        return None;
    }
    // Ages past the table end keep the final 2.0 factor
    let last = UNIFORM_LIFETIME.last().map(|&(_, p)| p);
    UNIFORM_LIFETIME
        .iter()
        .find(|&&(a, _)| a == age)
        .map(|&(_, p)| p)
        .or(last)
}

/// Compute the required minimum distribution for the year.
pub fn calculate_rmd(input: &RmdInput) -> FinCalcResult<ComputationOutput<RmdResult>> {
    let start = Instant::now();

    if input.balance < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "balance".into(),
            reason: "balance must be >= 0".into(),
        });
    }
    let period = distribution_period(input.age).ok_or_else(|| FinCalcError::InvalidInput {
        field: "age".into(),
        reason: format!("no distribution is required before age {RMD_START_AGE}"),
    })?;

    let result = RmdResult {
        distribution_period: period,
        required_distribution: round_currency(input.balance / period),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Uniform Lifetime Table division",
        &serde_json::json!({
            "age": input.age,
            "distribution_period": period.to_string(),
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn first_rmd_at_72() {
        let r = calculate_rmd(&RmdInput {
            balance: dec!(500_000),
            age: 72,
        })
        .unwrap()
        .result;
        assert_eq!(r.distribution_period, dec!(27.4));
        // 500_000 / 27.4 = 18_248.18
        assert_eq!(r.required_distribution, dec!(18_248));
    }

    #[test]
    fn rmd_grows_with_age_for_fixed_balance() {
        let mut prev = Decimal::ZERO;
        for age in 72..=120 {
            let r = calculate_rmd(&RmdInput {
                balance: dec!(1_000_000),
                age,
            })
            .unwrap()
            .result;
            assert!(r.required_distribution >= prev, "RMD shrank at age {age}");
            prev = r.required_distribution;
        }
    }

    #[test]
    fn table_periods_strictly_decrease() {
        for pair in UNIFORM_LIFETIME.windows(2) {
            assert!(pair[1].1 < pair[0].1);
            assert_eq!(pair[1].0, pair[0].0 + 1);
        }
    }

    #[test]
    fn ages_past_table_use_final_factor() {
        let r = calculate_rmd(&RmdInput {
            balance: dec!(100_000),
            age: 130,
        })
        .unwrap()
        .result;
        assert_eq!(r.distribution_period, dec!(2.0));
        assert_eq!(r.required_distribution, dec!(50_000));
    }

    #[test]
    fn zero_balance_requires_nothing() {
        let r = calculate_rmd(&RmdInput {
            balance: Decimal::ZERO,
            age: 80,
        })
        .unwrap()
        .result;
        assert_eq!(r.required_distribution, Decimal::ZERO);
    }

    #[test]
    fn too_young_or_negative_balance_rejected() {
        assert!(calculate_rmd(&RmdInput {
            balance: dec!(100_000),
            age: 71,
        })
        .is_err());
        assert!(calculate_rmd(&RmdInput {
            balance: dec!(-1),
            age: 75,
        })
        .is_err());
    }
}
