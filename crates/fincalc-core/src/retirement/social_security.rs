//! Social Security Primary Insurance Amount.
//!
//! The PIA is a progressive formula over AIME with two bend points: 90% of
//! AIME up to the first bend, 32% between the bends, 15% above the second.
//! Structurally this is the same bracket walk as the income-tax module.
//! Claiming before full retirement age reduces the benefit by 5/9 of 1% per
//! month for the first 36 months and 5/12 of 1% beyond; claiming after FRA
//! earns delayed credits of 2/3 of 1% per month through age 70.
//!
//! Bend points are the 2024 values.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::rounding::{round_currency, round_rate};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinCalcResult;

const FIRST_BEND: Decimal = dec!(1_174);
const SECOND_BEND: Decimal = dec!(7_078);
const RATE_BELOW_FIRST: Decimal = dec!(0.90);
const RATE_BETWEEN: Decimal = dec!(0.32);
const RATE_ABOVE_SECOND: Decimal = dec!(0.15);

const EARLIEST_CLAIM_AGE: u32 = 62;
const LATEST_CLAIM_AGE: u32 = 70;

fn default_full_retirement_age() -> u32 {
    67
}

/// Input for a PIA estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiaInput {
    /// Average Indexed Monthly Earnings. Must be >= 0.
    pub aime: Money,
    /// Age at which benefits are claimed, 62 through 70. Defaults to FRA.
    pub claim_age: Option<u32>,
    /// Full retirement age (67 for anyone born 1960 or later).
    #[serde(default = "default_full_retirement_age")]
    pub full_retirement_age: u32,
}

/// AIME split across the bend-point segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiaSegments {
    pub below_first_bend: Money,
    pub between_bends: Money,
    pub above_second_bend: Money,
}

/// Result of a PIA estimate, monthly amounts in whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PiaResult {
    pub segments: PiaSegments,
    /// Benefit at full retirement age.
    pub pia_at_fra: Money,
    /// Early-claiming reduction or delayed credit applied (1 = none).
    pub claim_adjustment: Decimal,
    /// Monthly benefit at the chosen claiming age.
    pub monthly_benefit: Money,
}

fn claim_adjustment(claim_age: u32, fra: u32) -> Decimal {
    if claim_age < fra {
        let months_early = (fra - claim_age) * 12;
        let first = months_early.min(36);
        let rest = months_early.saturating_sub(36);
        let reduction = Decimal::from(first) * dec!(5) / dec!(900)
            + Decimal::from(rest) * dec!(5) / dec!(1_200);
        Decimal::ONE - reduction
    } else {
        let months_late = (claim_age.min(LATEST_CLAIM_AGE) - fra) * 12;
        Decimal::ONE + Decimal::from(months_late) * dec!(2) / dec!(300)
    }
}

/// Estimate the monthly Social Security benefit from AIME.
pub fn calculate_pia(input: &PiaInput) -> FinCalcResult<ComputationOutput<PiaResult>> {
    let start = Instant::now();

    if input.aime < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "aime".into(),
            reason: "AIME must be >= 0".into(),
        });
    }
    if !(65..=67).contains(&input.full_retirement_age) {
        return Err(FinCalcError::InvalidInput {
            field: "full_retirement_age".into(),
            reason: "full retirement age must be between 65 and 67".into(),
        });
    }
    let claim_age = input.claim_age.unwrap_or(input.full_retirement_age);
    if !(EARLIEST_CLAIM_AGE..=LATEST_CLAIM_AGE).contains(&claim_age) {
        return Err(FinCalcError::InvalidInput {
            field: "claim_age".into(),
            reason: format!(
                "claim age must be between {EARLIEST_CLAIM_AGE} and {LATEST_CLAIM_AGE}"
            ),
        });
    }

    let below = input.aime.min(FIRST_BEND);
    let between = (input.aime - FIRST_BEND).max(Decimal::ZERO).min(SECOND_BEND - FIRST_BEND);
    let above = (input.aime - SECOND_BEND).max(Decimal::ZERO);

    let pia = below * RATE_BELOW_FIRST + between * RATE_BETWEEN + above * RATE_ABOVE_SECOND;
    let adjustment = claim_adjustment(claim_age, input.full_retirement_age);

    let result = PiaResult {
        segments: PiaSegments {
            below_first_bend: round_currency(below),
            between_bends: round_currency(between),
            above_second_bend: round_currency(above),
        },
        pia_at_fra: round_currency(pia),
        claim_adjustment: round_rate(adjustment),
        monthly_benefit: round_currency(pia * adjustment),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Bend-point PIA with claiming-age adjustment",
        &serde_json::json!({
            "bend_points": [FIRST_BEND.to_string(), SECOND_BEND.to_string()],
            "claim_age": claim_age,
            "full_retirement_age": input.full_retirement_age,
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}
