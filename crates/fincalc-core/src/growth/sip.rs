//! Systematic Investment Plan: future value of a level monthly contribution.
//!
//! FV = M * ((1+i)^n - 1) / i for monthly rate i and n months, with the
//! zero-rate case handled as a separate branch (FV = M * n) rather than
//! letting the quotient divide by zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::periods::{compound, months_from_years, periodic_rate};
use crate::rounding::round_currency;
use crate::types::{with_metadata, ComputationOutput, Money, RatePercent, Years};
use crate::FinCalcResult;

/// Input for a SIP projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipInput {
    /// Contribution invested at the end of each month. Must be > 0.
    pub monthly_contribution: Money,
    /// Expected annual return as a percentage (12 = 12%). Must be >= 0.
    pub annual_rate_percent: RatePercent,
    /// Investment horizon in years. Must be > 0.
    pub years: Years,
}

/// Result of a SIP projection, rounded to whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SipResult {
    pub months: u32,
    pub future_value: Money,
    pub total_contributions: Money,
    /// Always `future_value - total_contributions` after rounding.
    pub total_gains: Money,
}

/// Project the future value of a recurring monthly contribution.
pub fn calculate_sip(input: &SipInput) -> FinCalcResult<ComputationOutput<SipResult>> {
    let start = Instant::now();

    if input.monthly_contribution <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "monthly_contribution".into(),
            reason: "contribution must be > 0".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "rate must be >= 0".into(),
        });
    }

    let months = months_from_years(input.years, "years")?;
    let monthly_rate = periodic_rate(input.annual_rate_percent, 12);

    let overflow = |field: &str| FinCalcError::InvalidInput {
        field: field.into(),
        reason: "amount exceeds the representable range".into(),
    };

    let contributions = input
        .monthly_contribution
        .checked_mul(Decimal::from(months))
        .ok_or_else(|| overflow("monthly_contribution"))?;
    let future_value = if monthly_rate.is_zero() {
        contributions
    } else {
        let annuity_factor = (compound(monthly_rate, months)? - Decimal::ONE) / monthly_rate;
        input
            .monthly_contribution
            .checked_mul(annuity_factor)
            .ok_or_else(|| overflow("monthly_contribution"))?
    };

    let future_value = round_currency(future_value);
    let contributions = round_currency(contributions);
    let result = SipResult {
        months,
        future_value,
        total_contributions: contributions,
        total_gains: future_value - contributions,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Ordinary annuity future value at monthly compounding",
        &serde_json::json!({
            "monthly_rate": monthly_rate.to_string(),
            "months": months,
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}
