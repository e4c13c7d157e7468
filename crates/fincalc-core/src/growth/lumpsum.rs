//! One-time investment compounding at a chosen frequency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::periods::{compound, periodic_rate, periods_from_years};
use crate::rounding::round_currency;
use crate::types::{with_metadata, ComputationOutput, Money, RatePercent, Years};
use crate::FinCalcResult;

fn default_compounds_per_year() -> u32 {
    12
}

/// Input for a lump-sum growth projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpsumInput {
    /// Amount invested today. Must be > 0.
    pub principal: Money,
    /// Expected annual return as a percentage. Must be >= 0.
    pub annual_rate_percent: RatePercent,
    /// Investment horizon in years. Must be > 0.
    pub years: Years,
    /// Compounding periods per year (12 = monthly, 1 = annual).
    #[serde(default = "default_compounds_per_year")]
    pub compounds_per_year: u32,
}

/// Result of a lump-sum projection, rounded to whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LumpsumResult {
    pub periods: u32,
    pub future_value: Money,
    pub principal: Money,
    pub total_gains: Money,
}

/// FV = P * (1 + r/m)^(m*t).
pub fn calculate_lumpsum(input: &LumpsumInput) -> FinCalcResult<ComputationOutput<LumpsumResult>> {
    let start = Instant::now();

    if input.principal <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "principal".into(),
            reason: "principal must be > 0".into(),
        });
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "annual_rate_percent".into(),
            reason: "rate must be >= 0".into(),
        });
    }
    if input.compounds_per_year == 0 {
        return Err(FinCalcError::InvalidInput {
            field: "compounds_per_year".into(),
            reason: "compounding frequency must be >= 1".into(),
        });
    }

    let periods = periods_from_years(input.years, input.compounds_per_year, "years")?;
    let rate = periodic_rate(input.annual_rate_percent, input.compounds_per_year);

    let future_value = input
        .principal
        .checked_mul(compound(rate, periods)?)
        .ok_or_else(|| FinCalcError::InvalidInput {
            field: "principal".into(),
            reason: "future value exceeds the representable range".into(),
        })?;
    let future_value = round_currency(future_value);
    let principal = round_currency(input.principal);
    let result = LumpsumResult {
        periods,
        future_value,
        principal,
        total_gains: future_value - principal,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Discrete compound interest on a single principal",
        &serde_json::json!({
            "periodic_rate": rate.to_string(),
            "compounds_per_year": input.compounds_per_year,
            "periods": periods,
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}
