//! Emergency-fund sizing.
//!
//! The recommended coverage is an additive heuristic: 6 months base, plus
//! risk add-ons for unstable or contract work, a large household, and a
//! single income stream, capped at 12 months. The thresholds are a product
//! decision, not derived from actuarial data.
//!
//! The target fund uses the months of coverage the user chose, not the
//! recommendation. The two are reported side by side so the caller can
//! show "you picked 6, we suggest 8" without merging them.
//!
//! Callers recompute on every keystroke, so this stays pure and O(1).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::rounding::round_currency;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinCalcResult;

const BASE_MONTHS: u8 = 6;
const MAX_MONTHS: u8 = 12;

/// How secure the primary income source is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStability {
    Stable,
    Contract,
    Unstable,
}

/// Input for emergency-fund sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundInput {
    /// Total monthly household expenses. Must be > 0.
    pub monthly_expenses: Money,
    /// Months of coverage the user wants to hold. Must be >= 1.
    pub months_coverage: u32,
    /// Savings already earmarked for emergencies. Must be >= 0.
    pub current_savings: Money,
    /// Amount the household can put aside each month. Must be >= 0.
    pub monthly_savings_capacity: Money,
    pub job_stability: JobStability,
    /// Number of dependents in the household.
    pub dependents: u32,
    /// Independent income streams. Must be >= 1.
    pub income_streams: u32,
}

/// Result of emergency-fund sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyFundResult {
    /// Expenses times the user's chosen coverage, rounded to whole units.
    pub target_fund: Money,
    /// How far current savings fall short of the target. Never negative.
    pub shortfall: Money,
    /// Whole months of saving at capacity to close the shortfall.
    pub months_to_goal: u32,
    /// Heuristic recommendation, always within [6, 12].
    pub recommended_months: u8,
}

fn recommend_months(input: &EmergencyFundInput) -> u8 {
    let mut months = BASE_MONTHS;
    months += match input.job_stability {
        JobStability::Unstable => 2,
        JobStability::Contract => 1,
        JobStability::Stable => 0,
    };
    if input.dependents > 2 {
        months += 1;
    }
    if input.income_streams == 1 {
        months += 1;
    }
    months.min(MAX_MONTHS)
}

/// Size an emergency fund and the runway to reach it.
pub fn calculate_emergency_fund(
    input: &EmergencyFundInput,
) -> FinCalcResult<ComputationOutput<EmergencyFundResult>> {
    let start = Instant::now();

    if input.monthly_expenses <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "monthly_expenses".into(),
            reason: "monthly expenses must be > 0".into(),
        });
    }
    if input.months_coverage == 0 {
        return Err(FinCalcError::InvalidInput {
            field: "months_coverage".into(),
            reason: "coverage must be at least one month".into(),
        });
    }
    if input.current_savings < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "current_savings".into(),
            reason: "savings must be >= 0".into(),
        });
    }
    if input.monthly_savings_capacity < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "monthly_savings_capacity".into(),
            reason: "savings capacity must be >= 0".into(),
        });
    }
    if input.income_streams == 0 {
        return Err(FinCalcError::InvalidInput {
            field: "income_streams".into(),
            reason: "at least one income stream is required".into(),
        });
    }

    let target = input
        .monthly_expenses
        .checked_mul(Decimal::from(input.months_coverage))
        .ok_or_else(|| FinCalcError::InvalidInput {
            field: "monthly_expenses".into(),
            reason: "target fund exceeds the representable range".into(),
        })?;
    let shortfall = (target - input.current_savings).max(Decimal::ZERO);

    let months_to_goal = if input.monthly_savings_capacity > Decimal::ZERO {
        shortfall
            .checked_div(input.monthly_savings_capacity)
            .and_then(|months| months.ceil().to_u32())
            .ok_or_else(|| FinCalcError::InvalidInput {
                field: "monthly_savings_capacity".into(),
                reason: "months to goal exceeds the representable range".into(),
            })?
    } else {
        0
    };

    let result = EmergencyFundResult {
        target_fund: round_currency(target),
        shortfall: round_currency(shortfall),
        months_to_goal,
        recommended_months: recommend_months(input),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Coverage target with additive risk heuristic",
        &serde_json::json!({
            "base_months": BASE_MONTHS,
            "max_months": MAX_MONTHS,
            "job_stability": input.job_stability,
        }),
        Vec::new(),
        elapsed,
        result,
    ))
}
