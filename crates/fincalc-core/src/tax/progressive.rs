//! Marginal (progressive) tax computation.
//!
//! Tax is assessed bracket by bracket: only the slice of taxable income
//! falling inside a bracket is taxed at that bracket's rate. The total is
//! therefore continuous in taxable income; crossing a threshold changes the
//! marginal rate, never the tax on income already below it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::rounding::round_currency;
use crate::tax::brackets::Regime;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::FinCalcResult;

/// Input for a progressive tax calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxInput {
    /// Gross annual income. Negative values are treated as zero income.
    pub gross_income: Money,
    /// Bracket table to apply.
    pub regime: Regime,
    /// Total deductions claimed. Must be non-negative; capped at gross income.
    pub deductions: Money,
}

/// Result of a progressive tax calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_income: Money,
    pub total_deductions: Money,
    pub taxable_income: Money,
    /// Tax payable, rounded half-up to a whole currency unit.
    pub tax_payable: Money,
}

/// Compute tax payable under the selected regime's marginal brackets.
pub fn calculate_tax(input: &TaxInput) -> FinCalcResult<ComputationOutput<TaxResult>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.deductions < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "deductions".into(),
            reason: "deductions must be >= 0".into(),
        });
    }

    let gross = input.gross_income.max(Decimal::ZERO);
    if input.gross_income < Decimal::ZERO {
        warnings.push("gross_income was negative; treated as 0".into());
    }

    let taxable = (gross - input.deductions).max(Decimal::ZERO);
    if input.deductions > gross {
        warnings.push("deductions exceed gross income; taxable income floored at 0".into());
    }

    let mut tax = Decimal::ZERO;
    let mut lower = Decimal::ZERO;
    for bracket in input.regime.brackets() {
        if taxable <= lower {
            break;
        }
        let slice = match bracket.upper {
            Some(upper) => (taxable - lower).min(upper - lower),
            None => taxable - lower,
        };
        tax += slice * bracket.rate;
        if let Some(upper) = bracket.upper {
            lower = upper;
        }
    }

    let result = TaxResult {
        gross_income: gross,
        total_deductions: input.deductions,
        taxable_income: taxable,
        tax_payable: round_currency(tax),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Marginal bracket walk over regime table",
        &serde_json::json!({
            "regime": input.regime,
            "brackets": input.regime.brackets().len(),
        }),
        warnings,
        elapsed,
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn tax_for(gross: Decimal, regime: Regime, deductions: Decimal) -> Decimal {
        let input = TaxInput {
            gross_income: gross,
            regime,
            deductions,
        };
        calculate_tax(&input).unwrap().result.tax_payable
    }

    #[test]
    fn new_regime_one_million_taxable() {
        // 300k at 0% + 300k at 5% + 300k at 10% + 100k at 15%
        let tax = tax_for(dec!(1_000_000), Regime::New, Decimal::ZERO);
        assert_eq!(tax, dec!(60_000));
    }

    #[test]
    fn old_regime_below_exemption_after_deductions() {
        // 200k gross - 50k deductions = 150k, under the 250k exemption
        let tax = tax_for(dec!(200_000), Regime::Old, dec!(50_000));
        assert_eq!(tax, Decimal::ZERO);
    }

    #[test]
    fn old_regime_top_bracket() {
        // 250k at 5% + 500k at 20% + 500k at 30% = 12.5k + 100k + 150k
        let tax = tax_for(dec!(1_500_000), Regime::Old, Decimal::ZERO);
        assert_eq!(tax, dec!(262_500));
    }

    #[test]
    fn marginal_never_flat_rate() {
        // A flat 10% on 700k would be 70k; marginal is 15k + 10k
        let tax = tax_for(dec!(700_000), Regime::New, Decimal::ZERO);
        assert_eq!(tax, dec!(25_000));
    }

    #[test]
    fn negative_income_treated_as_zero() {
        let out = calculate_tax(&TaxInput {
            gross_income: dec!(-5_000),
            regime: Regime::New,
            deductions: Decimal::ZERO,
        })
        .unwrap();
        assert_eq!(out.result.taxable_income, Decimal::ZERO);
        assert_eq!(out.result.tax_payable, Decimal::ZERO);
        assert!(!out.warnings.is_empty());
    }

    #[test]
    fn deductions_above_gross_floor_taxable_at_zero() {
        let out = calculate_tax(&TaxInput {
            gross_income: dec!(100_000),
            regime: Regime::Old,
            deductions: dec!(150_000),
        })
        .unwrap();
        assert_eq!(out.result.taxable_income, Decimal::ZERO);
        assert_eq!(out.result.tax_payable, Decimal::ZERO);
    }

    #[test]
    fn negative_deductions_rejected() {
        let err = calculate_tax(&TaxInput {
            gross_income: dec!(100_000),
            regime: Regime::New,
            deductions: dec!(-1),
        });
        assert!(err.is_err());
    }

    #[test]
    fn monotone_in_gross_income() {
        for regime in [Regime::New, Regime::Old] {
            let mut prev = Decimal::ZERO;
            let mut income = Decimal::ZERO;
            while income <= dec!(2_000_000) {
                let tax = tax_for(income, regime, Decimal::ZERO);
                assert!(tax >= prev, "{regime:?} tax decreased at {income}");
                prev = tax;
                income += dec!(50_000);
            }
        }
    }

    #[test]
    fn continuous_at_bracket_boundaries() {
        for regime in [Regime::New, Regime::Old] {
            for bracket in regime.brackets() {
                let Some(upper) = bracket.upper else { continue };
                let below = tax_for(upper - dec!(1), regime, Decimal::ZERO);
                let above = tax_for(upper + dec!(1), regime, Decimal::ZERO);
                // Two units of income at <= 30% marginal rate, plus rounding
                assert!(
                    above - below <= dec!(2),
                    "{regime:?} jump at {upper}: {below} -> {above}"
                );
            }
        }
    }
}
