//! Fixed-payment loan amortization.
//!
//! Payment = P * i * (1+i)^n / ((1+i)^n - 1) for monthly rate i over n
//! months; a zero-rate loan is the degenerate case P / n. All intermediate
//! arithmetic stays in full precision; amounts are rounded once for the
//! result, and the yearly schedule is aggregated from unrounded months.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::periods::{compound, months_from_years, periodic_rate};
use crate::rounding::round_currency;
use crate::types::{with_metadata, ComputationOutput, Money, RatePercent, Years};
use crate::FinCalcResult;

/// Input for an amortizing loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed. Must be > 0.
    pub principal: Money,
    /// Annual interest rate as a percentage (7 = 7%). Must be >= 0.
    pub annual_rate_percent: RatePercent,
    /// Loan term in years. Must be > 0.
    pub years: Years,
}

/// One year of the repayment schedule, rounded to whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationYear {
    pub year: u32,
    pub interest_paid: Money,
    pub principal_paid: Money,
    pub ending_balance: Money,
}

/// Result of an amortization calculation, rounded to whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanResult {
    pub months: u32,
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub schedule: Vec<AmortizationYear>,
}

/// Compute the fixed monthly payment and yearly repayment schedule.
pub fn calculate_amortization(input: &LoanInput) -> FinCalcResult<ComputationOutput<LoanResult>> {
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

    let months = months_from_years(input.years, "years")?;
    let monthly_rate = periodic_rate(input.annual_rate_percent, 12);
    let n = Decimal::from(months);

    let overflow = |field: &str| FinCalcError::InvalidInput {
        field: field.into(),
        reason: "amount exceeds the representable range".into(),
    };

    let payment = if monthly_rate.is_zero() {
        input.principal / n
    } else {
        let growth = compound(monthly_rate, months)?;
        input
            .principal
            .checked_mul(monthly_rate)
            .and_then(|v| v.checked_mul(growth))
            .ok_or_else(|| overflow("principal"))?
            / (growth - Decimal::ONE)
    };

    // Checked up front: every schedule accumulator is bounded by payment * n.
    let total_paid = payment.checked_mul(n).ok_or_else(|| overflow("principal"))?;

    // Walk the schedule with the unrounded payment so errors never compound.
    let mut balance = input.principal;
    let mut schedule: Vec<AmortizationYear> = Vec::new();
    let mut year_interest = Decimal::ZERO;
    let mut year_principal = Decimal::ZERO;
    for month in 1..=months {
        let interest = balance * monthly_rate;
        let principal_part = payment - interest;
        balance -= principal_part;
        year_interest += interest;
        year_principal += principal_part;

        if month % 12 == 0 || month == months {
            schedule.push(AmortizationYear {
                year: (month + 11) / 12,
                interest_paid: round_currency(year_interest),
                principal_paid: round_currency(year_principal),
                ending_balance: round_currency(balance.max(Decimal::ZERO)),
            });
            year_interest = Decimal::ZERO;
            year_principal = Decimal::ZERO;
        }
    }

    let total_paid = round_currency(total_paid);
    let principal = round_currency(input.principal);
    let result = LoanResult {
        months,
        monthly_payment: round_currency(payment),
        total_paid,
        total_interest: total_paid - principal,
        schedule,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Fixed-payment amortization at monthly compounding",
        &serde_json::json!({
            "monthly_rate": monthly_rate.to_string(),
            "months": months,
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

    fn run(principal: Decimal, rate: Decimal, years: Decimal) -> LoanResult {
        calculate_amortization(&LoanInput {
            principal,
            annual_rate_percent: rate,
            years,
        })
        .unwrap()
        .result
    }

    #[test]
    fn thirty_year_mortgage_payment() {
        // 400k at 7% over 30 years is the classic ~2,661/month
        let r = run(dec!(400_000), dec!(7), dec!(30));
        assert_eq!(r.months, 360);
        assert_eq!(r.monthly_payment, dec!(2_661));
        assert!(r.total_interest > dec!(500_000));
    }

    #[test]
    fn zero_rate_splits_principal_evenly() {
        let r = run(dec!(120_000), Decimal::ZERO, dec!(10));
        assert_eq!(r.monthly_payment, dec!(1_000));
        assert_eq!(r.total_paid, dec!(120_000));
        assert_eq!(r.total_interest, Decimal::ZERO);
    }

    #[test]
    fn total_paid_is_interest_plus_principal() {
        for (p, rate, years) in [
            (dec!(250_000), dec!(6.5), dec!(15)),
            (dec!(9_999), dec!(18), dec!(3)),
            (dec!(1_000_000), dec!(0.25), dec!(30)),
        ] {
            let r = run(p, rate, years);
            let diff = (r.total_paid - (r.total_interest + round_currency(p))).abs();
            assert!(diff <= Decimal::ONE, "identity off by {diff}");
            assert!(r.monthly_payment > Decimal::ZERO);
        }
    }

    #[test]
    fn schedule_runs_to_zero_balance() {
        let r = run(dec!(300_000), dec!(5.5), dec!(20));
        assert_eq!(r.schedule.len(), 20);
        let last = r.schedule.last().unwrap();
        assert!(last.ending_balance <= Decimal::ONE);
        assert_eq!(r.schedule.first().unwrap().year, 1);
        assert_eq!(last.year, 20);
    }

    #[test]
    fn schedule_interest_declines_each_year() {
        let r = run(dec!(200_000), dec!(8), dec!(10));
        for pair in r.schedule.windows(2) {
            assert!(pair[1].interest_paid < pair[0].interest_paid);
        }
    }

    #[test]
    fn schedule_totals_reconcile_with_summary() {
        let r = run(dec!(400_000), dec!(7), dec!(30));
        let interest_sum: Decimal = r.schedule.iter().map(|y| y.interest_paid).sum();
        // Per-year rounding can drift by up to half a unit per entry
        assert!((interest_sum - r.total_interest).abs() <= dec!(30));
    }

    #[test]
    fn partial_final_year_gets_own_entry() {
        let r = run(dec!(50_000), dec!(9), dec!(2.5));
        assert_eq!(r.months, 30);
        assert_eq!(r.schedule.len(), 3);
        assert_eq!(r.schedule.last().unwrap().year, 3);
    }

    #[test]
    fn extreme_rate_reports_error_instead_of_overflowing() {
        let err = calculate_amortization(&LoanInput {
            principal: dec!(400_000),
            annual_rate_percent: dec!(1_200),
            years: dec!(30),
        });
        assert!(matches!(err, Err(FinCalcError::InvalidInput { .. })));
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(calculate_amortization(&LoanInput {
            principal: Decimal::ZERO,
            annual_rate_percent: dec!(5),
            years: dec!(10),
        })
        .is_err());
        assert!(calculate_amortization(&LoanInput {
            principal: dec!(100_000),
            annual_rate_percent: dec!(-1),
            years: dec!(10),
        })
        .is_err());
        assert!(calculate_amortization(&LoanInput {
            principal: dec!(100_000),
            annual_rate_percent: dec!(5),
            years: dec!(-2),
        })
        .is_err());
    }
}
