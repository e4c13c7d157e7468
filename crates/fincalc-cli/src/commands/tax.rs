use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::tax::{calculate_tax, Regime, TaxInput};

use crate::input;

#[derive(Debug, Clone, ValueEnum)]
pub enum RegimeArg {
    New,
    Old,
}

impl From<RegimeArg> for Regime {
    fn from(value: RegimeArg) -> Self {
        match value {
            RegimeArg::New => Regime::New,
            RegimeArg::Old => Regime::Old,
        }
    }
}

/// Arguments for progressive tax calculation
#[derive(Args)]
pub struct TaxArgs {
    /// Gross annual income
    #[arg(long)]
    pub gross_income: Option<Decimal>,

    /// Bracket table to apply
    #[arg(long, value_enum)]
    pub regime: Option<RegimeArg>,

    /// Total deductions claimed
    #[arg(long, default_value = "0")]
    pub deductions: Decimal,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_tax(args: TaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_input: TaxInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        TaxInput {
            gross_income: args
                .gross_income
                .ok_or("--gross-income is required (or provide --input)")?,
            regime: args
                .regime
                .ok_or("--regime is required (or provide --input)")?
                .into(),
            deductions: args.deductions,
        }
    };
    let result = calculate_tax(&tax_input)?;
    Ok(serde_json::to_value(result)?)
}
