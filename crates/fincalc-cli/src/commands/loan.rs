use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::loan::{calculate_amortization, LoanInput};

use crate::input;

/// Arguments for an EMI / mortgage calculation
#[derive(Args)]
pub struct EmiArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (7 = 7%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Loan term in years
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Include the yearly amortization schedule in the output
    #[arg(long)]
    pub schedule: bool,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input: LoanInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };
    let result = calculate_amortization(&loan_input)?;
    let mut value = serde_json::to_value(result)?;

    // The schedule is verbose; only emit it when asked for
    if !args.schedule {
        if let Some(result_obj) = value.get_mut("result").and_then(Value::as_object_mut) {
            result_obj.remove("schedule");
        }
    }
    Ok(value)
}
