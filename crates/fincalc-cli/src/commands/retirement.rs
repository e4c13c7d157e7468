use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::retirement::{calculate_pia, calculate_rmd, PiaInput, RmdInput};

use crate::input;

/// Arguments for a Social Security benefit estimate
#[derive(Args)]
pub struct SocialSecurityArgs {
    /// Average Indexed Monthly Earnings
    #[arg(long)]
    pub aime: Option<Decimal>,

    /// Age at which benefits are claimed (62 through 70)
    #[arg(long)]
    pub claim_age: Option<u32>,

    /// Full retirement age
    #[arg(long, default_value = "67")]
    pub full_retirement_age: u32,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a required minimum distribution
#[derive(Args)]
pub struct RmdArgs {
    /// Account balance as of December 31 of the prior year
    #[arg(long)]
    pub balance: Decimal,

    /// Account owner's age this year
    #[arg(long)]
    pub age: u32,
}

pub fn run_social_security(
    args: SocialSecurityArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let pia_input: PiaInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        PiaInput {
            aime: args.aime.ok_or("--aime is required (or provide --input)")?,
            claim_age: args.claim_age,
            full_retirement_age: args.full_retirement_age,
        }
    };
    let result = calculate_pia(&pia_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_rmd(args: RmdArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let result = calculate_rmd(&RmdInput {
        balance: args.balance,
        age: args.age,
    })?;
    Ok(serde_json::to_value(result)?)
}
