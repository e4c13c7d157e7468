use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::growth::{calculate_lumpsum, calculate_sip, LumpsumInput, SipInput};

use crate::input;

/// Arguments for a SIP projection
#[derive(Args)]
pub struct SipArgs {
    /// Monthly contribution amount
    #[arg(long)]
    pub contribution: Option<Decimal>,

    /// Expected annual return in percent (12 = 12%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for a lump-sum growth projection
#[derive(Args)]
pub struct LumpsumArgs {
    /// Amount invested today
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Expected annual return in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Investment horizon in years
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Compounding periods per year (12 = monthly, 1 = annual)
    #[arg(long, default_value = "12")]
    pub compounds_per_year: u32,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_sip(args: SipArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sip_input: SipInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        SipInput {
            monthly_contribution: args
                .contribution
                .ok_or("--contribution is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        }
    };
    let result = calculate_sip(&sip_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_growth(args: LumpsumArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let lumpsum_input: LumpsumInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        LumpsumInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
            compounds_per_year: args.compounds_per_year,
        }
    };
    let result = calculate_lumpsum(&lumpsum_input)?;
    Ok(serde_json::to_value(result)?)
}
