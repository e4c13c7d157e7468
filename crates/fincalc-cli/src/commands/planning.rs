use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::planning::{
    calculate_emergency_fund, level_descriptor, score_assessment, EmergencyFundInput,
    JobStability,
};

use crate::input;

#[derive(Debug, Clone, ValueEnum)]
pub enum JobStabilityArg {
    Stable,
    Contract,
    Unstable,
}

impl From<JobStabilityArg> for JobStability {
    fn from(value: JobStabilityArg) -> Self {
        match value {
            JobStabilityArg::Stable => JobStability::Stable,
            JobStabilityArg::Contract => JobStability::Contract,
            JobStabilityArg::Unstable => JobStability::Unstable,
        }
    }
}

/// Arguments for emergency-fund sizing
#[derive(Args)]
pub struct EmergencyFundArgs {
    /// Total monthly household expenses
    #[arg(long)]
    pub monthly_expenses: Option<Decimal>,

    /// Months of coverage to target
    #[arg(long, default_value = "6")]
    pub months_coverage: u32,

    /// Savings already earmarked for emergencies
    #[arg(long, default_value = "0")]
    pub current_savings: Decimal,

    /// Amount set aside each month toward the fund
    #[arg(long, default_value = "0")]
    pub savings_capacity: Decimal,

    /// How secure the primary income source is
    #[arg(long, value_enum, default_value = "stable")]
    pub job_stability: JobStabilityArg,

    /// Number of dependents in the household
    #[arg(long, default_value = "0")]
    pub dependents: u32,

    /// Independent income streams
    #[arg(long, default_value = "1")]
    pub income_streams: u32,

    /// Path to a JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for assessment scoring
#[derive(Args)]
pub struct AssessArgs {
    /// Per-question scores from 1 to 5, comma separated (e.g. 4,5,3,2,4,3)
    #[arg(long, value_delimiter = ',', required = true)]
    pub scores: Vec<u8>,
}

pub fn run_emergency_fund(args: EmergencyFundArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fund_input: EmergencyFundInput = if let Some(ref path) = args.input {
        input::file::read_document(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        EmergencyFundInput {
            monthly_expenses: args
                .monthly_expenses
                .ok_or("--monthly-expenses is required (or provide --input)")?,
            months_coverage: args.months_coverage,
            current_savings: args.current_savings,
            monthly_savings_capacity: args.savings_capacity,
            job_stability: args.job_stability.into(),
            dependents: args.dependents,
            income_streams: args.income_streams,
        }
    };
    let result = calculate_emergency_fund(&fund_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_assess(args: AssessArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let level = score_assessment(&args.scores)?;
    let descriptor = level_descriptor(level).ok_or("no descriptor for computed level")?;
    Ok(serde_json::json!({
        "result": {
            "level": descriptor.level,
            "name": descriptor.name,
            "summary": descriptor.summary,
            "answers": args.scores.len(),
        },
    }))
}
