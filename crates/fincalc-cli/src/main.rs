mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::growth::{LumpsumArgs, SipArgs};
use commands::loan::EmiArgs;
use commands::planning::{AssessArgs, EmergencyFundArgs};
use commands::retirement::{RmdArgs, SocialSecurityArgs};
use commands::tax::TaxArgs;

/// Personal-finance calculators
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Personal-finance calculators with decimal precision",
    long_about = "Calculators for everyday financial planning: progressive income \
                  tax, SIP and lump-sum growth, loan EMIs with amortization \
                  schedules, emergency-fund sizing, Social Security benefits, \
                  and required minimum distributions."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Progressive income tax for a regime's bracket table
    Tax(TaxArgs),
    /// Future value of a recurring monthly investment
    Sip(SipArgs),
    /// Compound growth of a one-time investment
    Growth(LumpsumArgs),
    /// Fixed monthly loan payment and amortization schedule
    Emi(EmiArgs),
    /// Emergency-fund target, shortfall, and months to goal
    EmergencyFund(EmergencyFundArgs),
    /// Score a financial growth-level assessment
    Assess(AssessArgs),
    /// Social Security benefit from AIME bend points
    SocialSecurity(SocialSecurityArgs),
    /// Required minimum distribution for the year
    Rmd(RmdArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Tax(args) => commands::tax::run_tax(args),
        Commands::Sip(args) => commands::growth::run_sip(args),
        Commands::Growth(args) => commands::growth::run_growth(args),
        Commands::Emi(args) => commands::loan::run_emi(args),
        Commands::EmergencyFund(args) => commands::planning::run_emergency_fund(args),
        Commands::Assess(args) => commands::planning::run_assess(args),
        Commands::SocialSecurity(args) => commands::retirement::run_social_security(args),
        Commands::Rmd(args) => commands::retirement::run_rmd(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
