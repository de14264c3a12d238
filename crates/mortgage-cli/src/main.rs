mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{PaymentArgs, ScheduleArgs};
use commands::eligibility::{AdjustmentsArgs, ScenariosArgs, SimulateArgs};
use commands::income::ValidateIncomeArgs;

/// Mortgage affordability and eligibility calculations
#[derive(Parser)]
#[command(
    name = "mcalc",
    version,
    about = "Mortgage affordability and eligibility calculations",
    long_about = "A CLI for mortgage affordability calculations with decimal \
                  precision. Supports level payments, amortization schedules, \
                  policy-driven eligibility simulation, qualification \
                  adjustments, risk-profile scenarios, and cross-document \
                  income validation."
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
    /// Compute the level monthly payment for an amortizing loan
    Payment(PaymentArgs),
    /// Build the full amortization schedule
    Schedule(ScheduleArgs),
    /// Run the policy-driven eligibility simulation
    Simulate(SimulateArgs),
    /// Find the adjustments that would qualify an ineligible request
    Adjustments(AdjustmentsArgs),
    /// Maximum borrowing per risk profile
    Scenarios(ScenariosArgs),
    /// Cross-validate income figures extracted from documents
    ValidateIncome(ValidateIncomeArgs),
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
        Commands::Payment(args) => commands::amortization::run_payment(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Simulate(args) => commands::eligibility::run_simulate(args),
        Commands::Adjustments(args) => commands::eligibility::run_adjustments(args),
        Commands::Scenarios(args) => commands::eligibility::run_scenarios(args),
        Commands::ValidateIncome(args) => commands::income::run_validate_income(args),
        Commands::Version => {
            println!("mcalc {}", env!("CARGO_PKG_VERSION"));
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
