use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_core::amortization::payment::{self, MonthlyPaymentInput};
use mortgage_core::amortization::schedule::{self, ScheduleInput};

use crate::input;

/// Arguments for the monthly payment calculation
#[derive(Args)]
pub struct PaymentArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual nominal interest rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Loan principal
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual nominal interest rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Path to a JSON input file (overrides individual flags; required
    /// for a dated schedule)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pay_input: MonthlyPaymentInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => MonthlyPaymentInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
        },
    };

    let result = payment::compute_monthly_payment(&pay_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sched_input: ScheduleInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => ScheduleInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
            first_payment_date: None,
        },
    };

    let result = schedule::build_amortization_schedule(&sched_input)?;
    Ok(serde_json::to_value(result)?)
}
