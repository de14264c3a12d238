use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use mortgage_core::eligibility::adjustments;
use mortgage_core::eligibility::scenarios::{self, ScenariosInput};
use mortgage_core::eligibility::simulation::{self, SimulationInput};

use crate::input;

/// Arguments for the eligibility simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to a JSON input file with borrower, loan, and policy
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the qualification adjustment search
#[derive(Args)]
pub struct AdjustmentsArgs {
    /// Path to a JSON input file with borrower, loan, and policy
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the risk-profile scenario ladder
#[derive(Args)]
pub struct ScenariosArgs {
    /// Verified net monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Existing monthly debt obligations
    #[arg(long)]
    pub existing_debts: Option<Decimal>,

    /// Annual rate assumption (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long, default_value = "300")]
    pub term_months: u32,

    /// Path to a JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input: SimulationInput = input::load(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for the eligibility simulation")?;
    let result = simulation::simulate(&sim_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_adjustments(args: AdjustmentsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sim_input: SimulationInput = input::load(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for the adjustment search")?;
    let result = adjustments::qualification_adjustments(&sim_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_scenarios(args: ScenariosArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let sc_input: ScenariosInput = match input::load(args.input.as_deref())? {
        Some(parsed) => parsed,
        None => ScenariosInput {
            monthly_net_income: args
                .income
                .ok_or("--income is required (or provide --input)")?,
            existing_monthly_debts: args.existing_debts.unwrap_or(dec!(0)),
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term_months,
        },
    };

    let result = scenarios::eligibility_scenarios(&sc_input)?;
    Ok(serde_json::to_value(result)?)
}
