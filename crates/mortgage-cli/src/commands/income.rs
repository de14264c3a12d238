use clap::Args;
use serde_json::Value;

use mortgage_core::income::validation::{self, IncomeEvidence};

use crate::input;

/// Arguments for cross-document income validation
#[derive(Args)]
pub struct ValidateIncomeArgs {
    /// Path to a JSON input file with the extracted income figures
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_validate_income(args: ValidateIncomeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let evidence: IncomeEvidence = input::load(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for income validation")?;
    let result = validation::cross_validate_income(&evidence)?;
    Ok(serde_json::to_value(result)?)
}
