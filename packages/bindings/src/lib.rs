use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_monthly_payment(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::amortization::payment::MonthlyPaymentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::amortization::payment::compute_monthly_payment(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn build_amortization_schedule(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::amortization::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::amortization::schedule::build_amortization_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Eligibility
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_eligibility(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::eligibility::simulation::SimulationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        mortgage_core::eligibility::simulation::simulate(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn qualification_adjustments(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::eligibility::simulation::SimulationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::eligibility::adjustments::qualification_adjustments(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn eligibility_scenarios(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::eligibility::scenarios::ScenariosInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::eligibility::scenarios::eligibility_scenarios(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

/// Simulation input extended with a ladder of stress rates; the host
/// service compares eligibility across rate assumptions in one call.
#[derive(serde::Deserialize)]
struct StressLadderInput {
    #[serde(flatten)]
    input: mortgage_core::eligibility::simulation::SimulationInput,
    stress_rates: Vec<rust_decimal::Decimal>,
}

#[napi]
pub fn simulate_stress_ladder(input_json: String) -> NapiResult<String> {
    let ladder: StressLadderInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let mut results = Vec::with_capacity(ladder.stress_rates.len());
    for rate in ladder.stress_rates {
        let mut scenario = ladder.input.clone();
        scenario.policy.stress_rate = rate;
        let output = mortgage_core::eligibility::simulation::simulate(&scenario)
            .map_err(to_napi_error)?;
        results.push(output);
    }
    serde_json::to_string(&results).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Income
// ---------------------------------------------------------------------------

#[napi]
pub fn cross_validate_income(input_json: String) -> NapiResult<String> {
    let input: mortgage_core::income::validation::IncomeEvidence =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = mortgage_core::income::validation::cross_validate_income(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
