//! Risk-profile eligibility ladder.
//!
//! Maximum borrowing for the same income under each underwriting
//! appetite, from conservative to aggressive.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

use super::policy::RiskProfile;

/// Scenario ladder input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenariosInput {
    /// Verified net monthly income.
    pub monthly_net_income: Money,
    /// Existing monthly debt obligations.
    pub existing_monthly_debts: Money,
    /// Annual rate assumption.
    pub annual_rate: Rate,
    /// Term in months.
    pub term_months: u32,
}

/// Maximum borrowing under one risk profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibilityScenario {
    pub profile: RiskProfile,
    /// Debt-to-income ceiling applied.
    pub dti_limit: Rate,
    /// Payment the income supports under the ceiling.
    pub payment_capacity: Money,
    /// Largest principal that payment amortizes.
    pub max_principal: Money,
}

/// Compute the maximum borrowing ladder across all risk profiles.
pub fn eligibility_scenarios(
    input: &ScenariosInput,
) -> MortgageResult<ComputationOutput<Vec<EligibilityScenario>>> {
    validate(input)?;

    let monthly_rate = input.annual_rate / dec!(12);
    let mut warnings = Vec::new();
    let mut scenarios = Vec::with_capacity(3);

    for profile in RiskProfile::all() {
        let dti_limit = profile.dti_limit();
        let payment_capacity = (input.monthly_net_income * dti_limit
            - input.existing_monthly_debts)
            .max(Decimal::ZERO);
        let max_principal = if payment_capacity > Decimal::ZERO {
            time_value::principal_from_payment(payment_capacity, monthly_rate, input.term_months)?
        } else {
            Decimal::ZERO
        };
        scenarios.push(EligibilityScenario {
            profile,
            dti_limit,
            payment_capacity,
            max_principal,
        });
    }

    if scenarios.iter().all(|s| s.payment_capacity.is_zero()) {
        warnings.push(
            "Existing obligations exhaust the payment capacity at every risk profile".to_string(),
        );
    }

    Ok(with_metadata(
        "Risk-Profile Eligibility Scenarios",
        input,
        warnings,
        scenarios,
    ))
}

fn validate(input: &ScenariosInput) -> MortgageResult<()> {
    if input.monthly_net_income <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "monthly_net_income".into(),
            reason: "Income must be positive".into(),
        });
    }
    if input.existing_monthly_debts < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "existing_monthly_debts".into(),
            reason: "Existing obligations cannot be negative".into(),
        });
    }
    if input.term_months == 0 {
        return Err(MortgageError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be greater than zero".into(),
        });
    }
    if input.annual_rate < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }
    Ok(())
}
