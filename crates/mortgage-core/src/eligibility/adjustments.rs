//! Qualification adjustments for ineligible requests.
//!
//! Answers "what would have to change": a lower purchase price, more
//! equity, or a higher income that clears every policy rule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{with_metadata, ComputationOutput, Money};
use crate::MortgageResult;

use super::borrower::{BorrowerProfile, LoanRequest};
use super::simulation::{self, SimulationInput};

/// Price reductions probed when searching for an eligible purchase price.
const PRICE_REDUCTION_STEPS: [Decimal; 5] = [
    dec!(0),
    dec!(50_000),
    dec!(100_000),
    dec!(200_000),
    dec!(300_000),
];

/// Income search increment.
const INCOME_STEP: Decimal = dec!(1_000);

/// Largest income increase probed.
const MAX_INCOME_INCREASE: Decimal = dec!(20_000);

/// Adjustments that would turn an ineligible request eligible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualificationAdjustments {
    /// Whether the request qualifies as submitted.
    pub eligible_as_requested: bool,
    /// Highest probed purchase price that qualifies, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_price: Option<Money>,
    /// Equity needed to carry the requested price at the policy maximum.
    pub required_down_payment: Money,
    /// Smallest probed income that qualifies at the requested price, if
    /// any. None when something other than income blocks the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_income: Option<Money>,
}

/// Search the fixed adjustment grids for the changes that would qualify
/// the request.
pub fn qualification_adjustments(
    input: &SimulationInput,
) -> MortgageResult<ComputationOutput<QualificationAdjustments>> {
    input.borrower.validate()?;
    input.loan.validate()?;
    input.policy.validate()?;

    let mut discard = Vec::new();
    let base = simulation::assess(&input.borrower, &input.loan, &input.policy, &mut discard)?;
    let eligible_as_requested = base.violations.is_empty();

    // Price search: the principal shrinks with the price, equity is fixed.
    let mut eligible_price = None;
    for reduction in PRICE_REDUCTION_STEPS {
        let price = input.loan.property_value - reduction;
        if price <= Decimal::ZERO {
            continue;
        }
        let principal = price - input.loan.down_payment;
        if principal <= Decimal::ZERO {
            // Fully funded by the available equity.
            eligible_price = Some(price);
            break;
        }
        let probe = LoanRequest {
            principal,
            property_value: price,
            ..input.loan.clone()
        };
        let assessment =
            simulation::assess(&input.borrower, &probe, &input.policy, &mut discard)?;
        if assessment.violations.is_empty() {
            eligible_price = Some(price);
            break;
        }
    }

    // Income search at the requested price.
    let mut required_income = None;
    let mut increase = Decimal::ZERO;
    while increase <= MAX_INCOME_INCREASE {
        let probe = BorrowerProfile {
            monthly_net_income: input.borrower.monthly_net_income + increase,
            ..input.borrower.clone()
        };
        let assessment =
            simulation::assess(&probe, &input.loan, &input.policy, &mut discard)?;
        if assessment.violations.is_empty() {
            required_income = Some(probe.monthly_net_income);
            break;
        }
        increase += INCOME_STEP;
    }

    let result = QualificationAdjustments {
        eligible_as_requested,
        eligible_price,
        required_down_payment: base.required_down_payment,
        required_income,
    };

    Ok(with_metadata(
        "Qualification Adjustment Search",
        input,
        Vec::new(),
        result,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::borrower::EmploymentStatus;
    use crate::eligibility::policy::{LendingPolicy, PropertyType, RiskProfile};
    use rust_decimal_macros::dec;

    fn stretched_input() -> SimulationInput {
        SimulationInput {
            borrower: BorrowerProfile {
                monthly_net_income: dec!(10_000),
                existing_monthly_debts: dec!(0),
                age_years: 35,
                employment: EmploymentStatus::Salaried,
            },
            loan: LoanRequest {
                principal: dec!(700_000),
                term_months: 300,
                property_value: dec!(1_000_000),
                down_payment: dec!(300_000),
            },
            policy: LendingPolicy::for_profile(
                PropertyType::FirstHome,
                RiskProfile::Standard,
                dec!(0.05),
            ),
        }
    }

    #[test]
    fn test_price_reduction_found() {
        // The request fails on debt-to-income; a 200k cheaper property
        // clears it.
        let out = qualification_adjustments(&stretched_input()).unwrap();
        let r = &out.result;
        assert!(!r.eligible_as_requested);
        assert_eq!(r.eligible_price, Some(dec!(800_000)));
    }

    #[test]
    fn test_required_income_found() {
        let out = qualification_adjustments(&stretched_input()).unwrap();
        assert_eq!(out.result.required_income, Some(dec!(12_000)));
    }

    #[test]
    fn test_income_cannot_fix_ltv() {
        let mut input = stretched_input();
        input.borrower.monthly_net_income = dec!(50_000);
        input.loan.principal = dec!(900_000);
        input.loan.down_payment = dec!(100_000);
        let out = qualification_adjustments(&input).unwrap();
        // 90% financing breaches the LTV ceiling at any income.
        assert_eq!(out.result.required_income, None);
    }
}
