//! Stress-tested mortgage eligibility simulation.
//!
//! Evaluates a borrower and loan request against an injected lending
//! policy: payment at the policy stress rate, both affordability ratios,
//! the maximum principal the policy supports, and the full amortization
//! schedule. Threshold breaches are reported as violations in the
//! result, never as errors.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::schedule::{self, AmortizationPeriod};
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

use super::borrower::{BorrowerProfile, EmploymentStatus, LoanRequest};
use super::policy::LendingPolicy;
use super::ratios;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Eligibility simulation input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationInput {
    pub borrower: BorrowerProfile,
    pub loan: LoanRequest,
    pub policy: LendingPolicy,
}

/// Policy rule identifiers used in violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyRule {
    MaxDebtToIncome,
    MaxLoanToValue,
    MinBorrowerAge,
    MaxAgeAtMaturity,
    MaxTermMonths,
    InsufficientDownPayment,
}

/// A breached policy rule: the observed value against its limit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyViolation {
    pub rule: PolicyRule,
    pub actual: Decimal,
    pub limit: Decimal,
}

/// Eligibility verdict with complete diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// True when no policy rule is breached.
    pub eligible: bool,
    /// Level monthly payment at the policy stress rate.
    pub monthly_payment: Money,
    /// (existing debts + stressed payment) / net income.
    pub debt_to_income: Rate,
    /// Requested principal / property value.
    pub loan_to_value: Rate,
    /// Largest principal the policy supports for this borrower.
    pub max_eligible_principal: Money,
    /// Equity needed to carry the property at the maximum principal.
    pub required_down_payment: Money,
    /// Every breached rule, with actual and limit values.
    pub violations: Vec<PolicyViolation>,
    /// Full payment schedule at the stress rate, eligible or not.
    pub schedule: Vec<AmortizationPeriod>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run the eligibility simulation. Pure and deterministic: identical
/// inputs produce byte-identical serialized results.
pub fn simulate(input: &SimulationInput) -> MortgageResult<ComputationOutput<SimulationResult>> {
    input.borrower.validate()?;
    input.loan.validate()?;
    input.policy.validate()?;

    let mut warnings = Vec::new();
    let assessment = assess(&input.borrower, &input.loan, &input.policy, &mut warnings)?;

    let (_, periods) = schedule::schedule_periods(
        input.loan.principal,
        input.policy.stress_rate,
        input.loan.term_months,
        None,
    )?;

    let result = SimulationResult {
        eligible: assessment.violations.is_empty(),
        monthly_payment: assessment.monthly_payment,
        debt_to_income: assessment.debt_to_income,
        loan_to_value: assessment.loan_to_value,
        max_eligible_principal: assessment.max_eligible_principal,
        required_down_payment: assessment.required_down_payment,
        violations: assessment.violations,
        schedule: periods,
    };

    Ok(with_metadata(
        "Stress-Tested Mortgage Eligibility Simulation",
        input,
        warnings,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Constraint evaluation
// ---------------------------------------------------------------------------

/// Assessment without the schedule. Shared with the qualification
/// adjustment search, which probes many candidate requests.
pub(crate) struct Assessment {
    pub monthly_payment: Money,
    pub debt_to_income: Rate,
    pub loan_to_value: Rate,
    pub max_eligible_principal: Money,
    pub required_down_payment: Money,
    pub violations: Vec<PolicyViolation>,
}

pub(crate) fn assess(
    borrower: &BorrowerProfile,
    loan: &LoanRequest,
    policy: &LendingPolicy,
    warnings: &mut Vec<String>,
) -> MortgageResult<Assessment> {
    let monthly_rate = policy.stress_rate / dec!(12);
    let monthly_payment = time_value::level_payment(loan.principal, monthly_rate, loan.term_months)?;

    // Ratios are always computed, never short-circuited: an ineligible
    // result still carries complete diagnostics.
    let debt_to_income = ratios::debt_to_income(borrower, monthly_payment)?;
    let loan_to_value = ratios::loan_to_value(loan)?;

    // Capacity left under the debt-to-income ceiling after existing
    // obligations.
    let payment_capacity =
        borrower.monthly_net_income * policy.max_debt_to_income - borrower.existing_monthly_debts;
    let max_by_income = if payment_capacity > Decimal::ZERO {
        time_value::principal_from_payment(payment_capacity, monthly_rate, loan.term_months)?
    } else {
        warnings.push(
            "Existing obligations exhaust the payment capacity under the debt-to-income ceiling"
                .to_string(),
        );
        Decimal::ZERO
    };
    let max_by_ltv = loan.property_value * policy.max_loan_to_value;
    let max_eligible_principal = max_by_income.min(max_by_ltv);

    let required_down_payment =
        (loan.property_value - max_eligible_principal).max(Decimal::ZERO);

    let mut violations = Vec::new();

    if debt_to_income > policy.max_debt_to_income {
        violations.push(PolicyViolation {
            rule: PolicyRule::MaxDebtToIncome,
            actual: debt_to_income,
            limit: policy.max_debt_to_income,
        });
    }
    if loan_to_value > policy.max_loan_to_value {
        violations.push(PolicyViolation {
            rule: PolicyRule::MaxLoanToValue,
            actual: loan_to_value,
            limit: policy.max_loan_to_value,
        });
    }
    if borrower.age_years < policy.min_borrower_age {
        violations.push(PolicyViolation {
            rule: PolicyRule::MinBorrowerAge,
            actual: Decimal::from(borrower.age_years),
            limit: Decimal::from(policy.min_borrower_age),
        });
    }
    let age_at_maturity = borrower.age_years + loan.term_months.div_ceil(12);
    if age_at_maturity > policy.max_age_at_maturity {
        violations.push(PolicyViolation {
            rule: PolicyRule::MaxAgeAtMaturity,
            actual: Decimal::from(age_at_maturity),
            limit: Decimal::from(policy.max_age_at_maturity),
        });
    }
    if loan.term_months > policy.max_term_months {
        violations.push(PolicyViolation {
            rule: PolicyRule::MaxTermMonths,
            actual: Decimal::from(loan.term_months),
            limit: Decimal::from(policy.max_term_months),
        });
    }
    let financeable = loan.property_value - loan.down_payment;
    if loan.principal > financeable {
        violations.push(PolicyViolation {
            rule: PolicyRule::InsufficientDownPayment,
            actual: loan.principal,
            limit: financeable,
        });
    }

    if let Some(threshold) = policy.dti_warning_threshold {
        if debt_to_income > threshold && debt_to_income <= policy.max_debt_to_income {
            warnings.push(format!(
                "Debt-to-income {} exceeds the elevated-risk threshold {}",
                debt_to_income, threshold
            ));
        }
    }
    if borrower.employment == EmploymentStatus::Unemployed
        && borrower.monthly_net_income > Decimal::ZERO
    {
        warnings.push(
            "Income reported for an unemployed borrower; verify the income source".to_string(),
        );
    }

    Ok(Assessment {
        monthly_payment,
        debt_to_income,
        loan_to_value,
        max_eligible_principal,
        required_down_payment,
        violations,
    })
}
