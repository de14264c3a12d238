//! Debt-to-income and loan-to-value ratio evaluation.

use rust_decimal::Decimal;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

use super::borrower::{BorrowerProfile, LoanRequest};

/// (existing debts + proposed payment) / net income.
///
/// Monotonically increasing in `proposed_payment` for a fixed profile.
pub fn debt_to_income(profile: &BorrowerProfile, proposed_payment: Money) -> MortgageResult<Rate> {
    profile.validate()?;
    if proposed_payment < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "proposed_payment".into(),
            reason: "Proposed payment cannot be negative".into(),
        });
    }
    if profile.monthly_net_income.is_zero() {
        return Err(MortgageError::InvalidInput {
            field: "monthly_net_income".into(),
            reason: "Debt-to-income is undefined for zero income".into(),
        });
    }
    Ok((profile.existing_monthly_debts + proposed_payment) / profile.monthly_net_income)
}

/// Requested principal / appraised property value.
pub fn loan_to_value(loan: &LoanRequest) -> MortgageResult<Rate> {
    loan.validate()?;
    Ok(loan.principal / loan.property_value)
}
