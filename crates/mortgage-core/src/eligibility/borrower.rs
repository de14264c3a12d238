//! Borrower and loan-request value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::Money;
use crate::MortgageResult;

/// Employment status of the borrower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Salaried,
    SelfEmployed,
    Pensioner,
    Unemployed,
}

/// Borrower financial facts, one applicant per profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BorrowerProfile {
    /// Verified net monthly income.
    pub monthly_net_income: Money,
    /// Existing monthly debt obligations (loans, leases, alimony).
    pub existing_monthly_debts: Money,
    /// Age in whole years at origination.
    pub age_years: u32,
    pub employment: EmploymentStatus,
}

impl BorrowerProfile {
    pub(crate) fn validate(&self) -> MortgageResult<()> {
        if self.monthly_net_income < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "monthly_net_income".into(),
                reason: "Income cannot be negative".into(),
            });
        }
        if self.existing_monthly_debts < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "existing_monthly_debts".into(),
                reason: "Existing obligations cannot be negative".into(),
            });
        }
        Ok(())
    }
}

/// Requested loan terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanRequest {
    /// Requested principal.
    pub principal: Money,
    /// Term in months.
    pub term_months: u32,
    /// Appraised property value.
    pub property_value: Money,
    /// Equity the borrower brings.
    pub down_payment: Money,
}

impl LoanRequest {
    pub(crate) fn validate(&self) -> MortgageResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "principal".into(),
                reason: "Principal must be positive".into(),
            });
        }
        if self.term_months == 0 {
            return Err(MortgageError::InvalidInput {
                field: "term_months".into(),
                reason: "Term must be greater than zero".into(),
            });
        }
        if self.property_value <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "property_value".into(),
                reason: "Property value must be positive".into(),
            });
        }
        if self.down_payment < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "down_payment".into(),
                reason: "Down payment cannot be negative".into(),
            });
        }
        Ok(())
    }
}
