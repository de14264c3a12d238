//! Level monthly payment for amortizing mortgage loans.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Monthly payment input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPaymentInput {
    /// Loan principal.
    pub principal: Money,
    /// Annual nominal interest rate (0.05 = 5%).
    pub annual_rate: Rate,
    /// Term in months.
    pub term_months: u32,
}

/// Monthly payment output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyPaymentOutput {
    /// Level monthly payment.
    pub monthly_payment: Money,
    /// Monthly periodic rate applied.
    pub monthly_rate: Rate,
    /// Total paid over the full term.
    pub total_paid: Money,
    /// Total interest over the full term.
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the level monthly payment for an amortizing loan.
pub fn compute_monthly_payment(
    input: &MonthlyPaymentInput,
) -> MortgageResult<ComputationOutput<MonthlyPaymentOutput>> {
    validate(input)?;

    let monthly_rate = input.annual_rate / dec!(12);
    let monthly_payment =
        time_value::level_payment(input.principal, monthly_rate, input.term_months)?;
    let total_paid = monthly_payment * Decimal::from(input.term_months);
    let total_interest = total_paid - input.principal;

    let output = MonthlyPaymentOutput {
        monthly_payment,
        monthly_rate,
        total_paid,
        total_interest,
    };

    Ok(with_metadata(
        "Level-Payment Amortization Formula",
        input,
        Vec::new(),
        output,
    ))
}

fn validate(input: &MonthlyPaymentInput) -> MortgageResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn standard_input() -> MonthlyPaymentInput {
        MonthlyPaymentInput {
            principal: dec!(300_000),
            annual_rate: dec!(0.05),
            term_months: 360,
        }
    }

    #[test]
    fn test_zero_rate_payment() {
        let input = MonthlyPaymentInput {
            principal: dec!(120_000),
            annual_rate: dec!(0),
            term_months: 120,
        };
        let out = compute_monthly_payment(&input).unwrap();
        assert_eq!(out.result.monthly_payment, dec!(1_000));
        assert_eq!(out.result.total_interest, dec!(0));
    }

    #[test]
    fn test_total_paid_composition() {
        let out = compute_monthly_payment(&standard_input()).unwrap();
        let r = &out.result;
        assert_eq!(r.total_paid, r.monthly_payment * dec!(360));
        assert_eq!(r.total_interest, r.total_paid - dec!(300_000));
    }

    #[test]
    fn test_validation_zero_term() {
        let input = MonthlyPaymentInput {
            term_months: 0,
            ..standard_input()
        };
        assert!(compute_monthly_payment(&input).is_err());
    }

    #[test]
    fn test_validation_negative_rate() {
        let input = MonthlyPaymentInput {
            annual_rate: dec!(-0.01),
            ..standard_input()
        };
        assert!(compute_monthly_payment(&input).is_err());
    }

    #[test]
    fn test_validation_zero_principal() {
        let input = MonthlyPaymentInput {
            principal: dec!(0),
            ..standard_input()
        };
        assert!(compute_monthly_payment(&input).is_err());
    }
}
