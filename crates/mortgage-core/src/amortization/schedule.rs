//! Amortization schedule construction.
//!
//! Builds the period-by-period principal/interest split for a
//! level-payment loan. The final period absorbs accumulated rounding so
//! the closing balance is exactly zero and the principal portions sum to
//! the original principal.

use chrono::{Months, NaiveDate};
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

/// Amortization schedule input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Loan principal.
    pub principal: Money,
    /// Annual nominal interest rate (0.05 = 5%).
    pub annual_rate: Rate,
    /// Term in months.
    pub term_months: u32,
    /// Due date of the first installment; later installments fall on the
    /// same day of each following month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_payment_date: Option<NaiveDate>,
}

/// A single period in an amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationPeriod {
    /// Period number (1-indexed).
    pub period: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Total paid this period.
    pub payment: Money,
    /// Interest portion.
    pub interest: Money,
    /// Principal portion.
    pub principal: Money,
    /// Balance after this period.
    pub remaining_balance: Money,
}

/// Full schedule output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Level monthly payment.
    pub monthly_payment: Money,
    /// Period rows, first installment to last.
    pub periods: Vec<AmortizationPeriod>,
    /// Interest paid over the full term.
    pub total_interest: Money,
    /// Principal repaid over the full term.
    pub total_principal: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the complete amortization schedule for a level-payment loan.
pub fn build_amortization_schedule(
    input: &ScheduleInput,
) -> MortgageResult<ComputationOutput<AmortizationSchedule>> {
    validate(input)?;

    let (monthly_payment, periods) = schedule_periods(
        input.principal,
        input.annual_rate,
        input.term_months,
        input.first_payment_date,
    )?;

    let total_interest = periods.iter().map(|p| p.interest).sum();
    let total_principal = periods.iter().map(|p| p.principal).sum();

    let output = AmortizationSchedule {
        monthly_payment,
        periods,
        total_interest,
        total_principal,
    };

    Ok(with_metadata(
        "Level-Payment Amortization Schedule",
        input,
        Vec::new(),
        output,
    ))
}

fn validate(input: &ScheduleInput) -> MortgageResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.term_months == 0 {
        return Err(MortgageError::InvalidInput {
            field: "term_months".into(),
            reason: "A zero-length schedule is invalid".into(),
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

// ---------------------------------------------------------------------------
// Period construction
// ---------------------------------------------------------------------------

/// Raw period rows without the output envelope. Shared with the
/// eligibility simulation, which embeds the schedule in its own result.
pub(crate) fn schedule_periods(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
    first_payment_date: Option<NaiveDate>,
) -> MortgageResult<(Money, Vec<AmortizationPeriod>)> {
    let monthly_rate = annual_rate / dec!(12);
    let monthly_payment = time_value::level_payment(principal, monthly_rate, term_months)?;

    let mut periods = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for period in 1..=term_months {
        let interest = balance * monthly_rate;
        let mut principal_portion = monthly_payment - interest;
        // The last installment clears the balance exactly.
        if period == term_months || principal_portion > balance {
            principal_portion = balance;
        }
        balance -= principal_portion;

        let due_date =
            first_payment_date.and_then(|d| d.checked_add_months(Months::new(period - 1)));

        periods.push(AmortizationPeriod {
            period,
            due_date,
            payment: interest + principal_portion,
            interest,
            principal: principal_portion,
            remaining_balance: balance,
        });
    }

    Ok((monthly_payment, periods))
}
