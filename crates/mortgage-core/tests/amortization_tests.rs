use mortgage_core::amortization::payment::{self, MonthlyPaymentInput};
use mortgage_core::amortization::schedule::{self, ScheduleInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Monthly payment tests
// ===========================================================================

fn thirty_year_loan() -> MonthlyPaymentInput {
    // The textbook case: 300k at 5% over 30 years
    MonthlyPaymentInput {
        principal: dec!(300_000),
        annual_rate: dec!(0.05),
        term_months: 360,
    }
}

#[test]
fn test_payment_known_answer() {
    let result = payment::compute_monthly_payment(&thirty_year_loan()).unwrap();
    let monthly = result.result.monthly_payment;

    // Standard amortization formula gives ~1,610.46
    assert!(
        (monthly - dec!(1610.46)).abs() < dec!(0.01),
        "expected ~1610.46, got {}",
        monthly
    );
}

#[test]
fn test_payment_metadata_populated() {
    let result = payment::compute_monthly_payment(&thirty_year_loan()).unwrap();
    assert!(result.methodology.contains("Amortization"));
    assert_eq!(result.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_payment_rejects_zero_term() {
    let input = MonthlyPaymentInput {
        term_months: 0,
        ..thirty_year_loan()
    };
    assert!(payment::compute_monthly_payment(&input).is_err());
}

#[test]
fn test_payment_rejects_negative_rate() {
    let input = MonthlyPaymentInput {
        annual_rate: dec!(-0.05),
        ..thirty_year_loan()
    };
    assert!(payment::compute_monthly_payment(&input).is_err());
}

// ===========================================================================
// Amortization schedule tests
// ===========================================================================

fn thirty_year_schedule() -> ScheduleInput {
    ScheduleInput {
        principal: dec!(300_000),
        annual_rate: dec!(0.05),
        term_months: 360,
        first_payment_date: None,
    }
}

#[test]
fn test_schedule_first_period_split() {
    let out = schedule::build_amortization_schedule(&thirty_year_schedule()).unwrap();
    let first = &out.result.periods[0];

    // First-period interest: 300,000 * 0.05 / 12 ~ 1,250.00
    assert!(
        (first.interest - dec!(1_250)).abs() < dec!(0.01),
        "expected ~1250.00, got {}",
        first.interest
    );

    // Principal portion: payment - interest ~ 360.46
    assert!(
        (first.principal - dec!(360.46)).abs() < dec!(0.01),
        "expected ~360.46, got {}",
        first.principal
    );
}

#[test]
fn test_schedule_period_count_and_ordering() {
    let out = schedule::build_amortization_schedule(&thirty_year_schedule()).unwrap();
    let periods = &out.result.periods;

    assert_eq!(periods.len(), 360);
    assert_eq!(periods[0].period, 1);
    assert_eq!(periods[359].period, 360);
}

#[test]
fn test_schedule_final_balance_zero() {
    let out = schedule::build_amortization_schedule(&thirty_year_schedule()).unwrap();
    assert_eq!(
        out.result.periods.last().unwrap().remaining_balance,
        Decimal::ZERO
    );
}

#[test]
fn test_schedule_principal_sums_to_principal() {
    let out = schedule::build_amortization_schedule(&thirty_year_schedule()).unwrap();
    let total: Decimal = out.result.periods.iter().map(|p| p.principal).sum();
    assert!(
        (total - dec!(300_000)).abs() <= dec!(0.01),
        "principal portions sum to {}, expected 300,000",
        total
    );
}

#[test]
fn test_schedule_balance_never_negative() {
    let out = schedule::build_amortization_schedule(&thirty_year_schedule()).unwrap();
    for p in &out.result.periods {
        assert!(
            p.remaining_balance >= Decimal::ZERO,
            "period {}: balance {} is negative",
            p.period,
            p.remaining_balance
        );
    }
}

#[test]
fn test_schedule_period_composition() {
    let out = schedule::build_amortization_schedule(&thirty_year_schedule()).unwrap();
    for p in &out.result.periods {
        assert_eq!(
            p.payment,
            p.interest + p.principal,
            "period {}: payment must equal interest + principal",
            p.period
        );
    }
}

#[test]
fn test_schedule_totals_match_periods() {
    let out = schedule::build_amortization_schedule(&thirty_year_schedule()).unwrap();
    let r = &out.result;
    let interest: Decimal = r.periods.iter().map(|p| p.interest).sum();
    let paid: Decimal = r.periods.iter().map(|p| p.payment).sum();
    assert_eq!(r.total_interest, interest);
    assert_eq!(r.total_principal + r.total_interest, paid);
}

#[test]
fn test_schedule_zero_rate_is_linear() {
    let input = ScheduleInput {
        principal: dec!(240_000),
        annual_rate: dec!(0),
        term_months: 240,
        first_payment_date: None,
    };
    let out = schedule::build_amortization_schedule(&input).unwrap();
    let r = &out.result;

    assert_eq!(r.monthly_payment, dec!(1_000));
    assert_eq!(r.total_interest, dec!(0));
    assert_eq!(r.periods[119].remaining_balance, dec!(120_000));
}

#[test]
fn test_schedule_rejects_zero_length() {
    let input = ScheduleInput {
        term_months: 0,
        ..thirty_year_schedule()
    };
    assert!(schedule::build_amortization_schedule(&input).is_err());
}
