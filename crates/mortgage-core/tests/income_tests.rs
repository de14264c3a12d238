#![cfg(feature = "income")]

use mortgage_core::income::validation::{self, ConsistencyStatus, IncomeEvidence};
use mortgage_core::MortgageError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Gross income consistency — payslips vs annual certificate
// ===========================================================================

fn three_payslips() -> Vec<Decimal> {
    vec![dec!(9_800), dec!(10_000), dec!(10_200)]
}

#[test]
fn test_consistent_gross_income() {
    // Payslips average 10,000/month = 120,000/year, certificate agrees.
    let evidence = IncomeEvidence {
        payslip_monthly_gross: three_payslips(),
        annual_certificate_gross: Some(dec!(118_000)),
        ..IncomeEvidence::default()
    };

    let out = validation::cross_validate_income(&evidence).unwrap();
    let r = &out.result;

    assert_eq!(r.status, ConsistencyStatus::Consistent);
    assert_eq!(r.recommended_monthly_income, Some(dec!(10_000)));
    assert_eq!(r.confidence, dec!(0.9));
    assert!(!r.checks.is_empty());
}

#[test]
fn test_inconsistent_gross_income_uses_conservative_figure() {
    // Certificate is far below the payslips: outside the 15% band.
    let evidence = IncomeEvidence {
        payslip_monthly_gross: three_payslips(),
        annual_certificate_gross: Some(dec!(90_000)),
        ..IncomeEvidence::default()
    };

    let out = validation::cross_validate_income(&evidence).unwrap();
    let r = &out.result;

    assert_eq!(r.status, ConsistencyStatus::Inconsistent);
    // min(10,000, 90,000/12) = 7,500
    assert_eq!(r.recommended_monthly_income, Some(dec!(7_500)));
    assert_eq!(r.confidence, dec!(0.6));
    assert!(out.warnings.iter().any(|w| w.contains("Income mismatch")));
}

#[test]
fn test_payslips_only_degrades_confidence() {
    let evidence = IncomeEvidence {
        payslip_monthly_gross: three_payslips(),
        ..IncomeEvidence::default()
    };

    let out = validation::cross_validate_income(&evidence).unwrap();
    let r = &out.result;

    assert_eq!(r.status, ConsistencyStatus::Unknown);
    assert_eq!(r.recommended_monthly_income, Some(dec!(10_000)));
    assert_eq!(r.confidence, dec!(0.7));
    assert!(out
        .warnings
        .iter()
        .any(|w| w.contains("No annual tax certificate")));
}

#[test]
fn test_certificate_only_monthly_equivalent() {
    let evidence = IncomeEvidence {
        annual_certificate_gross: Some(dec!(144_000)),
        ..IncomeEvidence::default()
    };

    let out = validation::cross_validate_income(&evidence).unwrap();
    let r = &out.result;

    assert_eq!(r.recommended_monthly_income, Some(dec!(12_000)));
    assert_eq!(r.confidence, dec!(0.6));
}

// ===========================================================================
// Bank deposit corroboration
// ===========================================================================

#[test]
fn test_bank_match_raises_confidence() {
    let evidence = IncomeEvidence {
        payslip_monthly_gross: three_payslips(),
        payslip_monthly_net: vec![dec!(8_000), dec!(8_000)],
        annual_certificate_gross: Some(dec!(120_000)),
        bank_average_monthly_deposit: Some(dec!(8_400)),
    };

    let out = validation::cross_validate_income(&evidence).unwrap();
    let r = &out.result;

    // 0.9 consistent + 0.1 bank bonus, capped at 1.0
    assert_eq!(r.confidence, dec!(1.0));
    assert!(r.checks.iter().any(|c| c.contains("Bank deposits")));
}

#[test]
fn test_bank_mismatch_warns_without_penalty() {
    let evidence = IncomeEvidence {
        payslip_monthly_gross: three_payslips(),
        payslip_monthly_net: vec![dec!(8_000)],
        annual_certificate_gross: Some(dec!(120_000)),
        bank_average_monthly_deposit: Some(dec!(4_000)),
    };

    let out = validation::cross_validate_income(&evidence).unwrap();

    assert_eq!(out.result.confidence, dec!(0.9));
    assert!(out
        .warnings
        .iter()
        .any(|w| w.contains("do not match expected net salary")));
}

#[test]
fn test_gross_vs_bank_comparison_warns() {
    // Bank data without net payslip figures: gross-to-deposit comparison
    // is flagged rather than scored.
    let evidence = IncomeEvidence {
        payslip_monthly_gross: three_payslips(),
        bank_average_monthly_deposit: Some(dec!(8_000)),
        ..IncomeEvidence::default()
    };

    let out = validation::cross_validate_income(&evidence).unwrap();

    assert_eq!(out.result.confidence, dec!(0.7));
    assert!(out
        .warnings
        .iter()
        .any(|w| w.contains("net salary data needed")));
}

// ===========================================================================
// Edge cases
// ===========================================================================

#[test]
fn test_no_evidence_is_unknown_not_an_error() {
    let out = validation::cross_validate_income(&IncomeEvidence::default()).unwrap();
    let r = &out.result;

    assert_eq!(r.status, ConsistencyStatus::Unknown);
    assert_eq!(r.recommended_monthly_income, None);
    assert_eq!(r.confidence, Decimal::ZERO);
    assert_eq!(r.summary, "Limited income verification available");
}

#[test]
fn test_negative_certificate_is_invalid_input() {
    let evidence = IncomeEvidence {
        annual_certificate_gross: Some(dec!(-1)),
        ..IncomeEvidence::default()
    };
    let err = validation::cross_validate_income(&evidence).unwrap_err();
    assert!(matches!(err, MortgageError::InvalidInput { .. }));
}
