//! Cross-validation of income figures extracted from financial documents.
//!
//! Document extraction lives outside this crate; this module takes the
//! already-extracted figures and checks them against each other before an
//! eligibility simulation relies on them. Gross salary per payslip is
//! compared against the annual tax certificate, and net salary against
//! the average bank deposit.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Relative tolerance between payslip gross income and the certificate.
const GROSS_INCOME_TOLERANCE: Decimal = dec!(0.15);

/// Relative tolerance between bank deposits and payslip net income.
const BANK_DEPOSIT_TOLERANCE: Decimal = dec!(0.20);

/// Confidence when gross figures agree across documents.
const CONFIDENCE_CONSISTENT: Decimal = dec!(0.9);

/// Confidence with payslips only.
const CONFIDENCE_PAYSLIPS_ONLY: Decimal = dec!(0.7);

/// Confidence with a certificate only, or on a gross mismatch.
const CONFIDENCE_DEGRADED: Decimal = dec!(0.6);

/// Confidence bonus when bank deposits corroborate net salary.
const BANK_MATCH_BONUS: Decimal = dec!(0.1);

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Income figures extracted from the borrower's documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeEvidence {
    /// Monthly gross salary per payslip.
    #[serde(default)]
    pub payslip_monthly_gross: Vec<Money>,
    /// Monthly net salary per payslip.
    #[serde(default)]
    pub payslip_monthly_net: Vec<Money>,
    /// Gross income from the annual tax certificate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_certificate_gross: Option<Money>,
    /// Average monthly salary deposit from bank statements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_average_monthly_deposit: Option<Money>,
}

/// Agreement level between income sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyStatus {
    Consistent,
    Inconsistent,
    Unknown,
}

/// Cross-validation verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeValidation {
    pub status: ConsistencyStatus,
    /// Monthly gross income an eligibility simulation should rely on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_monthly_income: Option<Money>,
    /// 0 to 1.
    pub confidence: Decimal,
    /// Checks that passed, for the audit trail.
    pub checks: Vec<String>,
    pub summary: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Cross-validate the extracted income figures against each other.
pub fn cross_validate_income(
    evidence: &IncomeEvidence,
) -> MortgageResult<ComputationOutput<IncomeValidation>> {
    validate(evidence)?;

    let mut warnings = Vec::new();
    let mut checks = Vec::new();
    let mut status = ConsistencyStatus::Unknown;
    let mut recommended = None;
    let mut confidence = Decimal::ZERO;

    let gross_avg = average(&evidence.payslip_monthly_gross);
    let net_avg = average(&evidence.payslip_monthly_net);

    match (gross_avg, evidence.annual_certificate_gross) {
        (Some(avg), Some(annual)) if annual > Decimal::ZERO => {
            let annual_from_payslips = avg * dec!(12);
            let tolerance = annual * GROSS_INCOME_TOLERANCE;
            if (annual_from_payslips - annual).abs() <= tolerance {
                status = ConsistencyStatus::Consistent;
                checks.push(format!(
                    "Payslips annual gross {} agrees with certificate {}",
                    annual_from_payslips, annual
                ));
                recommended = Some(avg);
                confidence = CONFIDENCE_CONSISTENT;
            } else {
                status = ConsistencyStatus::Inconsistent;
                warnings.push(format!(
                    "Income mismatch: payslips suggest {} annually but the certificate shows {}",
                    annual_from_payslips, annual
                ));
                // The conservative figure carries forward.
                recommended = Some(avg.min(annual / dec!(12)));
                confidence = CONFIDENCE_DEGRADED;
            }
        }
        (Some(avg), _) => {
            recommended = Some(avg);
            confidence = CONFIDENCE_PAYSLIPS_ONLY;
            warnings
                .push("No annual tax certificate available for income verification".to_string());
        }
        (None, Some(annual)) if annual > Decimal::ZERO => {
            recommended = Some(annual / dec!(12));
            confidence = CONFIDENCE_DEGRADED;
            warnings.push("No recent payslips for current income verification".to_string());
        }
        _ => {}
    }

    // Bank statement corroboration.
    if let Some(bank) = evidence.bank_average_monthly_deposit {
        if bank > Decimal::ZERO {
            if let Some(net) = net_avg {
                let tolerance = net * BANK_DEPOSIT_TOLERANCE;
                if (bank - net).abs() <= tolerance {
                    confidence = (confidence + BANK_MATCH_BONUS).min(Decimal::ONE);
                    checks.push(format!(
                        "Bank deposits {} match net salary {}",
                        bank, net
                    ));
                } else {
                    warnings.push(format!(
                        "Bank deposits {} do not match expected net salary {}",
                        bank, net
                    ));
                }
            } else if let Some(gross) = recommended {
                warnings.push(format!(
                    "Comparing gross income {} with bank deposits {}; net salary data needed for accurate validation",
                    gross, bank
                ));
            }
        }
    }

    if recommended.is_none() {
        warnings.push("No reliable income figure could be established".to_string());
    }

    let summary = match status {
        ConsistencyStatus::Consistent => "Income data is consistent across documents",
        ConsistencyStatus::Inconsistent => {
            "Income discrepancies found; using the conservative estimate"
        }
        ConsistencyStatus::Unknown => "Limited income verification available",
    }
    .to_string();

    let result = IncomeValidation {
        status,
        recommended_monthly_income: recommended,
        confidence,
        checks,
        summary,
    };

    Ok(with_metadata(
        "Cross-Document Income Validation",
        evidence,
        warnings,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn average(values: &[Money]) -> Option<Money> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<Decimal>() / Decimal::from(values.len() as u64))
    }
}

fn validate(evidence: &IncomeEvidence) -> MortgageResult<()> {
    for (i, v) in evidence.payslip_monthly_gross.iter().enumerate() {
        if *v < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: format!("payslip_monthly_gross[{i}]"),
                reason: "Salary figures cannot be negative".into(),
            });
        }
    }
    for (i, v) in evidence.payslip_monthly_net.iter().enumerate() {
        if *v < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: format!("payslip_monthly_net[{i}]"),
                reason: "Salary figures cannot be negative".into(),
            });
        }
    }
    if let Some(annual) = evidence.annual_certificate_gross {
        if annual < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "annual_certificate_gross".into(),
                reason: "Certificate income cannot be negative".into(),
            });
        }
    }
    if let Some(bank) = evidence.bank_average_monthly_deposit {
        if bank < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "bank_average_monthly_deposit".into(),
                reason: "Deposit figures cannot be negative".into(),
            });
        }
    }
    Ok(())
}
