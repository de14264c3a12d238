//! Lending-policy configuration.
//!
//! Every threshold is injected by the caller. The presets below carry the
//! regulator's quantitative guardrails for convenience; a policy can
//! always be built field by field instead.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageError;
use crate::types::Rate;
use crate::MortgageResult;

/// Regulatory payment-to-income ceiling.
const REGULATORY_MAX_DTI: Decimal = dec!(0.50);

/// Payment-to-income level above which a simulation warns.
const DTI_WARNING_THRESHOLD: Decimal = dec!(0.40);

/// Maximum permitted term in months.
const REGULATORY_MAX_TERM_MONTHS: u32 = 360;

/// Preset minimum borrower age at origination.
const PRESET_MIN_BORROWER_AGE: u32 = 18;

/// Preset maximum borrower age at the final installment.
const PRESET_MAX_AGE_AT_MATURITY: u32 = 75;

/// Property purchase classification. Drives the loan-to-value ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    FirstHome,
    Replacement,
    Investment,
}

impl PropertyType {
    /// Loan-to-value ceiling for this classification.
    pub fn ltv_limit(self) -> Rate {
        match self {
            PropertyType::FirstHome => dec!(0.75),
            PropertyType::Replacement => dec!(0.70),
            PropertyType::Investment => dec!(0.50),
        }
    }
}

/// Underwriting risk appetite. Drives the debt-to-income ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Conservative,
    Standard,
    Aggressive,
}

impl RiskProfile {
    /// Debt-to-income ceiling for this appetite.
    pub fn dti_limit(self) -> Rate {
        match self {
            RiskProfile::Conservative => dec!(0.30),
            RiskProfile::Standard => dec!(0.35),
            RiskProfile::Aggressive => dec!(0.40),
        }
    }

    /// All appetites, conservative first.
    pub fn all() -> [RiskProfile; 3] {
        [
            RiskProfile::Conservative,
            RiskProfile::Standard,
            RiskProfile::Aggressive,
        ]
    }
}

/// Lending-policy limits applied by the eligibility simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LendingPolicy {
    /// Maximum debt-to-income ratio.
    pub max_debt_to_income: Rate,
    /// Maximum loan-to-value ratio.
    pub max_loan_to_value: Rate,
    /// Minimum borrower age at origination.
    pub min_borrower_age: u32,
    /// Maximum borrower age at the final installment.
    pub max_age_at_maturity: u32,
    /// Maximum permitted term in months.
    pub max_term_months: u32,
    /// Annual rate the simulation stresses payments at.
    pub stress_rate: Rate,
    /// Debt-to-income level above which a simulation warns without
    /// failing eligibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dti_warning_threshold: Option<Rate>,
}

impl LendingPolicy {
    /// Preset built from a property classification and risk appetite.
    pub fn for_profile(property: PropertyType, profile: RiskProfile, stress_rate: Rate) -> Self {
        LendingPolicy {
            max_debt_to_income: profile.dti_limit(),
            max_loan_to_value: property.ltv_limit(),
            min_borrower_age: PRESET_MIN_BORROWER_AGE,
            max_age_at_maturity: PRESET_MAX_AGE_AT_MATURITY,
            max_term_months: REGULATORY_MAX_TERM_MONTHS,
            stress_rate,
            dti_warning_threshold: Some(DTI_WARNING_THRESHOLD),
        }
    }

    /// Preset at the regulatory payment-to-income ceiling rather than a
    /// bank risk appetite.
    pub fn regulatory(property: PropertyType, stress_rate: Rate) -> Self {
        LendingPolicy {
            max_debt_to_income: REGULATORY_MAX_DTI,
            ..LendingPolicy::for_profile(property, RiskProfile::Standard, stress_rate)
        }
    }

    pub(crate) fn validate(&self) -> MortgageResult<()> {
        if self.max_debt_to_income <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "max_debt_to_income".into(),
                reason: "Debt-to-income ceiling must be positive".into(),
            });
        }
        if self.max_loan_to_value <= Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "max_loan_to_value".into(),
                reason: "Loan-to-value ceiling must be positive".into(),
            });
        }
        if self.max_term_months == 0 {
            return Err(MortgageError::InvalidInput {
                field: "max_term_months".into(),
                reason: "Term ceiling must be greater than zero".into(),
            });
        }
        if self.stress_rate < Decimal::ZERO {
            return Err(MortgageError::InvalidInput {
                field: "stress_rate".into(),
                reason: "Stress rate cannot be negative".into(),
            });
        }
        if self.max_age_at_maturity <= self.min_borrower_age {
            return Err(MortgageError::InvalidInput {
                field: "max_age_at_maturity".into(),
                reason: "Age ceiling must exceed the minimum borrower age".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ltv_limits_by_property() {
        assert_eq!(PropertyType::FirstHome.ltv_limit(), dec!(0.75));
        assert_eq!(PropertyType::Replacement.ltv_limit(), dec!(0.70));
        assert_eq!(PropertyType::Investment.ltv_limit(), dec!(0.50));
    }

    #[test]
    fn test_dti_limits_by_profile() {
        assert_eq!(RiskProfile::Conservative.dti_limit(), dec!(0.30));
        assert_eq!(RiskProfile::Standard.dti_limit(), dec!(0.35));
        assert_eq!(RiskProfile::Aggressive.dti_limit(), dec!(0.40));
    }

    #[test]
    fn test_regulatory_preset_caps() {
        let policy = LendingPolicy::regulatory(PropertyType::FirstHome, dec!(0.05));
        assert_eq!(policy.max_debt_to_income, dec!(0.50));
        assert_eq!(policy.max_term_months, 360);
        assert_eq!(policy.dti_warning_threshold, Some(dec!(0.40)));
    }

    #[test]
    fn test_validate_rejects_negative_stress_rate() {
        let policy = LendingPolicy {
            stress_rate: dec!(-0.01),
            ..LendingPolicy::for_profile(PropertyType::FirstHome, RiskProfile::Standard, dec!(0))
        };
        assert!(policy.validate().is_err());
    }
}
