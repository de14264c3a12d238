use rust_decimal::Decimal;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Compute base^n via iterative multiplication. Exact and deterministic
/// for the period counts a mortgage term can reach.
fn pow_u32(base: Decimal, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result *= base;
    }
    result
}

/// Present value of a level annuity of 1 per period: (1 - (1+r)^-n) / r.
/// A zero rate degenerates to n.
pub fn annuity_factor(periodic_rate: Rate, periods: u32) -> MortgageResult<Decimal> {
    if periods == 0 {
        return Err(MortgageError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }
    if periodic_rate < Decimal::ZERO {
        return Err(MortgageError::InvalidInput {
            field: "periodic_rate".into(),
            reason: "Periodic rate cannot be negative".into(),
        });
    }
    if periodic_rate.is_zero() {
        return Ok(Decimal::from(periods));
    }

    let growth = pow_u32(Decimal::ONE + periodic_rate, periods);
    if growth.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity growth factor".into(),
        });
    }
    Ok((Decimal::ONE - Decimal::ONE / growth) / periodic_rate)
}

/// Level payment that amortizes `principal` over `periods` at `periodic_rate`.
pub fn level_payment(
    principal: Money,
    periodic_rate: Rate,
    periods: u32,
) -> MortgageResult<Money> {
    let factor = annuity_factor(periodic_rate, periods)?;
    if factor.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "level payment annuity factor".into(),
        });
    }
    Ok(principal / factor)
}

/// Largest principal a level `payment` can amortize over `periods` at
/// `periodic_rate`.
pub fn principal_from_payment(
    payment: Money,
    periodic_rate: Rate,
    periods: u32,
) -> MortgageResult<Money> {
    let factor = annuity_factor(periodic_rate, periods)?;
    Ok(payment * factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_annuity_factor_zero_rate() {
        let factor = annuity_factor(dec!(0), 240).unwrap();
        assert_eq!(factor, dec!(240));
    }

    #[test]
    fn test_level_payment_textbook() {
        // 300k at 5%/12 over 360 months: the textbook 1,610.46
        let payment = level_payment(dec!(300_000), dec!(0.05) / dec!(12), 360).unwrap();
        assert!((payment - dec!(1610.46)).abs() < dec!(0.01));
    }

    #[test]
    fn test_payment_principal_round_trip() {
        let rate = dec!(0.04) / dec!(12);
        let payment = level_payment(dec!(750_000), rate, 300).unwrap();
        let principal = principal_from_payment(payment, rate, 300).unwrap();
        assert!((principal - dec!(750_000)).abs() < dec!(0.01));
    }

    #[test]
    fn test_zero_periods_rejected() {
        assert!(annuity_factor(dec!(0.05), 0).is_err());
    }

    #[test]
    fn test_negative_rate_rejected() {
        assert!(level_payment(dec!(100_000), dec!(-0.01), 120).is_err());
    }
}
