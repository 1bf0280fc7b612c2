use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{LoanError, Result};

/// default number of decimal places for presented figures
pub const DEFAULT_DIGITS: u32 = 5;

/// round an engine figure to `digits` decimal places
///
/// The exact binary value of `value` is converted before rounding, so ties are
/// only broken (half to even) when the float really sits on the midpoint.
pub fn round_figure(value: f64, digits: u32) -> Result<Decimal> {
    let exact = Decimal::from_f64_retain(value).ok_or_else(|| LoanError::DegenerateRate {
        message: format!("cannot represent {} as a decimal", value),
    })?;
    Ok(exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven))
}

/// convert a presented figure back to a float
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_figure() {
        assert_eq!(round_figure(55.833333333333336, 2).unwrap(), dec!(55.83));
        assert_eq!(round_figure(0.051257185923877964, 5).unwrap(), dec!(0.05126));
        assert_eq!(round_figure(13399.999999999998, 5).unwrap(), dec!(13400));
    }

    #[test]
    fn test_round_negative_and_zero() {
        assert_eq!(round_figure(-18.68854970492157, 3).unwrap(), dec!(-18.689));
        assert_eq!(round_figure(0.0, 5).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_non_finite_is_degenerate() {
        assert!(matches!(
            round_figure(f64::NAN, 5),
            Err(LoanError::DegenerateRate { .. })
        ));
        assert!(round_figure(f64::INFINITY, 5).is_err());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(dec!(0.05126)), 0.05126);
    }
}
