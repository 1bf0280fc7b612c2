use crate::errors::{LoanError, Result};

/// constant per-period payment of an annuity
///
/// `rate` is the periodic rate (annual rate already divided by the periods
/// per year). The flat `fee` is added on top of the annuity installment:
///
/// `payment = amount * rate / (1 - (1 + rate)^-periods) + fee`
///
/// A zero rate uses the limit of the formula, `amount / periods + fee`.
pub fn annuity_payment(amount: f64, rate: f64, fee: f64, periods: u32) -> Result<f64> {
    if periods == 0 {
        return Err(LoanError::InvalidConfiguration {
            message: "annuity needs at least one period".to_string(),
        });
    }

    let payment = if rate == 0.0 {
        amount / periods as f64 + fee
    } else {
        (amount * rate) / (1.0 - (1.0 + rate).powf(-(periods as f64))) + fee
    };

    if !payment.is_finite() {
        return Err(LoanError::DegenerateRate {
            message: format!(
                "annuity payment is not finite for rate {} over {} periods",
                rate, periods
            ),
        });
    }

    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_annuity_payment() {
        let payment = annuity_payment(13_400.0, 0.05 / 12.0, 0.0, 3).unwrap();
        assert_relative_eq!(payment, 4503.940478866179, epsilon = 1e-9);

        let payment = annuity_payment(10_000.0, 0.01, 0.0, 12).unwrap();
        assert_relative_eq!(payment, 888.4878867834161, epsilon = 1e-9);
    }

    #[test]
    fn test_fee_added_on_top() {
        let without = annuity_payment(10_000.0, 0.01, 0.0, 12).unwrap();
        let with = annuity_payment(10_000.0, 0.01, 5.0, 12).unwrap();
        assert_relative_eq!(with - without, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = annuity_payment(5_000.0, 0.0, 0.0, 10).unwrap();
        assert_eq!(payment, 500.0);

        let payment = annuity_payment(5_000.0, 0.0, 2.5, 10).unwrap();
        assert_eq!(payment, 502.5);
    }

    #[test]
    fn test_single_period() {
        // one period repays principal plus one period of interest
        let payment = annuity_payment(1_000.0, 0.1 / 12.0, 0.0, 1).unwrap();
        assert_relative_eq!(payment, 1_000.0 * (1.0 + 0.1 / 12.0), epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(matches!(
            annuity_payment(1_000.0, 0.01, 0.0, 0),
            Err(LoanError::InvalidConfiguration { .. })
        ));

        // 1 + rate rounds to exactly 1, so the denominator vanishes
        assert!(matches!(
            annuity_payment(1_000.0, 1e-20, 0.0, 12),
            Err(LoanError::DegenerateRate { .. })
        ));
        assert!(annuity_payment(1_000.0, f64::NAN, 0.0, 12).is_err());
    }
}
