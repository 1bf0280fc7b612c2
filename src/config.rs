use chrono::NaiveDate;
use hourglass_rs::SafeTimeProvider;
use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};
use crate::loan::Loan;
use crate::types::LoanType;

/// loan terms as received from a caller or a JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanConfig {
    /// original principal
    pub amount: f64,
    /// nominal annual rate as a fraction, 0.05 for 5%
    pub interest_rate: f64,
    /// flat fee added to the balance each period
    #[serde(default)]
    pub monthly_fee: f64,
    #[serde(default)]
    pub loan_type: LoanType,
    /// defaults to the current date when the loan is created
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// default period count for payment plans
    #[serde(default)]
    pub months: Option<u32>,
    #[serde(default)]
    pub amortization_rate: Option<f64>,
}

impl LoanConfig {
    /// create annuity configuration
    pub fn annuity(amount: f64, interest_rate: f64, monthly_fee: f64, months: u32) -> Self {
        Self {
            amount,
            interest_rate,
            monthly_fee,
            loan_type: LoanType::Annuity,
            start_date: None,
            months: Some(months),
            amortization_rate: None,
        }
    }

    /// parse configuration from json
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LoanConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// check the terms before a loan is built from them
    ///
    /// The loan type is not checked here; unsupported types are rejected when
    /// a payment plan is requested.
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(invalid(format!("amount must be positive, got {}", self.amount)));
        }

        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(invalid(format!(
                "interest rate must be a non-negative fraction, got {}",
                self.interest_rate
            )));
        }

        if !self.monthly_fee.is_finite() || self.monthly_fee < 0.0 {
            return Err(invalid(format!(
                "monthly fee must be non-negative, got {}",
                self.monthly_fee
            )));
        }

        if self.months == Some(0) {
            return Err(invalid("months must be at least 1".to_string()));
        }

        if let Some(rate) = self.amortization_rate {
            if !rate.is_finite() {
                return Err(invalid(format!("amortization rate must be finite, got {}", rate)));
            }
        }

        Ok(())
    }

    /// validate and build a loan, defaulting the start date from `time_provider`
    pub fn into_loan(self, time_provider: &SafeTimeProvider) -> Result<Loan> {
        self.validate()?;
        let start_date = self
            .start_date
            .unwrap_or_else(|| time_provider.now().date_naive());
        Ok(Loan::new(self, start_date))
    }
}

fn invalid(message: String) -> LoanError {
    LoanError::InvalidConfiguration { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::TimeSource;

    #[test]
    fn test_from_json_defaults() {
        let config = LoanConfig::from_json(r#"{"amount": 13400, "interest_rate": 0.05}"#).unwrap();

        assert_eq!(config.amount, 13_400.0);
        assert_eq!(config.monthly_fee, 0.0);
        assert_eq!(config.loan_type, LoanType::Annuity);
        assert_eq!(config.start_date, None);
        assert_eq!(config.months, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_full() {
        let json = r#"{
            "amount": 20000,
            "interest_rate": 0.07,
            "monthly_fee": 2.5,
            "loan_type": "fixed",
            "start_date": "2024-03-01",
            "months": 48,
            "amortization_rate": 0.02
        }"#;
        let config = LoanConfig::from_json(json).unwrap();

        assert_eq!(config.loan_type, LoanType::Fixed);
        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(config.months, Some(48));
        assert_eq!(config.amortization_rate, Some(0.02));
    }

    #[test]
    fn test_json_round_trip() {
        let config = LoanConfig::annuity(10_000.0, 0.12, 5.0, 12);
        let parsed = LoanConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            LoanConfig::from_json(r#"{"interest_rate": 0.05}"#),
            Err(LoanError::Serialization { .. })
        ));
    }

    #[test]
    fn test_validation() {
        assert!(LoanConfig::annuity(0.0, 0.05, 0.0, 12).validate().is_err());
        assert!(LoanConfig::annuity(-100.0, 0.05, 0.0, 12).validate().is_err());
        assert!(LoanConfig::annuity(1_000.0, f64::NAN, 0.0, 12).validate().is_err());
        assert!(LoanConfig::annuity(1_000.0, -0.01, 0.0, 12).validate().is_err());
        assert!(LoanConfig::annuity(1_000.0, 0.05, -1.0, 12).validate().is_err());
        assert!(LoanConfig::annuity(1_000.0, 0.05, 0.0, 0).validate().is_err());

        // zero rate and zero fee are valid terms
        assert!(LoanConfig::annuity(1_000.0, 0.0, 0.0, 12).validate().is_ok());
    }

    #[test]
    fn test_start_date_defaults_to_today() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
        ));

        let loan = LoanConfig::annuity(13_400.0, 0.05, 0.0, 3)
            .into_loan(&time)
            .unwrap();
        assert_eq!(loan.start_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let mut config = LoanConfig::annuity(13_400.0, 0.05, 0.0, 3);
        config.start_date = NaiveDate::from_ymd_opt(2023, 6, 1);
        let loan = config.into_loan(&time).unwrap();
        assert_eq!(loan.start_date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
    }
}
