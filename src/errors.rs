use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("unsupported loan type: {loan_type}")]
    UnsupportedLoanType {
        loan_type: String,
    },

    #[error("degenerate rate: {message}")]
    DegenerateRate {
        message: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("payment plan has no cycles")]
    EmptyPaymentPlan,

    #[error("serialization error: {message}")]
    Serialization {
        message: String,
    },
}

impl From<serde_json::Error> for LoanError {
    fn from(err: serde_json::Error) -> Self {
        LoanError::Serialization {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
