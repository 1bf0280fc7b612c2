use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// loan type discriminator
///
/// Parsing never fails: unknown names are kept as `Other` so the schedule
/// generator can reject them explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoanType {
    /// equal periodic payments
    #[default]
    Annuity,
    /// equal principal payments, recognized but not implemented
    Fixed,
    /// any other name
    Other(String),
}

impl LoanType {
    pub fn as_str(&self) -> &str {
        match self {
            LoanType::Annuity => "annuity",
            LoanType::Fixed => "fixed",
            LoanType::Other(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, LoanType::Annuity)
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for LoanType {
    fn from(s: &str) -> Self {
        match s {
            "annuity" => LoanType::Annuity,
            "fixed" => LoanType::Fixed,
            other => LoanType::Other(other.to_string()),
        }
    }
}

impl From<String> for LoanType {
    fn from(s: String) -> Self {
        LoanType::from(s.as_str())
    }
}

impl From<LoanType> for String {
    fn from(t: LoanType) -> Self {
        t.as_str().to_string()
    }
}

impl FromStr for LoanType {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(LoanType::from(s))
    }
}
