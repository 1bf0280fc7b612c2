//! Serialization support for loans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::interest::AprSolution;
use crate::loan::Loan;
use crate::payments::Cycle;
use crate::summary::PlanSummary;
use crate::types::LoanId;

/// serializable view of a loan and its derived state
#[derive(Debug, Serialize, Deserialize)]
pub struct LoanView {
    pub id: LoanId,
    pub loan_type: String,
    pub start_date: NaiveDate,
    pub terms: TermsView,
    pub payment_plan: Vec<Cycle>,
    pub summary: Option<PlanSummary>,
    pub solver: Option<SolverView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TermsView {
    pub amount: f64,
    pub interest_rate: f64,
    pub monthly_fee: f64,
    pub months: Option<u32>,
    pub amortization_rate: Option<f64>,
}

/// convergence quality of the last APR iteration
#[derive(Debug, Serialize, Deserialize)]
pub struct SolverView {
    pub diff: f64,
    pub iterations: u32,
    pub converged: bool,
}

impl From<&AprSolution> for SolverView {
    fn from(solution: &AprSolution) -> Self {
        SolverView {
            diff: solution.diff,
            iterations: solution.iterations,
            converged: solution.converged,
        }
    }
}

impl LoanView {
    pub fn from_loan(loan: &Loan) -> Self {
        LoanView {
            id: loan.id,
            loan_type: loan.loan_type.to_string(),
            start_date: loan.start_date,
            terms: TermsView {
                amount: loan.amount,
                interest_rate: loan.interest_rate,
                monthly_fee: loan.monthly_fee,
                months: loan.months,
                amortization_rate: loan.amortization_rate,
            },
            payment_plan: loan.payment_plan().map(<[Cycle]>::to_vec).unwrap_or_default(),
            summary: loan.summary().cloned(),
            solver: loan.apr_solution().map(SolverView::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use hourglass_rs::{SafeTimeProvider, TimeSource};

    #[test]
    fn test_view_before_and_after_plan() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let mut loan = Loan::builder()
            .amount(13_400.0)
            .interest_rate(0.05)
            .build_with_time(&time)
            .unwrap();

        let view = LoanView::from_loan(&loan);
        assert!(view.payment_plan.is_empty());
        assert!(view.summary.is_none());
        assert!(view.solver.is_none());

        loan.make_payment_plan(Some(3)).unwrap();
        let view = LoanView::from_loan(&loan);
        assert_eq!(view.loan_type, "annuity");
        assert_eq!(view.payment_plan.len(), 3);
        assert!(view.solver.unwrap().converged);
    }

    #[test]
    fn test_json_output() {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        ));
        let mut loan = Loan::builder()
            .amount(13_400.0)
            .interest_rate(0.05)
            .build_with_time(&time)
            .unwrap();
        loan.make_payment_plan(Some(3)).unwrap();

        let json = loan.to_json_pretty();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["start_date"], "2024-01-01");
        assert_eq!(value["payment_plan"].as_array().unwrap().len(), 3);
        assert_eq!(value["payment_plan"][0]["period"], 1);
        assert_eq!(value["summary"]["apr"], "0.05126");
    }
}
