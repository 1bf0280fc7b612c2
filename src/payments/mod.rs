pub mod amortization;
pub mod annuity;

use serde::{Deserialize, Serialize};

pub use amortization::{payment_plan_annuity, AmortizationCalculator, DAYS_PER_MONTH};
pub use annuity::annuity_payment;

/// one period of a payment plan
///
/// The balance is carried between cycles in two steps: `remaining_balance`
/// is the balance after the payment, and the next cycle starts from
/// `remaining_balance + interest_payment`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cycle {
    /// 1-based period index
    pub period: u32,
    /// day offset from loan start, `period * 365 / 12`
    pub period_day: f64,
    pub incoming_balance: f64,
    pub remaining_balance: f64,
    pub payment: f64,
    /// `payment - interest_payment`
    pub amortization: f64,
    pub interest_payment: f64,
}

/// ordered sequence of cycles
pub type PaymentPlan = Vec<Cycle>;

/// sum a field over a plan, in period order
pub(crate) fn sum_by<F>(plan: &[Cycle], field: F) -> f64
where
    F: Fn(&Cycle) -> f64,
{
    plan.iter().map(field).fold(0.0, |acc, x| acc + x)
}
