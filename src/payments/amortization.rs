use crate::errors::{LoanError, Result};
use crate::payments::annuity::annuity_payment;
use crate::payments::{Cycle, PaymentPlan};
use crate::types::LoanType;

/// payment periods per year; monthly compounding is fixed
pub const PERIODS_PER_YEAR: f64 = 12.0;

/// approximate days in a month, used for each cycle's day offset
pub const DAYS_PER_MONTH: f64 = 365.0 / 12.0;

/// schedule generator dispatching on loan type
pub struct AmortizationCalculator {
    loan_type: LoanType,
}

impl AmortizationCalculator {
    pub fn new(loan_type: LoanType) -> Self {
        Self { loan_type }
    }

    /// calculate full payment plan
    pub fn calculate_schedule(
        &self,
        amount: f64,
        interest_rate: f64,
        monthly_fee: f64,
        periods: u32,
    ) -> Result<PaymentPlan> {
        match self.loan_type {
            LoanType::Annuity => payment_plan_annuity(amount, interest_rate, monthly_fee, periods),
            _ => Err(LoanError::UnsupportedLoanType {
                loan_type: self.loan_type.to_string(),
            }),
        }
    }
}

/// payment plan for an annuity loan
///
/// The last payment is not clamped to the outstanding balance, so the final
/// `remaining_balance` can end slightly negative.
pub fn payment_plan_annuity(
    amount: f64,
    interest_rate: f64,
    monthly_fee: f64,
    periods: u32,
) -> Result<PaymentPlan> {
    let r = interest_rate / PERIODS_PER_YEAR;
    let payment = annuity_payment(amount, r, monthly_fee, periods)?;

    let mut plan = Vec::with_capacity(periods as usize);
    let mut incoming_balance = amount;

    for period in 1..=periods {
        let interest_payment = r * incoming_balance;
        let amortization = payment - interest_payment;
        let remaining_balance = incoming_balance + monthly_fee - payment;

        plan.push(Cycle {
            period,
            period_day: period as f64 * DAYS_PER_MONTH,
            incoming_balance,
            remaining_balance,
            payment,
            amortization,
            interest_payment,
        });

        // interest is re-added before the next period accrues
        incoming_balance = remaining_balance + interest_payment;
    }

    log::debug!(
        "annuity plan: {} periods, payment {:.6}, final balance {:.6}",
        periods,
        payment,
        plan.last().map(|c| c.remaining_balance).unwrap_or(amount)
    );

    Ok(plan)
}
