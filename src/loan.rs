use chrono::NaiveDate;
use hourglass_rs::{SafeTimeProvider, TimeSource};
use uuid::Uuid;

use crate::config::LoanConfig;
use crate::decimal::to_f64;
use crate::errors::{LoanError, Result};
use crate::events::{Event, EventStore};
use crate::interest::AprSolution;
use crate::payments::{AmortizationCalculator, Cycle, PaymentPlan};
use crate::summary::{summarize_with_solution, PlanSummary, SummaryOptions};
use crate::types::{LoanId, LoanType};

/// a loan with its terms and the last computed payment plan
#[derive(Debug)]
pub struct Loan {
    pub id: LoanId,
    pub amount: f64,
    pub interest_rate: f64,
    pub monthly_fee: f64,
    pub loan_type: LoanType,
    /// informational, not used in period math
    pub start_date: NaiveDate,
    pub months: Option<u32>,
    pub amortization_rate: Option<f64>,
    payment_plan: Option<PaymentPlan>,
    summary: Option<PlanSummary>,
    apr_solution: Option<AprSolution>,
    events: EventStore,
}

impl Loan {
    /// create loan from already validated terms
    pub(crate) fn new(config: LoanConfig, start_date: NaiveDate) -> Self {
        let mut loan = Self {
            id: Uuid::new_v4(),
            amount: config.amount,
            interest_rate: config.interest_rate,
            monthly_fee: config.monthly_fee,
            loan_type: config.loan_type,
            start_date,
            months: config.months,
            amortization_rate: config.amortization_rate,
            payment_plan: None,
            summary: None,
            apr_solution: None,
            events: EventStore::new(),
        };

        loan.events.emit(Event::LoanCreated {
            loan_id: loan.id,
            amount: loan.amount,
            interest_rate: loan.interest_rate,
            loan_type: loan.loan_type.clone(),
            start_date,
        });

        loan
    }

    /// builder for creating loans
    pub fn builder() -> LoanBuilder {
        LoanBuilder::new()
    }

    /// current terms as a configuration
    pub fn config(&self) -> LoanConfig {
        LoanConfig {
            amount: self.amount,
            interest_rate: self.interest_rate,
            monthly_fee: self.monthly_fee,
            loan_type: self.loan_type.clone(),
            start_date: Some(self.start_date),
            months: self.months,
            amortization_rate: self.amortization_rate,
        }
    }

    /// generate the payment plan and its summary with default options
    ///
    /// `periods` overrides `months` when given.
    pub fn make_payment_plan(&mut self, periods: Option<u32>) -> Result<&[Cycle]> {
        self.make_payment_plan_with(periods, &SummaryOptions::default())
    }

    /// generate the payment plan and its summary
    ///
    /// On success the plan, summary and APR solution replace any earlier
    /// computation. On failure the previous derived state is left untouched.
    pub fn make_payment_plan_with(
        &mut self,
        periods: Option<u32>,
        options: &SummaryOptions,
    ) -> Result<&[Cycle]> {
        if !self.loan_type.is_supported() {
            return Err(LoanError::UnsupportedLoanType {
                loan_type: self.loan_type.to_string(),
            });
        }

        let periods = periods.or(self.months).ok_or(LoanError::InvalidConfiguration {
            message: "period count required: pass periods or set months".to_string(),
        })?;

        let calculator = AmortizationCalculator::new(self.loan_type.clone());
        let plan = calculator.calculate_schedule(
            self.amount,
            self.interest_rate,
            self.monthly_fee,
            periods,
        )?;

        let (summary, solution) = summarize_with_solution(&plan, options)?;

        if let (Some(first), Some(last)) = (plan.first(), plan.last()) {
            self.events.emit(Event::PaymentPlanGenerated {
                loan_id: self.id,
                periods,
                payment: first.payment,
                final_balance: last.remaining_balance,
            });
        }

        if solution.converged {
            self.events.emit(Event::AprSolved {
                loan_id: self.id,
                apr: solution.apr,
                diff: solution.diff,
                iterations: solution.iterations,
            });
        } else {
            self.events.emit(Event::AprNotConverged {
                loan_id: self.id,
                apr: solution.apr,
                diff: solution.diff,
                iterations: solution.iterations,
                threshold: options.apr.threshold,
            });
        }

        self.events.emit(Event::PlanSummarized {
            loan_id: self.id,
            total_payments: to_f64(summary.total_payments),
            financing_cost: to_f64(summary.financing_cost),
        });

        self.summary = Some(summary);
        self.apr_solution = Some(solution);
        Ok(self.payment_plan.insert(plan).as_slice())
    }

    /// last generated payment plan
    pub fn payment_plan(&self) -> Option<&[Cycle]> {
        self.payment_plan.as_deref()
    }

    /// summary of the last generated payment plan
    pub fn summary(&self) -> Option<&PlanSummary> {
        self.summary.as_ref()
    }

    /// unrounded APR solution of the last generated payment plan
    pub fn apr_solution(&self) -> Option<&AprSolution> {
        self.apr_solution.as_ref()
    }

    pub fn set_months(&mut self, months: Option<u32>) {
        self.months = months;
    }

    pub fn set_interest_rate(&mut self, interest_rate: f64) {
        self.interest_rate = interest_rate;
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// get json representation of the loan and its plan
    pub fn to_json_pretty(&self) -> String {
        let view = crate::serialization::LoanView::from_loan(self);
        serde_json::to_string_pretty(&view).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}

/// builder for loans
#[derive(Debug, Default)]
pub struct LoanBuilder {
    amount: Option<f64>,
    interest_rate: Option<f64>,
    monthly_fee: Option<f64>,
    loan_type: Option<LoanType>,
    start_date: Option<NaiveDate>,
    months: Option<u32>,
    amortization_rate: Option<f64>,
}

impl LoanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = Some(rate);
        self
    }

    pub fn monthly_fee(mut self, fee: f64) -> Self {
        self.monthly_fee = Some(fee);
        self
    }

    pub fn loan_type(mut self, loan_type: impl Into<LoanType>) -> Self {
        self.loan_type = Some(loan_type.into());
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn months(mut self, months: u32) -> Self {
        self.months = Some(months);
        self
    }

    pub fn amortization_rate(mut self, rate: f64) -> Self {
        self.amortization_rate = Some(rate);
        self
    }

    /// Build with system time
    pub fn build(self) -> Result<Loan> {
        let time = SafeTimeProvider::new(TimeSource::System);
        self.build_with_time(&time)
    }

    /// Build with explicit time provider
    pub fn build_with_time(self, time_provider: &SafeTimeProvider) -> Result<Loan> {
        let amount = self.amount.ok_or(LoanError::InvalidConfiguration {
            message: "Amount required".to_string(),
        })?;

        let interest_rate = self.interest_rate.ok_or(LoanError::InvalidConfiguration {
            message: "Interest rate required".to_string(),
        })?;

        let config = LoanConfig {
            amount,
            interest_rate,
            monthly_fee: self.monthly_fee.unwrap_or(0.0),
            loan_type: self.loan_type.unwrap_or_default(),
            start_date: self.start_date,
            months: self.months,
            amortization_rate: self.amortization_rate,
        };

        config.into_loan(time_provider)
    }
}
