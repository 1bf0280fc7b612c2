use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{round_figure, DEFAULT_DIGITS};
use crate::errors::Result;
use crate::interest::{compute_apr, effective_rate, AprSolution, AprSolverConfig, DEFAULT_COMPOUNDING_PERIODS};
use crate::payments::{sum_by, Cycle};

/// options for summarizing a payment plan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryOptions {
    pub apr: AprSolverConfig,
    /// decimal places of every presented figure
    pub digits: u32,
    /// compounding periods used for the effective rate
    pub compounding_periods: u32,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            apr: AprSolverConfig::default(),
            digits: DEFAULT_DIGITS,
            compounding_periods: DEFAULT_COMPOUNDING_PERIODS,
        }
    }
}

impl SummaryOptions {
    #[must_use]
    pub fn with_apr(mut self, apr: AprSolverConfig) -> Self {
        self.apr = apr;
        self
    }

    #[must_use]
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }
}

/// rounded attributes of a payment plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub months: u32,
    pub total_payments: Decimal,
    pub interest_payments: Decimal,
    pub amortizations: Decimal,
    /// `total_payments - amortizations`, computed before rounding
    pub financing_cost: Decimal,
    pub apr: Decimal,
    pub eir: Decimal,
}

impl PlanSummary {
    /// named attribute mapping
    pub fn attributes(&self) -> BTreeMap<&'static str, Decimal> {
        BTreeMap::from([
            ("months", Decimal::from(self.months)),
            ("total_payments", self.total_payments),
            ("interest_payments", self.interest_payments),
            ("amortizations", self.amortizations),
            ("financing_cost", self.financing_cost),
            ("apr", self.apr),
            ("eir", self.eir),
        ])
    }
}

/// summarize a payment plan with default options
pub fn summarize(plan: &[Cycle]) -> Result<PlanSummary> {
    summarize_with(plan, &SummaryOptions::default())
}

/// summarize a payment plan
pub fn summarize_with(plan: &[Cycle], options: &SummaryOptions) -> Result<PlanSummary> {
    summarize_with_solution(plan, options).map(|(summary, _)| summary)
}

/// summarize a payment plan, also returning the unrounded APR solution
pub fn summarize_with_solution(
    plan: &[Cycle],
    options: &SummaryOptions,
) -> Result<(PlanSummary, AprSolution)> {
    let total_payments = sum_by(plan, |c| c.payment);
    let amortizations = sum_by(plan, |c| c.amortization);
    let interest_payments = sum_by(plan, |c| c.interest_payment);
    let financing_cost = total_payments - amortizations;

    let solution = compute_apr(plan, &options.apr)?;
    let eir = effective_rate(solution.apr, options.compounding_periods);

    // rounding happens once, here
    let digits = options.digits;
    let summary = PlanSummary {
        months: plan.len() as u32,
        total_payments: round_figure(total_payments, digits)?,
        interest_payments: round_figure(interest_payments, digits)?,
        amortizations: round_figure(amortizations, digits)?,
        financing_cost: round_figure(financing_cost, digits)?,
        apr: round_figure(solution.apr, digits)?,
        eir: round_figure(eir, digits)?,
    };

    Ok((summary, solution))
}
