//! Annual percentage rate of a payment plan.
//!
//! The APR is the yearly discount rate at which the present value of all
//! scheduled payments equals the amount financed (European method, payments
//! discounted on an actual/365 basis from each cycle's day offset).
//!
//! The rate is found by stepping from an initial guess: each round moves the
//! rate by `delta`, scaled by `1 + diff / present_value` so the step grows
//! while the plan is far from balanced. The iteration cap is the only bound on
//! the loop; a result that did not reach the threshold is still returned and
//! flagged through [`AprSolution::converged`].

use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};
use crate::payments::{sum_by, Cycle};

/// days in the discounting year
pub const DAYS_PER_YEAR: f64 = 365.0;

/// default initial rate guess
pub const DEFAULT_GUESS: f64 = 0.05;

/// default step size
pub const DEFAULT_DELTA: f64 = 1e-4;

/// default convergence threshold on the present value difference
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// default iteration cap
pub const DEFAULT_MAX_ITERATIONS: u32 = 100_000;

/// numeric parameters for the APR iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AprSolverConfig {
    /// initial rate guess, divided by `n + 1` before the first round
    pub guess: f64,
    /// base step size
    pub delta: f64,
    /// stop once `|diff|` is at or below this
    pub threshold: f64,
    pub max_iterations: u32,
}

impl Default for AprSolverConfig {
    fn default() -> Self {
        Self {
            guess: DEFAULT_GUESS,
            delta: DEFAULT_DELTA,
            threshold: DEFAULT_THRESHOLD,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl AprSolverConfig {
    #[must_use]
    pub fn with_guess(mut self, guess: f64) -> Self {
        self.guess = guess;
        self
    }

    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// result of the APR iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AprSolution {
    pub apr: f64,
    /// last present value minus amount financed
    pub diff: f64,
    pub iterations: u32,
    /// whether `|diff|` reached the threshold before the cap
    pub converged: bool,
}

impl AprSolution {
    /// `(apr, diff, iterations)`
    pub fn into_tuple(self) -> (f64, f64, u32) {
        (self.apr, self.diff, self.iterations)
    }
}

/// present value of the plan's payments at annual rate `i`
pub fn present_value(plan: &[Cycle], i: f64) -> f64 {
    sum_by(plan, |c| c.payment / (1.0 + i).powf(c.period_day / DAYS_PER_YEAR))
}

/// solve for the APR of a payment plan
///
/// The amount financed is the sum of the plan's amortizations, not the loan's
/// stated amount.
pub fn compute_apr(plan: &[Cycle], config: &AprSolverConfig) -> Result<AprSolution> {
    if plan.is_empty() {
        return Err(LoanError::EmptyPaymentPlan);
    }

    let loan_amount = sum_by(plan, |c| c.amortization);
    let n = plan.len() as f64;

    let mut diff = 1.0_f64;
    let mut iterations: u32 = 0;
    let mut i = config.guess / (n + 1.0);

    log::debug!(
        "solving apr: {} cycles, amount financed {:.6}, start rate {:.8}",
        plan.len(),
        loan_amount,
        i
    );

    while diff.abs() > config.threshold && iterations <= config.max_iterations {
        let pv = present_value(plan, i);
        diff = pv - loan_amount;

        if diff == 0.0 {
            break;
        }
        if !pv.is_finite() || pv == 0.0 {
            return Err(LoanError::DegenerateRate {
                message: format!(
                    "present value {} at rate {} after {} iterations",
                    pv, i, iterations
                ),
            });
        }

        let multiplier = 1.0 + diff / pv;
        if diff > 0.0 {
            i += config.delta * multiplier;
        } else {
            i -= config.delta * multiplier;
        }

        iterations += 1;
    }

    let converged = diff.abs() <= config.threshold;
    if converged {
        log::debug!("apr {:.8} after {} iterations (diff {:.6})", i, iterations, diff);
    } else {
        log::warn!(
            "apr iteration stopped at cap: rate {:.8}, diff {:.6}, {} iterations",
            i,
            diff,
            iterations
        );
    }

    Ok(AprSolution {
        apr: i,
        diff,
        iterations,
        converged,
    })
}
