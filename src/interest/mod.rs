pub mod apr;
pub mod compound;

pub use apr::{compute_apr, AprSolution, AprSolverConfig};
pub use compound::{effective_rate_for, CompoundingFrequency};

/// default compounding periods per year for rate conversion
pub const DEFAULT_COMPOUNDING_PERIODS: u32 = 12;

/// effective interest rate (EIR) from a nominal rate
///
/// `(1 + i / n)^n - 1` for `n` compounding periods per year.
pub fn effective_rate(nominal_rate: f64, compounding_periods: u32) -> f64 {
    let n = compounding_periods as f64;
    (1.0 + nominal_rate / n).powf(n) - 1.0
}
