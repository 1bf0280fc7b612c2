pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod interest;
pub mod loan;
pub mod payments;
pub mod serialization;
pub mod summary;
pub mod types;

// re-export key types
pub use config::LoanConfig;
pub use errors::{LoanError, Result};
pub use events::{Event, EventStore};
pub use interest::{
    compute_apr, effective_rate, effective_rate_for, AprSolution, AprSolverConfig,
    CompoundingFrequency,
};
pub use loan::{Loan, LoanBuilder};
pub use payments::{
    annuity_payment, payment_plan_annuity, AmortizationCalculator, Cycle, PaymentPlan,
};
pub use serialization::LoanView;
pub use summary::{summarize, summarize_with, summarize_with_solution, PlanSummary, SummaryOptions};
pub use types::{LoanId, LoanType};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
