//! Loan Amortization - French-method schedules with extra-payment comparison
//!
//! This library provides:
//! - Fixed-installment (annuity) payment calculation
//! - Baseline and extra-payment amortization schedules
//! - Savings metrics: interest saved, months saved, prepayment penalty, net savings
//! - Batch scenario runs and extra-payment sweeps
//! - CSV scenario loading and schedule/summary export

pub mod error;
pub mod loan;
pub mod amortization;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::LoanError;
pub use loan::{LoanParameters, RawLoanInputs, LoanScenario};
pub use amortization::{AmortizationEngine, AmortizationResult, ScheduleRow, ScheduleRowWithExtra, SummaryMetrics};
pub use scenario::ScenarioRunner;
