//! Amortization engine for fixed-installment loans

mod state;
mod engine;
mod schedule;

pub use state::AmortizationState;
pub use engine::{
    compute_baseline_schedule, compute_extra_payment_schedule, compute_fixed_payment,
    compute_summary, fixed_payment, AmortizationEngine,
};
pub use schedule::{AmortizationResult, ScheduleRow, ScheduleRowWithExtra, SummaryMetrics};
