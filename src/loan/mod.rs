//! Loan parameter structures and scenario loading

mod data;
pub mod loader;

pub use data::{
    LoanField, LoanParameters, LoanScenario, RawLoanInputs, DEFAULT_ANNUAL_RATE_PERCENT,
    DEFAULT_PENALTY_PERCENT, DEFAULT_PRINCIPAL, DEFAULT_TERM_MONTHS,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
