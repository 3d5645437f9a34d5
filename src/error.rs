//! Error types for loan input loading and validation
//!
//! The amortization engine itself never fails: degenerate inputs resolve to
//! empty schedules. Errors only arise at the I/O boundary.

use thiserror::Error;

use crate::loan::LoanField;

#[derive(Debug, Error)]
pub enum LoanError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<LoanField>),

    #[error("Invalid input: {field} - {reason}")]
    InvalidField { field: String, reason: String },
}

fn format_fields(fields: &[LoanField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, LoanError>;
