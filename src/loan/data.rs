//! Loan parameter structures and input normalization

use serde::{Deserialize, Serialize};

/// Initial values of the calculator form
pub const DEFAULT_PRINCIPAL: f64 = 100_000_000.0;
pub const DEFAULT_TERM_MONTHS: u32 = 120;
pub const DEFAULT_ANNUAL_RATE_PERCENT: f64 = 5.0;
pub const DEFAULT_PENALTY_PERCENT: f64 = 2.0;

/// Parameters for a single amortization run
///
/// All numeric fields are expected to be non-negative. A negative rate, or a
/// penalty above 100%, is outside the engine's contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanParameters {
    /// Amount borrowed
    pub principal: f64,

    /// Number of monthly periods
    pub term_months: u32,

    /// Nominal annual rate as a percentage (5.0 = 5%)
    pub annual_rate_percent: f64,

    /// Additional principal paid every period on top of the installment
    #[serde(default)]
    pub extra_monthly_payment: f64,

    /// Percentage charged by the lender on each extra payment
    #[serde(default)]
    pub early_payment_penalty_percent: f64,
}

impl LoanParameters {
    /// Create parameters with no extra payment and no penalty
    pub fn new(principal: f64, term_months: u32, annual_rate_percent: f64) -> Self {
        Self {
            principal,
            term_months,
            annual_rate_percent,
            extra_monthly_payment: 0.0,
            early_payment_penalty_percent: 0.0,
        }
    }

    /// Builder-style setter for the recurring extra payment and its penalty
    pub fn with_extra_payment(mut self, extra_monthly_payment: f64, penalty_percent: f64) -> Self {
        self.extra_monthly_payment = extra_monthly_payment;
        self.early_payment_penalty_percent = penalty_percent;
        self
    }

    /// Monthly periodic rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Whether the parameters carry enough data to amortize.
    /// A rate of exactly zero counts as missing.
    pub fn is_amortizable(&self) -> bool {
        self.principal > 0.0 && self.term_months > 0 && self.annual_rate_percent > 0.0
    }

    /// Extra principal actually applied each period after the penalty haircut
    pub fn net_extra_payment(&self) -> f64 {
        (1.0 - self.early_payment_penalty_percent / 100.0) * self.extra_monthly_payment
    }
}

impl Default for LoanParameters {
    fn default() -> Self {
        Self {
            principal: DEFAULT_PRINCIPAL,
            term_months: DEFAULT_TERM_MONTHS,
            annual_rate_percent: DEFAULT_ANNUAL_RATE_PERCENT,
            extra_monthly_payment: 0.0,
            early_payment_penalty_percent: DEFAULT_PENALTY_PERCENT,
        }
    }
}

/// Required loan input that can be reported as missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanField {
    Principal,
    TermMonths,
    AnnualRate,
}

impl LoanField {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanField::Principal => "principal",
            LoanField::TermMonths => "term_months",
            LoanField::AnnualRate => "annual_rate_percent",
        }
    }
}

impl std::fmt::Display for LoanField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loan inputs as collected from a form or file, any of which may be unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawLoanInputs {
    pub principal: Option<f64>,
    pub term_months: Option<u32>,
    pub annual_rate_percent: Option<f64>,
    pub extra_monthly_payment: Option<f64>,
    pub early_payment_penalty_percent: Option<f64>,
}

impl RawLoanInputs {
    /// Required fields that are unset or unusable.
    ///
    /// Principal and term are missing when unset or zero. The rate is only
    /// missing when unset; an explicit 0 passes here and is rejected later by
    /// the amortization guard.
    pub fn missing_fields(&self) -> Vec<LoanField> {
        let mut missing = Vec::new();
        if self.principal.map_or(true, |p| p == 0.0) {
            missing.push(LoanField::Principal);
        }
        if self.term_months.map_or(true, |t| t == 0) {
            missing.push(LoanField::TermMonths);
        }
        if self.annual_rate_percent.is_none() {
            missing.push(LoanField::AnnualRate);
        }
        missing
    }

    /// Replace every unset field with 0
    pub fn clean(&self) -> LoanParameters {
        LoanParameters {
            principal: self.principal.unwrap_or(0.0),
            term_months: self.term_months.unwrap_or(0),
            annual_rate_percent: self.annual_rate_percent.unwrap_or(0.0),
            extra_monthly_payment: self.extra_monthly_payment.unwrap_or(0.0),
            early_payment_penalty_percent: self.early_payment_penalty_percent.unwrap_or(0.0),
        }
    }
}

impl From<LoanParameters> for RawLoanInputs {
    fn from(params: LoanParameters) -> Self {
        Self {
            principal: Some(params.principal),
            term_months: Some(params.term_months),
            annual_rate_percent: Some(params.annual_rate_percent),
            extra_monthly_payment: Some(params.extra_monthly_payment),
            early_payment_penalty_percent: Some(params.early_payment_penalty_percent),
        }
    }
}

/// A named parameter set, as loaded from a scenario file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScenario {
    pub scenario_id: String,
    pub params: LoanParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        let params = LoanParameters::new(1000.0, 12, 12.0);
        assert!((params.monthly_rate() - 0.01).abs() < 1e-15);
    }

    #[test]
    fn test_zero_rate_not_amortizable() {
        assert!(!LoanParameters::new(1000.0, 12, 0.0).is_amortizable());
        assert!(!LoanParameters::new(0.0, 12, 5.0).is_amortizable());
        assert!(!LoanParameters::new(1000.0, 0, 5.0).is_amortizable());
        assert!(LoanParameters::new(1000.0, 12, 5.0).is_amortizable());
    }

    #[test]
    fn test_net_extra_payment_haircut() {
        let params = LoanParameters::new(1000.0, 12, 5.0).with_extra_payment(100.0, 2.0);
        assert!((params.net_extra_payment() - 98.0).abs() < 1e-12);
    }

    #[test]
    fn test_missing_fields() {
        let raw = RawLoanInputs {
            principal: Some(0.0),
            term_months: None,
            annual_rate_percent: Some(0.0),
            ..Default::default()
        };
        assert_eq!(raw.missing_fields(), vec![LoanField::Principal, LoanField::TermMonths]);

        let raw = RawLoanInputs::from(LoanParameters::default());
        assert!(raw.missing_fields().is_empty());
    }

    #[test]
    fn test_clean_defaults_unset_to_zero() {
        let raw = RawLoanInputs {
            principal: Some(5000.0),
            term_months: Some(24),
            ..Default::default()
        };
        let params = raw.clean();
        assert_eq!(params.principal, 5000.0);
        assert_eq!(params.term_months, 24);
        assert_eq!(params.annual_rate_percent, 0.0);
        assert_eq!(params.extra_monthly_payment, 0.0);
        assert_eq!(params.early_payment_penalty_percent, 0.0);
    }

    #[test]
    fn test_default_matches_calculator_form() {
        let params = LoanParameters::default();
        assert_eq!(params.principal, 100_000_000.0);
        assert_eq!(params.term_months, 120);
        assert_eq!(params.annual_rate_percent, 5.0);
        assert_eq!(params.extra_monthly_payment, 0.0);
        assert_eq!(params.early_payment_penalty_percent, 2.0);
    }
}
