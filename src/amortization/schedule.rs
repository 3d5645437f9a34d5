//! Schedule rows and result structures

use serde::{Deserialize, Serialize};

use crate::loan::LoanParameters;

/// One period of the baseline (no extra payment) schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub month: u32,
    /// Fixed installment
    pub payment: f64,
    pub principal_payment: f64,
    pub interest_payment: f64,
    /// Remaining principal, floored at 0
    pub balance: f64,
    pub cumulative_interest: f64,
}

/// One period of the schedule with a recurring extra payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRowWithExtra {
    pub month: u32,
    /// Installment plus net extra payment
    pub payment: f64,
    /// Unmodified fixed installment
    pub scheduled_payment: f64,
    /// Extra payment after the penalty haircut
    pub net_extra_payment: f64,
    /// Scheduled principal component plus net extra payment
    pub principal_payment: f64,
    pub interest_payment: f64,
    /// Remaining principal, clamped at 0
    pub balance: f64,
    pub cumulative_interest: f64,
}

/// Comparative metrics between the two schedules
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub fixed_monthly_payment: f64,
    pub total_interest_baseline: f64,
    pub total_interest_with_extra: f64,
    /// Original term minus the length of the extra-payment schedule
    pub months_saved: u32,
    /// Number of extra payments made times the penalty rate
    pub early_payment_penalty_amount: f64,
}

impl SummaryMetrics {
    /// Interest avoided by paying extra, before the penalty
    pub fn interest_saved(&self) -> f64 {
        self.total_interest_baseline - self.total_interest_with_extra
    }

    /// Interest saved minus the penalty. Negative when the penalty outweighs the savings.
    pub fn net_savings(&self) -> f64 {
        self.interest_saved() - self.early_payment_penalty_amount
    }

    pub fn has_penalty(&self) -> bool {
        self.early_payment_penalty_amount > 0.0
    }
}

/// Complete amortization result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    /// Parameters the result was computed from
    pub params: LoanParameters,

    pub fixed_monthly_payment: f64,

    pub baseline_schedule: Vec<ScheduleRow>,

    pub extra_payment_schedule: Vec<ScheduleRowWithExtra>,

    pub summary: SummaryMetrics,
}

impl AmortizationResult {
    /// Result for inputs that cannot be amortized
    pub fn empty(params: LoanParameters) -> Self {
        Self {
            params,
            fixed_monthly_payment: 0.0,
            baseline_schedule: Vec::new(),
            extra_payment_schedule: Vec::new(),
            summary: SummaryMetrics::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.baseline_schedule.is_empty() && self.extra_payment_schedule.is_empty()
    }

    /// Principal plus all baseline interest
    pub fn total_paid_baseline(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.params.principal + self.summary.total_interest_baseline
    }

    /// Principal plus all interest under the extra-payment plan
    pub fn total_paid_with_extra(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.params.principal + self.summary.total_interest_with_extra
    }

    /// Number of months actually needed with extra payments
    pub fn term_with_extra(&self) -> u32 {
        self.extra_payment_schedule.len() as u32
    }

    /// Balance left after the extra-payment schedule ends (0 when paid off)
    pub fn residual_balance(&self) -> f64 {
        self.extra_payment_schedule
            .last()
            .map(|r| r.balance)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_savings_can_be_negative() {
        let summary = SummaryMetrics {
            fixed_monthly_payment: 100.0,
            total_interest_baseline: 500.0,
            total_interest_with_extra: 450.0,
            months_saved: 2,
            early_payment_penalty_amount: 80.0,
        };
        assert_eq!(summary.interest_saved(), 50.0);
        assert_eq!(summary.net_savings(), -30.0);
        assert!(summary.has_penalty());
    }

    #[test]
    fn test_empty_result() {
        let result = AmortizationResult::empty(LoanParameters::new(0.0, 12, 5.0));
        assert!(result.is_empty());
        assert_eq!(result.total_paid_baseline(), 0.0);
        assert_eq!(result.total_paid_with_extra(), 0.0);
        assert_eq!(result.term_with_extra(), 0);
        assert_eq!(result.residual_balance(), 0.0);
        assert_eq!(result.summary, SummaryMetrics::default());
    }
}
