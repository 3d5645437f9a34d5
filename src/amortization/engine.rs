//! Core amortization engine for French (constant-installment) loans
//!
//! Produces two schedules from the same fixed installment: a baseline that
//! runs the full term, and one where a recurring extra payment is applied to
//! principal every month until the loan is paid off or the term ends.
//!
//! The early-payment penalty is applied twice, in two different ways:
//! - each period's extra payment is reduced by the penalty percentage before
//!   it reaches principal, and
//! - a separate penalty amount is reported as
//!   `extra payments made * extra payment * penalty%`.
//!
//! This is not the usual one-time penalty on the prepaid balance; callers
//! comparing against a conventional model should expect different figures.

use super::schedule::{AmortizationResult, ScheduleRow, ScheduleRowWithExtra, SummaryMetrics};
use super::state::AmortizationState;
use crate::loan::{LoanParameters, RawLoanInputs};

/// Fixed installment from the annuity formula
///
/// `payment = P * r(1+r)^n / ((1+r)^n - 1)`
///
/// The caller guarantees `monthly_rate > 0` and `term_months > 0`; see
/// [`fixed_payment`] for the guarded version.
pub fn compute_fixed_payment(principal: f64, monthly_rate: f64, term_months: u32) -> f64 {
    let growth = (1.0 + monthly_rate).powi(term_months as i32);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Fixed installment for a parameter set, or `None` when there is not enough
/// data to amortize (non-positive principal, term, or rate)
pub fn fixed_payment(params: &LoanParameters) -> Option<f64> {
    if !params.is_amortizable() {
        return None;
    }
    Some(compute_fixed_payment(
        params.principal,
        params.monthly_rate(),
        params.term_months,
    ))
}

/// Baseline schedule: exactly `term_months` rows, no extra payments.
///
/// The reported balance is floored at 0 but the running balance is not, so a
/// rounding overshoot never feeds back into the next period's interest.
pub fn compute_baseline_schedule(params: &LoanParameters) -> Vec<ScheduleRow> {
    match fixed_payment(params) {
        Some(payment) => baseline_rows(params, payment),
        None => Vec::new(),
    }
}

fn baseline_rows(params: &LoanParameters, payment: f64) -> Vec<ScheduleRow> {
    let monthly_rate = params.monthly_rate();
    let mut state = AmortizationState::new(params.principal);
    let mut rows = Vec::with_capacity(params.term_months as usize);

    for _month in 1..=params.term_months {
        state.advance_month();

        let interest_payment = state.interest_due(monthly_rate);
        let principal_payment = payment - interest_payment;
        state.apply_payment(interest_payment, principal_payment);

        rows.push(ScheduleRow {
            month: state.month,
            payment,
            principal_payment,
            interest_payment,
            balance: state.reported_balance(),
            cumulative_interest: state.cumulative_interest,
        });
    }

    rows
}

/// Schedule with the recurring extra payment applied to principal.
///
/// Uses the same installment as the baseline. Stops after the row in which
/// the balance reaches 0, and never runs past `term_months`; a loan that is
/// not paid off by then ends with a residual balance.
pub fn compute_extra_payment_schedule(params: &LoanParameters) -> Vec<ScheduleRowWithExtra> {
    match fixed_payment(params) {
        Some(payment) => extra_payment_rows(params, payment),
        None => Vec::new(),
    }
}

fn extra_payment_rows(params: &LoanParameters, payment: f64) -> Vec<ScheduleRowWithExtra> {
    let monthly_rate = params.monthly_rate();
    let net_extra_payment = params.net_extra_payment();
    let mut state = AmortizationState::new(params.principal);
    let mut rows = Vec::new();

    while !state.is_paid_off() && state.month < params.term_months {
        state.advance_month();

        let interest_payment = state.interest_due(monthly_rate);
        let principal_payment = payment - interest_payment;
        let actual_principal_payment = principal_payment + net_extra_payment;

        state.apply_payment(interest_payment, actual_principal_payment);
        if state.balance < 0.0 {
            state.balance = 0.0;
        }

        rows.push(ScheduleRowWithExtra {
            month: state.month,
            payment: payment + net_extra_payment,
            scheduled_payment: payment,
            net_extra_payment,
            principal_payment: actual_principal_payment,
            interest_payment,
            balance: state.balance,
            cumulative_interest: state.cumulative_interest,
        });
    }

    rows
}

/// Summary metrics comparing the two schedules
pub fn compute_summary(
    params: &LoanParameters,
    baseline: &[ScheduleRow],
    with_extra: &[ScheduleRowWithExtra],
) -> SummaryMetrics {
    let fixed_monthly_payment = fixed_payment(params).unwrap_or(0.0);
    if fixed_monthly_payment == 0.0 {
        return SummaryMetrics::default();
    }

    let total_interest_baseline = baseline.last().map(|r| r.cumulative_interest).unwrap_or(0.0);
    let total_interest_with_extra = with_extra.last().map(|r| r.cumulative_interest).unwrap_or(0.0);
    let extra_months = with_extra.len() as u32;

    SummaryMetrics {
        fixed_monthly_payment,
        total_interest_baseline,
        total_interest_with_extra,
        months_saved: params.term_months.saturating_sub(extra_months),
        early_payment_penalty_amount: extra_months as f64
            * params.extra_monthly_payment
            * (params.early_payment_penalty_percent / 100.0),
    }
}

/// Main amortization engine
///
/// Stateless; every call recomputes both schedules from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmortizationEngine;

impl AmortizationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run both schedules and the summary for one parameter set
    pub fn calculate(&self, params: &LoanParameters) -> AmortizationResult {
        let payment = match fixed_payment(params) {
            Some(payment) => payment,
            None => {
                log::debug!(
                    "Insufficient data to amortize (principal={}, term={}, rate={}%)",
                    params.principal,
                    params.term_months,
                    params.annual_rate_percent
                );
                return AmortizationResult::empty(*params);
            }
        };

        let baseline_schedule = baseline_rows(params, payment);
        let extra_payment_schedule = extra_payment_rows(params, payment);
        let summary = compute_summary(params, &baseline_schedule, &extra_payment_schedule);

        log::debug!(
            "Amortized {} over {} months: payment={:.2}, months_saved={}, net_savings={:.2}",
            params.principal,
            params.term_months,
            payment,
            summary.months_saved,
            summary.net_savings()
        );

        AmortizationResult {
            params: *params,
            fixed_monthly_payment: payment,
            baseline_schedule,
            extra_payment_schedule,
            summary,
        }
    }

    /// Run from unvalidated inputs. Any missing required field yields an empty result.
    pub fn calculate_raw(&self, inputs: &RawLoanInputs) -> AmortizationResult {
        let params = inputs.clean();
        let missing = inputs.missing_fields();
        if !missing.is_empty() {
            log::debug!("Skipping calculation, missing fields: {:?}", missing);
            return AmortizationResult::empty(params);
        }
        self.calculate(&params)
    }
}
