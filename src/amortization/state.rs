//! Running balance tracking for a single schedule

/// State of the loan at a point in time during amortization
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Current month (1-indexed once the first period starts)
    pub month: u32,

    /// Outstanding principal, not floored
    pub balance: f64,

    /// Interest accumulated through the current month
    pub cumulative_interest: f64,
}

impl AmortizationState {
    /// Initialize state at loan origination
    pub fn new(principal: f64) -> Self {
        Self {
            month: 0,
            balance: principal,
            cumulative_interest: 0.0,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
    }

    /// Interest charged on the outstanding balance for one period
    pub fn interest_due(&self, monthly_rate: f64) -> f64 {
        self.balance * monthly_rate
    }

    /// Record one period's interest and principal repayment
    pub fn apply_payment(&mut self, interest: f64, principal: f64) {
        self.cumulative_interest += interest;
        self.balance -= principal;
    }

    /// Balance as reported in a schedule row
    pub fn reported_balance(&self) -> f64 {
        if self.balance > 0.0 {
            self.balance
        } else {
            0.0
        }
    }

    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_payment() {
        let mut state = AmortizationState::new(1000.0);
        state.advance_month();
        let interest = state.interest_due(0.01);
        assert_eq!(interest, 10.0);

        state.apply_payment(interest, 90.0);
        assert_eq!(state.month, 1);
        assert_eq!(state.balance, 910.0);
        assert_eq!(state.cumulative_interest, 10.0);
    }

    #[test]
    fn test_reported_balance_floors_without_touching_balance() {
        let mut state = AmortizationState::new(100.0);
        state.apply_payment(0.0, 100.5);
        assert_eq!(state.reported_balance(), 0.0);
        assert_eq!(state.balance, -0.5);
        assert!(state.is_paid_off());
    }
}
