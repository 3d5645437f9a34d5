//! Scenario runner for batch amortization runs
//!
//! Runs many independent parameter sets, or one loan under a range of extra
//! payment amounts, in parallel.

use crate::amortization::{AmortizationEngine, AmortizationResult, SummaryMetrics};
use crate::loan::{LoanParameters, LoanScenario};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of one scenario in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_id: String,
    pub result: AmortizationResult,
}

/// One point of an extra-payment sweep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub extra_monthly_payment: f64,
    pub term_with_extra: u32,
    pub summary: SummaryMetrics,
}

impl SweepPoint {
    pub fn net_savings(&self) -> f64 {
        self.summary.net_savings()
    }
}

/// Batch runner around the amortization engine
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let sweep = runner.extra_payment_sweep(&params, &[0.0, 100_000.0, 500_000.0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: AmortizationEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            engine: AmortizationEngine::new(),
        }
    }

    /// Run a single parameter set
    pub fn run(&self, params: &LoanParameters) -> AmortizationResult {
        self.engine.calculate(params)
    }

    /// Run many scenarios in parallel. Output order matches input order.
    pub fn run_batch(&self, scenarios: &[LoanScenario]) -> Vec<ScenarioResult> {
        log::info!("Running {} loan scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|scenario| ScenarioResult {
                scenario_id: scenario.scenario_id.clone(),
                result: self.engine.calculate(&scenario.params),
            })
            .collect()
    }

    /// Re-run one loan once per extra payment amount, keeping its penalty rate
    pub fn extra_payment_sweep(&self, params: &LoanParameters, extra_payments: &[f64]) -> Vec<SweepPoint> {
        extra_payments
            .par_iter()
            .map(|&extra| {
                let adjusted = params.with_extra_payment(extra, params.early_payment_penalty_percent);
                let result = self.engine.calculate(&adjusted);
                SweepPoint {
                    extra_monthly_payment: extra,
                    term_with_extra: result.term_with_extra(),
                    summary: result.summary,
                }
            })
            .collect()
    }

    /// Sweep point with the largest net savings, if any
    pub fn best_net_savings(&self, params: &LoanParameters, extra_payments: &[f64]) -> Option<SweepPoint> {
        best_sweep_point(&self.extra_payment_sweep(params, extra_payments))
    }
}

/// Point of an existing sweep with the largest net savings
pub fn best_sweep_point(sweep: &[SweepPoint]) -> Option<SweepPoint> {
    sweep
        .iter()
        .copied()
        .max_by(|a, b| a.net_savings().total_cmp(&b.net_savings()))
}
