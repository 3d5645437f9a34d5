//! Run amortization for every scenario in a CSV file
//!
//! Outputs one summary line per scenario. With `--sweep`, also re-runs each
//! scenario over a range of extra payment amounts.

use anyhow::Context;
use clap::Parser;
use loan_amortization::{
    loan::load_scenarios, loan::loader::DEFAULT_SCENARIOS_PATH, report, scenario::best_sweep_point,
    ScenarioRunner,
};
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Batch loan amortization from a scenario CSV")]
struct Args {
    /// Scenario file (ScenarioID,Principal,TermMonths,AnnualRate,ExtraPayment,PenaltyPercent)
    #[arg(long, env = "LOAN_SCENARIOS", default_value = DEFAULT_SCENARIOS_PATH)]
    input: PathBuf,

    /// Summary output file
    #[arg(long, default_value = "batch_summary.csv")]
    output: PathBuf,

    /// Extra payment amounts to sweep for each scenario
    #[arg(long, value_delimiter = ',')]
    sweep: Vec<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading scenarios from {}...", args.input.display());

    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("Failed to load scenarios from {}", args.input.display()))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::new();
    let results = runner.run_batch(&scenarios);

    let skipped = results.iter().filter(|r| r.result.is_empty()).count();
    if skipped > 0 {
        log::warn!("{} scenarios had insufficient data to amortize", skipped);
    }

    let file = File::create(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    report::write_batch_summary_csv(file, &results)?;
    println!("Output written to {}", args.output.display());

    if !args.sweep.is_empty() {
        for scenario in &scenarios {
            let sweep = runner.extra_payment_sweep(&scenario.params, &args.sweep);
            let path = args
                .output
                .with_file_name(format!("sweep_{}.csv", scenario.scenario_id));
            let file = File::create(&path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
            report::write_sweep_csv(file, &sweep)?;

            if let Some(best) = best_sweep_point(&sweep) {
                println!(
                    "  {}: best extra payment {:.2} saves {:.2} net ({} months)",
                    scenario.scenario_id,
                    best.extra_monthly_payment,
                    best.net_savings(),
                    best.summary.months_saved
                );
            }
        }
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
