//! Loan Amortization CLI
//!
//! Computes the baseline and extra-payment schedules for one loan, prints a
//! comparison and writes the full schedules to CSV.

use anyhow::Context;
use clap::Parser;
use loan_amortization::{
    loan::{DEFAULT_ANNUAL_RATE_PERCENT, DEFAULT_PENALTY_PERCENT, DEFAULT_PRINCIPAL, DEFAULT_TERM_MONTHS},
    report, AmortizationEngine, AmortizationResult, LoanParameters,
};
use std::fs::File;
use std::path::{Path, PathBuf};

/// French-method loan amortization with extra payments
#[derive(Parser, Debug)]
#[command(name = "loan_amortization", version, about)]
struct Args {
    /// Amount borrowed
    #[arg(long, env = "LOAN_PRINCIPAL", default_value_t = DEFAULT_PRINCIPAL)]
    principal: f64,

    /// Term in months
    #[arg(long, env = "LOAN_TERM_MONTHS", default_value_t = DEFAULT_TERM_MONTHS)]
    term_months: u32,

    /// Nominal annual rate in percent (5 = 5%)
    #[arg(long, env = "LOAN_ANNUAL_RATE", default_value_t = DEFAULT_ANNUAL_RATE_PERCENT)]
    rate: f64,

    /// Extra principal paid every month
    #[arg(long, env = "LOAN_EXTRA_PAYMENT", default_value_t = 0.0)]
    extra: f64,

    /// Lender penalty on extra payments, in percent
    #[arg(long, env = "LOAN_PENALTY_PERCENT", default_value_t = DEFAULT_PENALTY_PERCENT)]
    penalty: f64,

    /// Number of schedule rows to print
    #[arg(long, default_value_t = 24)]
    rows: usize,

    /// Directory for the CSV outputs
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Print the full result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let params = LoanParameters::new(args.principal, args.term_months, args.rate)
        .with_extra_payment(args.extra, args.penalty);

    let result = AmortizationEngine::new().calculate(&params);

    if args.json {
        report::write_json(std::io::stdout().lock(), &result)?;
        return Ok(());
    }

    if result.is_empty() {
        println!("Insufficient data to amortize: principal, term and rate must all be positive.");
        return Ok(());
    }

    print_summary(&result);
    report::write_schedule_table(std::io::stdout().lock(), &result, args.rows)?;
    write_outputs(&result, &args.output_dir)?;

    Ok(())
}

fn print_summary(result: &AmortizationResult) {
    let summary = &result.summary;

    println!("Loan Amortization v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");
    println!("  Principal:        {:.2}", result.params.principal);
    println!("  Term:             {} months", result.params.term_months);
    println!("  Annual Rate:      {}%", result.params.annual_rate_percent);
    println!("  Fixed Payment:    {:.2}", summary.fixed_monthly_payment);
    println!();

    println!("Original plan:");
    println!("  Total Interest:   {:.2}", summary.total_interest_baseline);
    println!("  Total Paid:       {:.2}", result.total_paid_baseline());

    if result.params.extra_monthly_payment > 0.0 {
        println!("\nWith extra payment of {:.2}/month:", result.params.extra_monthly_payment);
        println!("  Monthly Payment:  {:.2}", summary.fixed_monthly_payment + result.params.extra_monthly_payment);
        println!("  Term:             {} months", result.term_with_extra());
        println!("  Total Interest:   {:.2}", summary.total_interest_with_extra);
        println!("  Total Paid:       {:.2}", result.total_paid_with_extra());
        println!("  Months Saved:     {}", summary.months_saved);
        println!("  Interest Saved:   {:.2}", summary.interest_saved());
        println!("  Penalty:          {:.2}", summary.early_payment_penalty_amount);
        if summary.has_penalty() {
            println!("  Net Savings:      {:.2}", summary.net_savings());
        } else {
            println!("  No early payment penalty");
        }
        if result.residual_balance() > 0.0 {
            println!("  Residual Balance: {:.2}", result.residual_balance());
        }
    }
    println!();
}

fn write_outputs(result: &AmortizationResult, dir: &Path) -> anyhow::Result<()> {
    let baseline_path = dir.join("baseline_schedule.csv");
    let file = File::create(&baseline_path)
        .with_context(|| format!("Unable to create {}", baseline_path.display()))?;
    report::write_baseline_csv(file, &result.baseline_schedule)?;

    let extra_path = dir.join("extra_payment_schedule.csv");
    let file = File::create(&extra_path)
        .with_context(|| format!("Unable to create {}", extra_path.display()))?;
    report::write_extra_csv(file, &result.extra_payment_schedule)?;

    let summary_path = dir.join("summary.csv");
    let file = File::create(&summary_path)
        .with_context(|| format!("Unable to create {}", summary_path.display()))?;
    report::write_summary_csv(file, result)?;

    println!("\nFull schedules written to: {}", dir.display());
    Ok(())
}
