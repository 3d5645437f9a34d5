//! CSV and JSON output for schedules and summaries

use crate::amortization::{AmortizationResult, ScheduleRow, ScheduleRowWithExtra};
use crate::error::Result;
use crate::scenario::{ScenarioResult, SweepPoint};
use std::io::Write;

/// Write the baseline schedule, one row per month
pub fn write_baseline_csv<W: Write>(writer: W, rows: &[ScheduleRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write the extra-payment schedule, including scheduled and net extra columns
pub fn write_extra_csv<W: Write>(writer: W, rows: &[ScheduleRowWithExtra]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Two-column `field,value` summary of a single result
pub fn write_summary_csv<W: Write>(writer: W, result: &AmortizationResult) -> Result<()> {
    let summary = &result.summary;
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["field", "value"])?;
    let fields = [
        ("fixed_monthly_payment", format!("{:.2}", summary.fixed_monthly_payment)),
        ("term_months", result.params.term_months.to_string()),
        ("term_with_extra", result.term_with_extra().to_string()),
        ("months_saved", summary.months_saved.to_string()),
        ("total_interest_baseline", format!("{:.2}", summary.total_interest_baseline)),
        ("total_interest_with_extra", format!("{:.2}", summary.total_interest_with_extra)),
        ("total_paid_baseline", format!("{:.2}", result.total_paid_baseline())),
        ("total_paid_with_extra", format!("{:.2}", result.total_paid_with_extra())),
        ("interest_saved", format!("{:.2}", summary.interest_saved())),
        ("early_payment_penalty_amount", format!("{:.2}", summary.early_payment_penalty_amount)),
        ("net_savings", format!("{:.2}", summary.net_savings())),
        ("residual_balance", format!("{:.2}", result.residual_balance())),
    ];
    for (name, value) in &fields {
        wtr.write_record([*name, value.as_str()])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Full result (parameters, both schedules and summary) as pretty JSON
pub fn write_json<W: Write>(mut writer: W, result: &AmortizationResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    Ok(())
}

/// Text table of the first `rows` months, followed by a count of the months left out.
///
/// Shows the extra-payment schedule when an extra payment is set, the baseline otherwise.
pub fn write_schedule_table<W: Write>(mut writer: W, result: &AmortizationResult, rows: usize) -> Result<()> {
    if result.params.extra_monthly_payment > 0.0 {
        writeln!(writer, "{:>5} {:>16} {:>14} {:>16} {:>16} {:>18}",
            "Month", "Installment", "Net Extra", "Principal", "Interest", "Balance")?;
        writeln!(writer, "{}", "-".repeat(90))?;
        for row in result.extra_payment_schedule.iter().take(rows) {
            writeln!(writer, "{:>5} {:>16.2} {:>14.2} {:>16.2} {:>16.2} {:>18.2}",
                row.month, row.scheduled_payment, row.net_extra_payment,
                row.principal_payment, row.interest_payment, row.balance)?;
        }
        if result.extra_payment_schedule.len() > rows {
            writeln!(writer, "... ({} more months)", result.extra_payment_schedule.len() - rows)?;
        }
    } else {
        writeln!(writer, "{:>5} {:>16} {:>16} {:>16} {:>18}", "Month", "Payment", "Principal", "Interest", "Balance")?;
        writeln!(writer, "{}", "-".repeat(75))?;
        for row in result.baseline_schedule.iter().take(rows) {
            writeln!(writer, "{:>5} {:>16.2} {:>16.2} {:>16.2} {:>18.2}",
                row.month, row.payment, row.principal_payment, row.interest_payment, row.balance)?;
        }
        if result.baseline_schedule.len() > rows {
            writeln!(writer, "... ({} more months)", result.baseline_schedule.len() - rows)?;
        }
    }
    Ok(())
}

/// One summary line per batch scenario
pub fn write_batch_summary_csv<W: Write>(writer: W, results: &[ScenarioResult]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record([
        "ScenarioID",
        "Principal",
        "TermMonths",
        "AnnualRate",
        "ExtraPayment",
        "PenaltyPercent",
        "FixedPayment",
        "TermWithExtra",
        "MonthsSaved",
        "InterestBaseline",
        "InterestWithExtra",
        "PenaltyAmount",
        "NetSavings",
    ])?;

    for sr in results {
        let p = &sr.result.params;
        let s = &sr.result.summary;
        wtr.write_record([
            sr.scenario_id.clone(),
            format!("{:.2}", p.principal),
            p.term_months.to_string(),
            format!("{}", p.annual_rate_percent),
            format!("{:.2}", p.extra_monthly_payment),
            format!("{}", p.early_payment_penalty_percent),
            format!("{:.2}", s.fixed_monthly_payment),
            sr.result.term_with_extra().to_string(),
            s.months_saved.to_string(),
            format!("{:.2}", s.total_interest_baseline),
            format!("{:.2}", s.total_interest_with_extra),
            format!("{:.2}", s.early_payment_penalty_amount),
            format!("{:.2}", s.net_savings()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// One line per extra-payment amount
pub fn write_sweep_csv<W: Write>(writer: W, sweep: &[SweepPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["ExtraPayment", "TermWithExtra", "MonthsSaved", "InterestSaved", "PenaltyAmount", "NetSavings"])?;
    for point in sweep {
        wtr.write_record([
            format!("{:.2}", point.extra_monthly_payment),
            point.term_with_extra.to_string(),
            point.summary.months_saved.to_string(),
            format!("{:.2}", point.summary.interest_saved()),
            format!("{:.2}", point.summary.early_payment_penalty_amount),
            format!("{:.2}", point.net_savings()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::AmortizationEngine;
    use crate::loan::LoanParameters;

    fn sample_result() -> AmortizationResult {
        let params = LoanParameters::new(1000.0, 12, 12.0).with_extra_payment(100.0, 2.0);
        AmortizationEngine::new().calculate(&params)
    }

    #[test]
    fn test_baseline_csv_header_and_rows() {
        let result = sample_result();
        let mut buf = Vec::new();
        write_baseline_csv(&mut buf, &result.baseline_schedule).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("month,payment,principal_payment,interest_payment,balance,cumulative_interest")
        );
        assert_eq!(lines.count(), 12);
    }

    #[test]
    fn test_extra_csv_has_extra_columns() {
        let result = sample_result();
        let mut buf = Vec::new();
        write_extra_csv(&mut buf, &result.extra_payment_schedule).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.contains("scheduled_payment"));
        assert!(header.contains("net_extra_payment"));
        assert_eq!(text.lines().count(), result.extra_payment_schedule.len() + 1);
    }

    #[test]
    fn test_summary_csv() {
        let result = sample_result();
        let mut buf = Vec::new();
        write_summary_csv(&mut buf, &result).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("field,value\n"));
        assert!(text.contains("fixed_monthly_payment,88.85"));
        assert!(text.contains("net_savings,"));
    }

    #[test]
    fn test_schedule_table_shows_extra_schedule_when_prepaying() {
        let result = sample_result();
        let mut buf = Vec::new();
        write_schedule_table(&mut buf, &result, 3).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.contains("Net Extra"));
        assert_eq!(text.lines().count(), 2 + 3 + 1);
        let hidden = result.extra_payment_schedule.len() - 3;
        assert!(text.ends_with(&format!("... ({} more months)\n", hidden)));
    }

    #[test]
    fn test_schedule_table_shows_baseline_without_extra() {
        let params = LoanParameters::new(1000.0, 12, 12.0);
        let result = AmortizationEngine::new().calculate(&params);
        let mut buf = Vec::new();
        write_schedule_table(&mut buf, &result, 24).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("Net Extra"));
        assert!(text.lines().next().unwrap().contains("Payment"));
        assert_eq!(text.lines().count(), 2 + 12);
    }

    #[test]
    fn test_json_round_trips_result() {
        let result = sample_result();
        let mut buf = Vec::new();
        write_json(&mut buf, &result).unwrap();

        let parsed: AmortizationResult = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.extra_payment_schedule.len(), result.extra_payment_schedule.len());
        assert_eq!(parsed.summary.months_saved, result.summary.months_saved);
    }

    #[test]
    fn test_json_write_failure_is_reported() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = write_json(Broken, &sample_result()).unwrap_err();
        assert!(matches!(err, crate::error::LoanError::Json(_)));
    }
}
