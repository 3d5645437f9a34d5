//! Load loan scenarios from CSV
//!
//! Expected columns: `ScenarioID,Principal,TermMonths,AnnualRate,ExtraPayment,PenaltyPercent`.
//! The last two may be left blank and default to 0.

use super::{LoanParameters, LoanScenario, RawLoanInputs};
use crate::error::{LoanError, Result};
use csv::Reader;
use std::path::Path;

/// Default scenario file location
pub const DEFAULT_SCENARIOS_PATH: &str = "loan_scenarios.csv";

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ScenarioID")]
    scenario_id: String,
    #[serde(rename = "Principal")]
    principal: Option<f64>,
    #[serde(rename = "TermMonths")]
    term_months: Option<u32>,
    #[serde(rename = "AnnualRate")]
    annual_rate: Option<f64>,
    #[serde(rename = "ExtraPayment", default)]
    extra_payment: Option<f64>,
    #[serde(rename = "PenaltyPercent", default)]
    penalty_percent: Option<f64>,
}

impl CsvRow {
    fn to_scenario(self) -> Result<LoanScenario> {
        check_scenario_id(&self.scenario_id)?;

        let raw = RawLoanInputs {
            principal: self.principal,
            term_months: self.term_months,
            annual_rate_percent: self.annual_rate,
            extra_monthly_payment: self.extra_payment,
            early_payment_penalty_percent: self.penalty_percent,
        };

        let missing = raw.missing_fields();
        if !missing.is_empty() {
            return Err(LoanError::MissingFields(missing));
        }

        let params = raw.clean();
        check_non_negative(&self.scenario_id, &params)?;

        Ok(LoanScenario {
            scenario_id: self.scenario_id,
            params,
        })
    }
}

/// Scenario ids end up in output file names, so only plain name characters are accepted
fn check_scenario_id(scenario_id: &str) -> Result<()> {
    let valid = !scenario_id.is_empty()
        && scenario_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(LoanError::InvalidField {
            field: "ScenarioID".to_string(),
            reason: format!("{:?} may only contain letters, digits, '_' and '-'", scenario_id),
        })
    }
}

fn check_non_negative(scenario_id: &str, params: &LoanParameters) -> Result<()> {
    let fields = [
        ("Principal", params.principal),
        ("AnnualRate", params.annual_rate_percent),
        ("ExtraPayment", params.extra_monthly_payment),
        ("PenaltyPercent", params.early_payment_penalty_percent),
    ];

    for (name, value) in fields {
        if value < 0.0 || !value.is_finite() {
            return Err(LoanError::InvalidField {
                field: format!("{} (scenario {})", name, scenario_id),
                reason: format!("must be a non-negative number, got {}", value),
            });
        }
    }

    if params.early_payment_penalty_percent > 100.0 {
        return Err(LoanError::InvalidField {
            field: format!("PenaltyPercent (scenario {})", scenario_id),
            reason: format!("must not exceed 100, got {}", params.early_payment_penalty_percent),
        });
    }

    Ok(())
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<LoanScenario>> {
    let mut reader = Reader::from_path(path)?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    log::debug!("Loaded {} loan scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanScenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::LoanField;

    const SAMPLE: &str = "\
ScenarioID,Principal,TermMonths,AnnualRate,ExtraPayment,PenaltyPercent
base,100000000,120,5,,
prepay,100000000,120,5,500000,2
short,250000,36,7.5,1000,0
";

    #[test]
    fn test_load_scenarios_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).expect("Failed to load scenarios");
        assert_eq!(scenarios.len(), 3);

        let base = &scenarios[0];
        assert_eq!(base.scenario_id, "base");
        assert_eq!(base.params.term_months, 120);
        assert_eq!(base.params.extra_monthly_payment, 0.0);
        assert_eq!(base.params.early_payment_penalty_percent, 0.0);

        let prepay = &scenarios[1];
        assert_eq!(prepay.params.extra_monthly_payment, 500_000.0);
        assert_eq!(prepay.params.early_payment_penalty_percent, 2.0);

        assert_eq!(scenarios[2].params.annual_rate_percent, 7.5);
    }

    #[test]
    fn test_missing_principal_rejected() {
        let data = "\
ScenarioID,Principal,TermMonths,AnnualRate,ExtraPayment,PenaltyPercent
bad,,120,5,,
";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        match err {
            LoanError::MissingFields(fields) => assert_eq!(fields, vec![LoanField::Principal]),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_extra_rejected() {
        let data = "\
ScenarioID,Principal,TermMonths,AnnualRate,ExtraPayment,PenaltyPercent
neg,1000,12,5,-10,0
";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, LoanError::InvalidField { .. }));
    }

    #[test]
    fn test_scenario_id_with_path_rejected() {
        for id in ["../escape", "nested/id", "a\\b", "..", ""] {
            let data = format!(
                "ScenarioID,Principal,TermMonths,AnnualRate,ExtraPayment,PenaltyPercent\n\"{}\",1000,12,5,,\n",
                id
            );
            let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
            assert!(
                matches!(&err, LoanError::InvalidField { field, .. } if field == "ScenarioID"),
                "id {:?} gave {}",
                id,
                err
            );
        }
    }

    #[test]
    fn test_zero_rate_is_loaded() {
        let data = "\
ScenarioID,Principal,TermMonths,AnnualRate,ExtraPayment,PenaltyPercent
free,1000,12,0,,
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).expect("zero rate is a valid input");
        assert!(!scenarios[0].params.is_amortizable());
    }
}
