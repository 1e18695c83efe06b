use crate::calculations::CalculationError;
use crate::report::{
    ErlangParameters, ErlangResult, FteParameters, FteResult, Report, ReportKind,
    ReportParameters, ReportResult,
};
use crate::scenario::{self, ERLANG_COLUMNS, FTE_COLUMNS};
use chrono::NaiveDate;
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug)]
pub enum ExportError {
    /// Export requested before the report result was computed.
    MissingResult,
    /// Stored result variant disagrees with the report kind.
    KindMismatch(ReportKind),
    Calculation(CalculationError),
    Csv(csv::Error),
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::MissingResult => write!(f, "report has no computed result to export"),
            ExportError::KindMismatch(kind) => {
                write!(f, "stored result does not match report kind '{kind}'")
            }
            ExportError::Calculation(err) => write!(f, "calculation error: {err}"),
            ExportError::Csv(err) => write!(f, "csv error: {err}"),
            ExportError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<CalculationError> for ExportError {
    fn from(value: CalculationError) -> Self {
        Self::Calculation(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<io::Error> for ExportError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

/// A shaped tabular document: ordered rows of string cells plus the
/// conventional download filename. Section heading rows have one cell;
/// blank separator rows have no cells and serialize as empty lines.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportDocument {
    rows: Vec<Vec<String>>,
    filename: String,
}

impl ExportDocument {
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// `"<Report Title> by <user name> on <ISO date>.csv"`
    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn to_csv_string(&self) -> ExportResult<String> {
        let mut out = String::new();
        for record in &self.rows {
            out.push_str(&csv_line(record)?);
        }
        Ok(out)
    }

    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> ExportResult<()> {
        let mut file = File::create(path)?;
        file.write_all(self.to_csv_string()?.as_bytes())?;
        Ok(())
    }
}

/// Serialize one record through the csv writer so field quoting follows
/// the usual rules. A zero-cell record is a bare separator line, which
/// the writer itself would quote as `""`.
fn csv_line(record: &[String]) -> ExportResult<String> {
    if record.is_empty() {
        return Ok("\n".to_string());
    }
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(record)?;
    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|err| ExportError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
}

/// Shape a computed report into the export document: title, report
/// name/user/date metadata, parameters, baseline result, then the
/// scenario analysis.
pub fn export_report(report: &Report, date: NaiveDate) -> ExportResult<ExportDocument> {
    let result = report.result.as_ref().ok_or(ExportError::MissingResult)?;
    let rows = match (&report.parameters, result) {
        (ReportParameters::Fte(parameters), ReportResult::Fte(result)) => {
            fte_rows(report, parameters, result, date)?
        }
        (ReportParameters::Erlang(parameters), ReportResult::Erlang(result)) => {
            erlang_rows(report, parameters, result, date)
        }
        _ => return Err(ExportError::KindMismatch(report.kind)),
    };

    Ok(ExportDocument {
        rows,
        filename: format!(
            "{} by {} on {}.csv",
            report.kind.title(),
            report.user_name,
            date.format("%Y-%m-%d")
        ),
    })
}

fn fte_rows(
    report: &Report,
    parameters: &FteParameters,
    result: &FteResult,
    date: NaiveDate,
) -> ExportResult<Vec<Vec<String>>> {
    let mut rows = preamble(report, date);
    rows.push(heading("Parameters:"));
    rows.push(pair(
        "Incoming Requests Per Hour",
        round2(parameters.incoming_requests_per_hour),
    ));
    rows.push(pair(
        "Average Resolution Time (hours)",
        round2(parameters.average_resolution_time),
    ));
    rows.push(pair(
        "Requests Per Employee Per Hour",
        round2(parameters.requests_per_employee_per_hour),
    ));
    rows.push(blank());
    rows.push(heading("Baseline Result:"));
    rows.push(pair("FTE Needed", round2(result.fte_needed)));
    rows.push(blank());
    rows.push(heading("Scenario Analysis:"));
    rows.push(FTE_COLUMNS.iter().map(|c| c.to_string()).collect());
    for scenario_row in scenario::fte_grid(parameters)? {
        rows.push(vec![
            multiplier_label(scenario_row.multiplier),
            round2(scenario_row.requests_only),
            round2(scenario_row.resolution_only),
            round2(scenario_row.productivity_only),
            round2(scenario_row.requests_and_resolution),
            round2(scenario_row.all_combined),
        ]);
    }
    Ok(rows)
}

fn erlang_rows(
    report: &Report,
    parameters: &ErlangParameters,
    result: &ErlangResult,
    date: NaiveDate,
) -> Vec<Vec<String>> {
    let mut rows = preamble(report, date);
    rows.push(heading("Parameters:"));
    rows.push(pair(
        "Call Volume (calls/hour)",
        round2(parameters.call_volume),
    ));
    rows.push(pair(
        "Average Handling Time (seconds)",
        round2(parameters.average_handling_time),
    ));
    rows.push(pair(
        "Service Level Target (%)",
        round2(parameters.service_level_target),
    ));
    rows.push(pair("Target Time (seconds)", round2(parameters.target_time)));
    rows.push(blank());
    rows.push(heading("Baseline Result:"));
    rows.push(pair("Agents Needed", result.agents_needed.to_string()));
    rows.push(pair(
        "Traffic Intensity (Erlangs)",
        round2(result.traffic_intensity),
    ));
    rows.push(blank());
    rows.push(heading("Scenario Analysis:"));
    rows.push(ERLANG_COLUMNS.iter().map(|c| c.to_string()).collect());
    for scenario_row in scenario::erlang_grid(parameters) {
        rows.push(vec![
            multiplier_label(scenario_row.multiplier),
            scenario_row.call_volume_only.to_string(),
            scenario_row.aht_only.to_string(),
            scenario_row.service_level_only.to_string(),
            scenario_row.target_time_only.to_string(),
            scenario_row.all_combined.to_string(),
        ]);
    }
    rows
}

fn preamble(report: &Report, date: NaiveDate) -> Vec<Vec<String>> {
    vec![
        heading(report.kind.title()),
        pair("Report", report.name.clone()),
        pair("User", report.user_name.clone()),
        pair("Date", date.format("%Y-%m-%d").to_string()),
        blank(),
    ]
}

fn heading(label: &str) -> Vec<String> {
    vec![label.to_string()]
}

fn pair(label: &str, value: impl Into<String>) -> Vec<String> {
    vec![label.to_string(), value.into()]
}

fn blank() -> Vec<String> {
    Vec::new()
}

fn round2(value: f64) -> String {
    format!("{value:.2}")
}

/// Multiplier cell label: `0.5x`, `1x`, `1.5x`, ...
fn multiplier_label(multiplier: f64) -> String {
    if multiplier.fract() == 0.0 {
        format!("{}x", multiplier as i64)
    } else {
        format!("{multiplier}x")
    }
}
