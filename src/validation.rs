use crate::report::{ErlangParameters, FteParameters, ReportKind, ReportParameters};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Unrecognized report kind tag; rejected, never silently defaulted.
    InvalidReportKind(String),
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidReportKind(tag) => {
                write!(f, "invalid report kind '{tag}'")
            }
            ValidationError::OutOfRange {
                field,
                value,
                expected,
            } => write!(f, "{field} = {value} is out of range (must be {expected})"),
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn parse_report_kind(tag: &str) -> Result<ReportKind, ValidationError> {
    ReportKind::from_str(tag).ok_or_else(|| ValidationError::InvalidReportKind(tag.to_string()))
}

/// Coerce a raw field to f64. Numbers pass through, numeric strings
/// parse; anything else (missing, null, non-numeric text) coerces to
/// 0.0 per the established convention. Callers needing stricter input
/// handling must pre-check.
fn coerce_field(raw: &Map<String, Value>, field: &str) -> f64 {
    match raw.get(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            expected: "non-negative",
        });
    }
    Ok(value)
}

fn require_percent(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            expected: "between 0 and 100",
        });
    }
    Ok(value)
}

/// Normalize a raw field map into typed parameters for the given kind.
pub fn validate_parameters(
    kind: ReportKind,
    raw: &Map<String, Value>,
) -> Result<ReportParameters, ValidationError> {
    match kind {
        ReportKind::Fte => {
            let incoming = require_non_negative(
                "incoming_requests_per_hour",
                coerce_field(raw, "incoming_requests_per_hour"),
            )?;
            let resolution = require_non_negative(
                "average_resolution_time",
                coerce_field(raw, "average_resolution_time"),
            )?;
            // Not checked for zero: division by zero is a defined
            // calculation failure, not a validation failure.
            let per_employee = coerce_field(raw, "requests_per_employee_per_hour");
            Ok(ReportParameters::Fte(FteParameters {
                incoming_requests_per_hour: incoming,
                average_resolution_time: resolution,
                requests_per_employee_per_hour: per_employee,
            }))
        }
        ReportKind::Erlang => {
            let call_volume =
                require_non_negative("call_volume", coerce_field(raw, "call_volume"))?;
            let aht = require_non_negative(
                "average_handling_time",
                coerce_field(raw, "average_handling_time"),
            )?;
            let target = require_percent(
                "service_level_target",
                coerce_field(raw, "service_level_target"),
            )?;
            let target_time =
                require_non_negative("target_time", coerce_field(raw, "target_time"))?;
            Ok(ReportParameters::Erlang(ErlangParameters {
                call_volume,
                average_handling_time: aht,
                service_level_target: target,
                target_time,
            }))
        }
    }
}

/// Parse the kind tag and validate the field map in one step.
pub fn validate_request(
    kind_tag: &str,
    raw: &Map<String, Value>,
) -> Result<ReportParameters, ValidationError> {
    let kind = parse_report_kind(kind_tag)?;
    validate_parameters(kind, raw)
}
