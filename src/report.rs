use crate::calculations::{self, CalculationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of supported report kinds. Any other tag is a validation
/// error, never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Fte,
    Erlang,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Fte, ReportKind::Erlang];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Fte => "fte",
            ReportKind::Erlang => "erlang",
        }
    }

    pub fn from_str(tag: &str) -> Option<Self> {
        match tag {
            "fte" => Some(ReportKind::Fte),
            "erlang" => Some(ReportKind::Erlang),
            _ => None,
        }
    }

    /// Human-readable title used in export headings and filenames.
    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Fte => "FTE Report",
            ReportKind::Erlang => "Erlang C Report",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inputs for the throughput-based FTE model. The per-employee rate is
/// deliberately not checked for zero here; dividing by zero is a defined
/// calculation failure, not a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FteParameters {
    pub incoming_requests_per_hour: f64,
    /// Hours per request.
    pub average_resolution_time: f64,
    pub requests_per_employee_per_hour: f64,
}

/// Inputs for the Erlang C contact-center model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErlangParameters {
    /// Calls per hour.
    pub call_volume: f64,
    /// Average handling time in seconds.
    pub average_handling_time: f64,
    /// Percent of calls to answer within the target time, 0-100.
    pub service_level_target: f64,
    /// Answer-time target in seconds.
    pub target_time: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportParameters {
    Fte(FteParameters),
    Erlang(ErlangParameters),
}

impl ReportParameters {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportParameters::Fte(_) => ReportKind::Fte,
            ReportParameters::Erlang(_) => ReportKind::Erlang,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FteResult {
    pub fte_needed: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErlangResult {
    pub agents_needed: u32,
    /// Offered traffic in Erlangs.
    pub traffic_intensity: f64,
    /// True when the minimum-agents search hit its safety cap without
    /// meeting the target; the agent count is then a best-effort answer.
    #[serde(default)]
    pub bound_exhausted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReportResult {
    Fte(FteResult),
    Erlang(ErlangResult),
}

impl ReportResult {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportResult::Fte(_) => ReportKind::Fte,
            ReportResult::Erlang(_) => ReportKind::Erlang,
        }
    }
}

/// A staffing report: immutable parameters plus the result computed from
/// them. A changed input produces a new report; the result is never
/// recomputed in place. The id is assigned by a store, never by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub user_name: String,
    pub name: String,
    pub kind: ReportKind,
    pub parameters: ReportParameters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ReportResult>,
}

impl Report {
    pub fn new(
        user_name: impl Into<String>,
        name: impl Into<String>,
        parameters: ReportParameters,
    ) -> Self {
        Self {
            id: None,
            user_name: user_name.into(),
            name: name.into(),
            kind: parameters.kind(),
            parameters,
            result: None,
        }
    }

    /// Build a report with its result computed up front.
    pub fn computed(
        user_name: impl Into<String>,
        name: impl Into<String>,
        parameters: ReportParameters,
    ) -> Result<Self, CalculationError> {
        let result = calculations::compute(&parameters)?;
        let mut report = Self::new(user_name, name, parameters);
        report.result = Some(result);
        Ok(report)
    }
}
