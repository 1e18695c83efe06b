use crate::report::{ReportParameters, ReportResult};
use std::fmt;

pub mod erlang;
pub mod fte;

#[derive(Debug, Clone, PartialEq)]
pub enum CalculationError {
    /// Division by zero or a non-finite intermediate; the inputs define
    /// no meaningful staffing answer.
    Degenerate(String),
}

impl fmt::Display for CalculationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationError::Degenerate(detail) => {
                write!(f, "undefined result: {detail}")
            }
        }
    }
}

impl std::error::Error for CalculationError {}

/// Dispatch to the calculator matching the parameter variant.
pub fn compute(parameters: &ReportParameters) -> Result<ReportResult, CalculationError> {
    match parameters {
        ReportParameters::Fte(p) => Ok(ReportResult::Fte(fte::calculate(p)?)),
        ReportParameters::Erlang(p) => Ok(ReportResult::Erlang(erlang::calculate(p))),
    }
}
