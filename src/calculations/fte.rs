use super::CalculationError;
use crate::report::{FteParameters, FteResult};

/// Headcount needed to clear the offered workload:
/// `incoming * resolution_time / per_employee`. No rounding here;
/// rounding to 2 decimals is an export-time concern.
pub fn fte_needed(
    incoming_requests_per_hour: f64,
    average_resolution_time: f64,
    requests_per_employee_per_hour: f64,
) -> Result<f64, CalculationError> {
    let value =
        incoming_requests_per_hour * average_resolution_time / requests_per_employee_per_hour;
    if !value.is_finite() {
        return Err(CalculationError::Degenerate(format!(
            "fte is undefined for requests_per_employee_per_hour = {requests_per_employee_per_hour}"
        )));
    }
    Ok(value)
}

pub fn calculate(parameters: &FteParameters) -> Result<FteResult, CalculationError> {
    let fte = fte_needed(
        parameters.incoming_requests_per_hour,
        parameters.average_resolution_time,
        parameters.requests_per_employee_per_hour,
    )?;
    Ok(FteResult { fte_needed: fte })
}
