use crate::calculations::{CalculationError, erlang, fte};
use crate::report::{ErlangParameters, FteParameters};
use serde::{Deserialize, Serialize};

/// Proportional perturbations applied per scenario row, in render order.
/// The multiplier-1 row is the baseline; the row order is load-bearing
/// for the Erlang service-level interpolation.
pub const MULTIPLIERS: [f64; 10] = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0];

pub const FTE_COLUMNS: [&str; 6] = [
    "Multiplier",
    "Requests Only",
    "Resolution Only",
    "Productivity Only",
    "Requests & Resolution",
    "All Combined",
];

pub const ERLANG_COLUMNS: [&str; 6] = [
    "Multiplier",
    "Call Volume Only",
    "AHT Only",
    "Service Level Only",
    "Target Time Only",
    "All Combined",
];

/// One FTE sensitivity row: each column re-applies the multiplier to the
/// named input(s) while holding the rest at baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FteScenarioRow {
    pub multiplier: f64,
    pub requests_only: f64,
    pub resolution_only: f64,
    pub productivity_only: f64,
    pub requests_and_resolution: f64,
    /// Algebraically reduces to `baseline * multiplier`, identical to
    /// the resolution-only column. Kept for source compatibility.
    pub all_combined: f64,
}

/// One Erlang sensitivity row: each column re-runs the full
/// minimum-agents search under one perturbed input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErlangScenarioRow {
    pub multiplier: f64,
    pub call_volume_only: u32,
    pub aht_only: u32,
    pub service_level_only: u32,
    pub target_time_only: u32,
    pub all_combined: u32,
}

/// Service-level target for a scenario row. The sequence is non-uniform
/// by design: row 0 backs off 5 points (floored at 0), row 1 keeps the
/// baseline target, and the remaining eight rows interpolate linearly
/// toward 100 in steps of `(100 - target) / 8`.
pub fn service_level_target_for_row(target: f64, row_index: usize) -> f64 {
    match row_index {
        0 => (target - 5.0).max(0.0),
        1 => target,
        i => {
            let step = (100.0 - target) / 8.0;
            (target + step * (i as f64 - 1.0)).min(100.0)
        }
    }
}

pub fn fte_grid(baseline: &FteParameters) -> Result<Vec<FteScenarioRow>, CalculationError> {
    MULTIPLIERS
        .iter()
        .map(|&m| {
            let value = |incoming_m: f64, resolution_m: f64, per_employee_m: f64| {
                fte::fte_needed(
                    baseline.incoming_requests_per_hour * incoming_m,
                    baseline.average_resolution_time * resolution_m,
                    baseline.requests_per_employee_per_hour * per_employee_m,
                )
            };
            Ok(FteScenarioRow {
                multiplier: m,
                requests_only: value(m, 1.0, 1.0)?,
                resolution_only: value(1.0, m, 1.0)?,
                productivity_only: value(1.0, 1.0, m)?,
                requests_and_resolution: value(m, m, 1.0)?,
                all_combined: value(m, m, m)?,
            })
        })
        .collect()
}

pub fn erlang_grid(baseline: &ErlangParameters) -> Vec<ErlangScenarioRow> {
    MULTIPLIERS
        .iter()
        .enumerate()
        .map(|(row_index, &m)| {
            let target = service_level_target_for_row(baseline.service_level_target, row_index);
            let agents = |parameters: ErlangParameters| erlang::calculate(&parameters).agents_needed;
            ErlangScenarioRow {
                multiplier: m,
                call_volume_only: agents(ErlangParameters {
                    call_volume: baseline.call_volume * m,
                    ..*baseline
                }),
                aht_only: agents(ErlangParameters {
                    average_handling_time: baseline.average_handling_time * m,
                    ..*baseline
                }),
                service_level_only: agents(ErlangParameters {
                    service_level_target: target,
                    ..*baseline
                }),
                target_time_only: agents(ErlangParameters {
                    target_time: baseline.target_time * m,
                    ..*baseline
                }),
                all_combined: agents(ErlangParameters {
                    call_volume: baseline.call_volume * m,
                    average_handling_time: baseline.average_handling_time * m,
                    service_level_target: target,
                    target_time: baseline.target_time * m,
                }),
            }
        })
        .collect()
}
