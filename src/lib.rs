pub mod calculations;
pub mod export;
pub mod persistence;
pub mod report;
pub mod scenario;
pub mod validation;

pub use calculations::{CalculationError, compute};
pub use export::{ExportDocument, ExportError, export_report};
#[cfg(feature = "sqlite")]
pub use persistence::sqlite::SqliteReportStore;
pub use persistence::{PersistenceError, ReportStore};
pub use report::{
    ErlangParameters, ErlangResult, FteParameters, FteResult, Report, ReportKind,
    ReportParameters, ReportResult,
};
pub use scenario::{
    ErlangScenarioRow, FteScenarioRow, MULTIPLIERS, erlang_grid, fte_grid,
    service_level_target_for_row,
};
pub use validation::{ValidationError, parse_report_kind, validate_parameters, validate_request};
