use crate::report::Report;
use serde_json::Error as SerdeJsonError;
use std::fmt;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    #[cfg(feature = "sqlite")]
    Sqlite(rusqlite::Error),
    InvalidData(String),
    NotFound,
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            #[cfg(feature = "sqlite")]
            PersistenceError::Sqlite(err) => write!(f, "sqlite error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            PersistenceError::NotFound => write!(f, "no report stored under that id"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for PersistenceError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Storage collaborator for immutable reports. The store hands out
/// opaque integer ids; the calculation core never interprets them.
pub trait ReportStore {
    /// Persist a report and return its assigned id.
    fn save_report(&self, report: &Report) -> PersistenceResult<i64>;
    fn load_report(&self, id: i64) -> PersistenceResult<Option<Report>>;
    fn list_reports_for_user(&self, user_name: &str) -> PersistenceResult<Vec<Report>>;
}

#[cfg(feature = "sqlite")]
pub mod sqlite;
