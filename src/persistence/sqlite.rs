use super::{PersistenceError, PersistenceResult, ReportStore};
use crate::report::{Report, ReportKind, ReportParameters, ReportResult};
use rusqlite::{Connection, OptionalExtension, params};
use std::sync::Mutex;

pub struct SqliteReportStore {
    connection: Mutex<Connection>,
}

impl SqliteReportStore {
    pub fn new<P: AsRef<std::path::Path>>(path: P) -> PersistenceResult<Self> {
        let connection = Connection::open(path)?;
        Self::initialize_schema(&connection)?;
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn initialize_schema(connection: &Connection) -> PersistenceResult<()> {
        let ddl = r#"
            CREATE TABLE IF NOT EXISTS reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_name TEXT NOT NULL,
                name TEXT NOT NULL,
                kind TEXT NOT NULL,
                parameters_json TEXT NOT NULL,
                result_json TEXT,
                created_at TEXT NOT NULL DEFAULT (datetime('now'))
            );
            CREATE INDEX IF NOT EXISTS idx_reports_kind ON reports (kind);
            CREATE INDEX IF NOT EXISTS idx_reports_user ON reports (user_name);
        "#;
        connection.execute_batch(ddl)?;
        Ok(())
    }

    fn report_from_columns(
        id: i64,
        user_name: String,
        name: String,
        kind_tag: String,
        parameters_json: String,
        result_json: Option<String>,
    ) -> PersistenceResult<Report> {
        let kind = ReportKind::from_str(&kind_tag)
            .ok_or_else(|| PersistenceError::InvalidData(format!("invalid kind tag '{kind_tag}'")))?;
        let parameters: ReportParameters = serde_json::from_str(&parameters_json)?;
        if parameters.kind() != kind {
            return Err(PersistenceError::InvalidData(format!(
                "stored parameters do not match kind '{kind_tag}' for report {id}"
            )));
        }
        let result = match result_json {
            Some(json) => {
                let result: ReportResult = serde_json::from_str(&json)?;
                if result.kind() != kind {
                    return Err(PersistenceError::InvalidData(format!(
                        "stored result does not match kind '{kind_tag}' for report {id}"
                    )));
                }
                Some(result)
            }
            None => None,
        };
        Ok(Report {
            id: Some(id),
            user_name,
            name,
            kind,
            parameters,
            result,
        })
    }
}

impl ReportStore for SqliteReportStore {
    fn save_report(&self, report: &Report) -> PersistenceResult<i64> {
        let parameters_json = serde_json::to_string(&report.parameters)?;
        let result_json = report
            .result
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        conn.execute(
            "INSERT INTO reports (user_name, name, kind, parameters_json, result_json)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                report.user_name,
                report.name,
                report.kind.as_str(),
                parameters_json,
                result_json,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn load_report(&self, id: i64) -> PersistenceResult<Option<Report>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, user_name, name, kind, parameters_json, result_json
             FROM reports WHERE id = ?1",
        )?;
        let columns = stmt
            .query_row(params![id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, Option<String>>(5)?,
                ))
            })
            .optional()?;
        match columns {
            Some((id, user_name, name, kind, parameters, result)) => Ok(Some(
                Self::report_from_columns(id, user_name, name, kind, parameters, result)?,
            )),
            None => Ok(None),
        }
    }

    fn list_reports_for_user(&self, user_name: &str) -> PersistenceResult<Vec<Report>> {
        let conn = self.connection.lock().expect("sqlite mutex poisoned");
        let mut stmt = conn.prepare(
            "SELECT id, user_name, name, kind, parameters_json, result_json
             FROM reports WHERE user_name = ?1 ORDER BY id ASC",
        )?;
        let rows = stmt.query_map(params![user_name], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, Option<String>>(5)?,
            ))
        })?;

        let mut reports = Vec::new();
        for columns in rows {
            let (id, user_name, name, kind, parameters, result) = columns?;
            reports.push(Self::report_from_columns(
                id, user_name, name, kind, parameters, result,
            )?);
        }
        Ok(reports)
    }
}
