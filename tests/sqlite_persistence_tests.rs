#![cfg(feature = "sqlite")]

use staffing_tool::{
    ErlangParameters, FteParameters, Report, ReportKind, ReportParameters, ReportStore,
    SqliteReportStore,
};
use tempfile::tempdir;

fn fte_report(user: &str, name: &str) -> Report {
    Report::computed(
        user,
        name,
        ReportParameters::Fte(FteParameters {
            incoming_requests_per_hour: 100.0,
            average_resolution_time: 0.5,
            requests_per_employee_per_hour: 5.0,
        }),
    )
    .unwrap()
}

fn erlang_report(user: &str, name: &str) -> Report {
    Report::computed(
        user,
        name,
        ReportParameters::Erlang(ErlangParameters {
            call_volume: 100.0,
            average_handling_time: 180.0,
            service_level_target: 80.0,
            target_time: 20.0,
        }),
    )
    .unwrap()
}

#[test]
fn report_round_trips_through_sqlite() {
    let dir = tempdir().unwrap();
    let store = SqliteReportStore::new(dir.path().join("reports.db")).unwrap();

    let report = fte_report("Ada Lovelace", "Quarterly staffing");
    let id = store.save_report(&report).unwrap();
    assert!(id > 0);

    let loaded = store.load_report(id).unwrap().expect("report should exist");
    assert_eq!(loaded.id, Some(id));
    assert_eq!(loaded.user_name, report.user_name);
    assert_eq!(loaded.name, report.name);
    assert_eq!(loaded.kind, ReportKind::Fte);
    assert_eq!(loaded.parameters, report.parameters);
    assert_eq!(loaded.result, report.result);
}

#[test]
fn erlang_report_keeps_its_search_outcome() {
    let dir = tempdir().unwrap();
    let store = SqliteReportStore::new(dir.path().join("reports.db")).unwrap();

    let report = erlang_report("Grace Hopper", "Call center sizing");
    let id = store.save_report(&report).unwrap();
    let loaded = store.load_report(id).unwrap().unwrap();
    assert_eq!(loaded.kind, ReportKind::Erlang);
    assert_eq!(loaded.result, report.result);
}

#[test]
fn missing_ids_load_as_none() {
    let dir = tempdir().unwrap();
    let store = SqliteReportStore::new(dir.path().join("reports.db")).unwrap();
    assert!(store.load_report(999).unwrap().is_none());
}

#[test]
fn reports_without_results_round_trip() {
    let dir = tempdir().unwrap();
    let store = SqliteReportStore::new(dir.path().join("reports.db")).unwrap();

    let report = Report::new(
        "Ada Lovelace",
        "Pending",
        ReportParameters::Fte(FteParameters {
            incoming_requests_per_hour: 10.0,
            average_resolution_time: 1.0,
            requests_per_employee_per_hour: 2.0,
        }),
    );
    let id = store.save_report(&report).unwrap();
    let loaded = store.load_report(id).unwrap().unwrap();
    assert!(loaded.result.is_none());
}

#[test]
fn listing_filters_by_user_and_preserves_insertion_order() {
    let dir = tempdir().unwrap();
    let store = SqliteReportStore::new(dir.path().join("reports.db")).unwrap();

    store
        .save_report(&fte_report("Ada Lovelace", "First"))
        .unwrap();
    store
        .save_report(&erlang_report("Grace Hopper", "Other user"))
        .unwrap();
    store
        .save_report(&erlang_report("Ada Lovelace", "Second"))
        .unwrap();

    let reports = store.list_reports_for_user("Ada Lovelace").unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].name, "First");
    assert_eq!(reports[1].name, "Second");
    assert!(reports.iter().all(|r| r.user_name == "Ada Lovelace"));
}

#[test]
fn store_reopens_existing_database() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reports.db");

    let id = {
        let store = SqliteReportStore::new(&path).unwrap();
        store
            .save_report(&fte_report("Ada Lovelace", "Durable"))
            .unwrap()
    };

    let store = SqliteReportStore::new(&path).unwrap();
    let loaded = store.load_report(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Durable");
}
