use chrono::Local;
use serde_json::{Map, Value};
use staffing_tool::{
    Report, ReportResult, ReportStore, SqliteReportStore, compute, export_report, validate_request,
};
use std::env;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "\
Usage:
  cli fte <user> <report-name> <incoming> <resolution-hours> <per-employee> [options]
  cli erlang <user> <report-name> <call-volume> <aht-seconds> <target-pct> <target-seconds> [options]

Options:
  --csv <dir>   write the CSV export into <dir>
  --db <path>   save the report to a SQLite store at <path>
";

struct Options {
    csv_dir: Option<PathBuf>,
    db_path: Option<PathBuf>,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        csv_dir: None,
        db_path: None,
    };
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--csv" => {
                let dir = iter.next().ok_or("--csv requires a directory")?;
                options.csv_dir = Some(PathBuf::from(dir));
            }
            "--db" => {
                let path = iter.next().ok_or("--db requires a path")?;
                options.db_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("unknown option '{other}'")),
        }
    }
    Ok(options)
}

fn field_map(names: &[&str], values: &[String]) -> Map<String, Value> {
    let mut map = Map::new();
    for (name, value) in names.iter().zip(values) {
        map.insert(name.to_string(), Value::String(value.clone()));
    }
    map
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    let kind_tag = args.first().ok_or(USAGE.to_string())?;

    let field_names: &[&str] = match kind_tag.as_str() {
        "fte" => &[
            "incoming_requests_per_hour",
            "average_resolution_time",
            "requests_per_employee_per_hour",
        ],
        "erlang" => &[
            "call_volume",
            "average_handling_time",
            "service_level_target",
            "target_time",
        ],
        _ => return Err(format!("unknown report kind '{kind_tag}'\n{USAGE}")),
    };

    let required = 3 + field_names.len();
    if args.len() < required {
        return Err(USAGE.to_string());
    }
    let user_name = &args[1];
    let report_name = &args[2];
    let raw = field_map(field_names, &args[3..required]);
    let options = parse_options(&args[required..])?;

    let parameters = validate_request(kind_tag, &raw).map_err(|err| err.to_string())?;
    let result = compute(&parameters).map_err(|err| err.to_string())?;

    match &result {
        ReportResult::Fte(result) => {
            println!("FTE needed: {:.2}", result.fte_needed);
        }
        ReportResult::Erlang(result) => {
            println!("Agents needed: {}", result.agents_needed);
            println!("Traffic intensity: {:.2} Erlangs", result.traffic_intensity);
            if result.bound_exhausted {
                println!("warning: search bound exhausted; agent count is best-effort");
            }
        }
    }

    let mut report = Report::new(user_name.as_str(), report_name.as_str(), parameters);
    report.result = Some(result);

    let today = Local::now().date_naive();
    if let Some(dir) = options.csv_dir {
        let document = export_report(&report, today).map_err(|err| err.to_string())?;
        let path = dir.join(document.filename());
        document.write_csv(&path).map_err(|err| err.to_string())?;
        println!("wrote {}", path.display());
    }
    if let Some(path) = options.db_path {
        let store = SqliteReportStore::new(&path).map_err(|err| err.to_string())?;
        let id = store.save_report(&report).map_err(|err| err.to_string())?;
        println!("saved report {id} to {}", path.display());
    }

    Ok(())
}

fn main() {
    if let Err(message) = run() {
        eprintln!("{message}");
        process::exit(1);
    }
}
