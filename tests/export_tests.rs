mod common;
use common::{TestEnv, d, temp_out};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use timetracker::core::{Core, Language, ReportQuery};
use timetracker::export::excel_date::time_cell_serial;
use timetracker::export::{ExportFormat, ExportLogic, PdfManager};
use timetracker::store::sample_dataset;

fn export_args<'a>(format: &'a str, out: &'a str) -> Vec<&'a str> {
    vec![
        "export", "--range", "2024-04", "--format", format, "--file", out, "--force",
    ]
}

#[test]
fn test_export_txt_spanish() {
    let env = TestEnv::new("export_txt_es");
    env.init_and_login("admin");
    let out = temp_out("export_txt_es", "txt");

    let mut args = export_args("txt", &out);
    args.extend(["--lang", "es"]);
    env.cmd()
        .args(&args)
        .assert()
        .success()
        .stdout(contains("Text export completed"));

    let content = fs::read_to_string(&out).expect("read exported txt");
    assert!(content.starts_with("Informe de Tiempo - "));
    assert!(content.contains("Fechas: 1/4/2024 - 30/4/2024\n"));
    assert!(content.contains("------|---------|--------|-------|---------|-------\n"));
    assert!(content.contains("jueves, 18 abr | 08:45 | 18:00 | 9h 15m | Cliente A | Llegada tarde\n"));
}

#[test]
fn test_export_csv_is_a_table() {
    let env = TestEnv::new("export_csv");
    env.init_and_login("admin");
    let out = temp_out("export_csv", "csv");

    env.cmd().args(export_args("csv", &out)).assert().success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("Date,Start,End,Total,Client,Status"));
    assert_eq!(
        lines.next(),
        Some("\"Saturday, Apr 20\",08:30,17:45,9h 15m,Cliente A,Completed")
    );
    assert_eq!(content.lines().count(), 6);
}

#[test]
fn test_export_json_carries_metrics() {
    let env = TestEnv::new("export_json");
    env.init_and_login("carlos.rodriguez");
    let out = temp_out("export_json", "json");

    env.cmd().args(export_args("json", &out)).assert().success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(v["metrics"]["total_minutes"], 1665);
    assert_eq!(v["metrics"]["punctuality_percent"], 67);
    assert_eq!(v["rows"].as_array().map(Vec::len), Some(3));
    assert_eq!(v["rows"][0]["id"], "TR001");
}

#[test]
fn test_export_xlsx_and_pdf_write_files() {
    let env = TestEnv::new("export_binary");
    env.init_and_login("admin");

    let xlsx = temp_out("export_binary", "xlsx");
    env.cmd().args(export_args("xlsx", &xlsx)).assert().success();
    let bytes = fs::read(&xlsx).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));

    let pdf = temp_out("export_binary", "pdf");
    env.cmd().args(export_args("pdf", &pdf)).assert().success();
    let bytes = fs::read(&pdf).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let env = TestEnv::new("export_empty");
    env.init_and_login("admin");
    let out = temp_out("export_empty", "txt");

    env.cmd()
        .args([
            "export", "--range", "2023-01", "--format", "txt", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No data to export"));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let env = TestEnv::new("export_no_overwrite");
    env.init_and_login("admin");
    let out = temp_out("export_no_overwrite", "txt");
    fs::write(&out, "keep me").expect("seed file");

    env.cmd()
        .args([
            "export", "--range", "2024-04", "--format", "txt", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled").or(contains("canceled")));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_export_logic_rejects_relative_path() {
    let report = Core::build_report(
        &sample_dataset(),
        &ReportQuery::default(),
        d(2024, 4, 20),
        Language::En,
    )
    .expect("build report");

    let res = ExportLogic::export(
        &report.document,
        ExportFormat::Txt,
        Path::new("relative/report.txt"),
        true,
    );
    assert!(res.is_err());
}

#[test]
fn test_default_export_path() {
    let p = ExportLogic::default_path(Path::new("/tmp"), d(2024, 4, 20), ExportFormat::Xlsx);
    assert_eq!(p, Path::new("/tmp/timetracker_report_2024-04-20.xlsx"));
}

#[test]
fn test_pdf_paginates_long_tables() {
    let headers: Vec<String> = ["Date", "Client"].iter().map(|s| s.to_string()).collect();
    let rows: Vec<Vec<String>> = (0..120)
        .map(|i| vec![format!("row {i}"), "Cliente Ñ".to_string()])
        .collect();

    let mut pdf = PdfManager::new();
    pdf.write_report("Time Report", &["Period: Custom".to_string()], &headers, &rows);
    assert!(pdf.page_count() >= 3);

    let out = temp_out("pdf_paginates", "pdf");
    pdf.save(Path::new(&out)).expect("save pdf");
    assert!(fs::metadata(&out).expect("stat").len() > 0);
}

#[test]
fn test_xlsx_times_only_in_clock_columns() {
    // start and end become Excel times
    assert_eq!(time_cell_serial(1, "12:00"), Some(0.5));
    assert_eq!(time_cell_serial(2, "06:00"), Some(0.25));
    // a client tag that looks like a time stays text
    assert_eq!(time_cell_serial(4, "09:30"), None);
    assert_eq!(time_cell_serial(3, "9h 15m"), None);
}

#[test]
fn test_export_xlsx_with_time_like_client_tag() {
    let env = TestEnv::new("export_xlsx_time_tag");
    env.init_and_login("admin");

    let raw = fs::read_to_string(&env.data).expect("read data");
    fs::write(&env.data, raw.replace("Cliente B", "09:30")).expect("rewrite data");

    let out = temp_out("export_xlsx_time_tag", "xlsx");
    env.cmd()
        .args(["export", "--range", "2024-04", "--format", "xlsx", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read(&out).expect("read xlsx").starts_with(b"PK"));
}
