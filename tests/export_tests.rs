mod common;
use common::{init_db_with_week, rts, setup_test_db, temp_out};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_week(&db_path);

    let out = temp_out("export_csv", "csv");

    rts()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,weekday,time_in,time_out,total,notes");
    assert_eq!(lines[1], "2025-03-03,Mon,08:40,17:00,08:20,");
    // every day of the period, filled or not
    assert_eq!(lines.len(), 1 + 7);
    assert_eq!(lines[7], "2025-03-09,Sun,,,00:00,");
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_week(&db_path);

    let out = temp_out("export_json", "json");

    rts()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(v["employee"], "Ana Ruiz");
    assert_eq!(v["period_start"], "2025-03-03");
    assert_eq!(v["period_end"], "2025-03-09");
    assert_eq!(v["contracted_hours"], 40);
    assert_eq!(v["rows"].as_array().map(Vec::len), Some(7));
    assert_eq!(v["rows"][4]["total"], "08:20");
    assert_eq!(v["total"], "41:40");
    assert_eq!(v["overtime"], "01:40");
}

#[test]
fn test_export_xlsx() {
    let db_path = setup_test_db("export_xlsx");
    init_db_with_week(&db_path);

    let out = temp_out("export_xlsx", "xlsx");

    rts()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &out])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read exported xlsx");
    // xlsx is a zip container
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_export_pdf() {
    let db_path = setup_test_db("export_pdf");
    init_db_with_week(&db_path);

    let out = temp_out("export_pdf", "pdf");

    rts()
        .args(["--db", &db_path, "export", "--format", "pdf", "--file", &out])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("read exported pdf");
    assert!(bytes.starts_with(b"%PDF"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("Timesheet of Ana Ruiz from 2025-03-03 to 2025-03-09"));
    assert!(text.contains("OVERTIME"));
}

#[test]
fn test_export_empty_period_writes_nothing() {
    let db_path = setup_test_db("export_empty_period");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_empty_period", "csv");

    rts()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("nothing to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let db_path = setup_test_db("export_existing_file");
    init_db_with_week(&db_path);

    let out = temp_out("export_existing_file", "csv");
    fs::write(&out, "keep me").expect("write placeholder");

    rts()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("export cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rts()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("Overwrite").not());

    assert!(fs::read_to_string(&out).unwrap().starts_with("date,"));
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative_path");
    init_db_with_week(&db_path);

    rts()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", "sheet.json",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}
