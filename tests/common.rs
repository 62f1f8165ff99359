#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and fill a one-week sheet:
/// 2025-03-03..2025-03-09, 40 contracted hours, five 8h20 days (41:40 total).
pub fn init_db_with_week(db_path: &str) {
    rts()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args(["--db", db_path, "employee", "Ana Ruiz"])
        .assert()
        .success();

    rts()
        .args(["--db", db_path, "contract", "40"])
        .assert()
        .success();

    rts()
        .args([
            "--db",
            db_path,
            "period",
            "--start",
            "2025-03-03",
            "--end",
            "2025-03-09",
        ])
        .assert()
        .success();

    for day in ["2025-03-03", "2025-03-04", "2025-03-05", "2025-03-06", "2025-03-07"] {
        rts()
            .args(["--db", db_path, "set", day, "--in", "08:40", "--out", "17:00"])
            .assert()
            .success();
    }
}
