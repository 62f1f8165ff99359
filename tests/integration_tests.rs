use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{init_db_with_week, rts, setup_test_db, temp_out};

#[test]
fn test_init_creates_empty_sheet() {
    let db_path = setup_test_db("init_creates_empty_sheet");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Empty timesheet created"));

    // second init keeps the stored document
    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Empty timesheet created").not());

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("No days to show"));
}

#[test]
fn test_show_week_totals_and_overtime() {
    let db_path = setup_test_db("show_week_totals");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Ana Ruiz"))
        .stdout(contains("2025-03-03"))
        .stdout(contains("2025-03-09"))
        .stdout(contains("08:20"))
        .stdout(contains("41:40"))
        .stdout(contains("01:40"));
}

#[test]
fn test_show_without_data_does_not_need_init() {
    let db_path = setup_test_db("show_without_init");

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("No days to show"));
}

#[test]
fn test_contract_below_total_has_no_overtime() {
    let db_path = setup_test_db("contract_deficit");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "contract", "45"])
        .assert()
        .success()
        .stdout(contains("45 h"));

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("41:40"))
        .stdout(contains("01:40").not());
}

#[test]
fn test_contract_unparseable_stores_zero() {
    let db_path = setup_test_db("contract_unparseable");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "contract", "lots"])
        .assert()
        .success()
        .stdout(contains("contracted hours set to 0"));

    // no contract: overtime is not computed
    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("0 h"))
        .stdout(contains("41:40"))
        .stdout(contains("Overtime:"))
        .stdout(contains("00:00"))
        .stdout(contains("01:40").not());
}

#[test]
fn test_never_set_contract_has_no_overtime() {
    let db_path = setup_test_db("never_set_contract");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args([
            "--db",
            &db_path,
            "period",
            "--start",
            "2025-03-03",
            "--end",
            "2025-03-03",
        ])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "set", "2025-03-03", "--in", "09:00", "--out", "17:00"])
        .assert()
        .success();

    let out = rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = rtimesheet::utils::formatting::strip_ansi(&String::from_utf8_lossy(&out));

    assert!(text.contains("Total period: 08:00"));
    assert!(text.contains("Overtime:     00:00"));
}

#[test]
fn test_overnight_shift() {
    let db_path = setup_test_db("overnight_shift");
    init_db_with_week(&db_path);

    rts()
        .args([
            "--db",
            &db_path,
            "set",
            "2025-03-08",
            "--in",
            "22:00",
            "--out",
            "06:00",
            "--notes",
            "night",
        ])
        .assert()
        .success()
        .stdout(contains("08:00"));

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("night"))
        .stdout(contains("49:40"))
        .stdout(contains("09:40"));
}

#[test]
fn test_set_rejects_bad_input() {
    let db_path = setup_test_db("set_rejects_bad_input");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2025-03-08", "--in", "8 o'clock"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    rts()
        .args(["--db", &db_path, "set", "2025-02-30", "--in", "08:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    rts()
        .args(["--db", &db_path, "set", "2025-03-08"])
        .assert()
        .failure()
        .stderr(contains("nothing to update"));
}

#[test]
fn test_set_partial_update_keeps_notes() {
    let db_path = setup_test_db("set_partial_update");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2025-03-03", "--notes", "dentist"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "set", "2025-03-03", "--out", "16:40"])
        .assert()
        .success()
        .stdout(contains("08:00"));

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("dentist"))
        .stdout(contains("41:20"));
}

#[test]
fn test_period_change_keeps_entries() {
    let db_path = setup_test_db("period_keeps_entries");
    init_db_with_week(&db_path);

    // inverted: nothing rendered
    rts()
        .args(["--db", &db_path, "period", "--end", "2025-03-01"])
        .assert()
        .success()
        .stdout(contains("no days to show"));

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("No days to show"));

    // restored: entries are still there
    rts()
        .args(["--db", &db_path, "period", "--end", "2025-03-09"])
        .assert()
        .success()
        .stdout(contains("7 day(s)"));

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("41:40"));
}

#[test]
fn test_period_clear_bound() {
    let db_path = setup_test_db("period_clear_bound");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "period", "--start", ""])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("No days to show"));
}

#[test]
fn test_del_with_confirmation() {
    let db_path = setup_test_db("del_with_confirmation");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "del", "2025-03-07"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rts()
        .args(["--db", &db_path, "del", "2025-03-07"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("33:20"));

    rts()
        .args(["--db", &db_path, "del", "2025-03-07", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No entry found for date 2025-03-07"));
}

#[test]
fn test_import_legacy_document() {
    let db_path = setup_test_db("import_legacy_document");
    let doc = temp_out("import_legacy_document", "json");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    fs::write(
        &doc,
        r#"{
            "empleado": "Marta Gil",
            "horas_contrato": "16",
            "periodo": {"inicio": "2025-02-28", "fin": "2025-03-02"},
            "registro": {
                "2025-02-28": {"entrada": "09:00", "salida": "17:00", "notas": ""},
                "2025-03-01": {"entrada": "09:00", "salida": "18:00", "notas": "audit"}
            }
        }"#,
    )
    .expect("write import file");

    rts()
        .args(["--db", &db_path, "import", "--file", &doc])
        .assert()
        .success()
        .stdout(contains("Timesheet imported"));

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Marta Gil"))
        .stdout(contains("audit"))
        .stdout(contains("17:00"))
        .stdout(contains("01:00"));
}

#[test]
fn test_import_rejects_garbage() {
    let db_path = setup_test_db("import_rejects_garbage");
    let doc = temp_out("import_rejects_garbage", "json");
    init_db_with_week(&db_path);

    fs::write(&doc, "<html>not a record</html>").expect("write import file");

    rts()
        .args(["--db", &db_path, "import", "--file", &doc])
        .assert()
        .failure()
        .stderr(contains("Import error"));

    // the stored sheet is untouched
    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("Ana Ruiz"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_records_mutations");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("employee"))
        .stdout(contains("contract"))
        .stdout(contains("period"))
        .stdout(contains("2025-03-07"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_compressed");
    init_db_with_week(&db_path);

    let dest = temp_out("backup_compressed", "sqlite");
    let zip = PathBuf::from(&dest).with_extension("zip");
    fs::remove_file(&zip).ok();

    rts()
        .args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(zip.exists());
    assert!(!PathBuf::from(&dest).exists());
    fs::remove_file(&zip).ok();
}

#[test]
fn test_backup_requires_absolute_path() {
    let db_path = setup_test_db("backup_relative");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "backup", "--file", "relative.sqlite"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("db_info_and_check");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Day entries:"))
        .stdout(contains("2025-03-03"))
        .stdout(contains("2025-03-07"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_migrate_and_vacuum() {
    let db_path = setup_test_db("db_migrate_and_vacuum");
    init_db_with_week(&db_path);

    // init already applied everything
    rts()
        .args(["--db", &db_path, "db", "--vacuum", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Schema already up to date"))
        .stdout(contains("Vacuum completed"));

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("vacuum"));

    // the stored sheet survives maintenance
    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("41:40"));
}

#[test]
fn test_db_without_flags_does_nothing() {
    let db_path = setup_test_db("db_without_flags");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(contains("Nothing to do"));
}

#[test]
fn test_config_check_and_migrate() {
    let mut home: PathBuf = env::temp_dir();
    home.push("rtimesheet_config_home");
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create fake home");

    let db_path = setup_test_db("config_check_and_migrate");

    rts()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["--db", &db_path, "init"])
        .assert()
        .success();

    rts()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));

    let conf = if cfg!(target_os = "windows") {
        home.join("rtimesheet").join("rtimesheet.conf")
    } else {
        home.join(".rtimesheet").join("rtimesheet.conf")
    };
    fs::write(&conf, format!("database: {}\n", db_path)).expect("rewrite config");

    rts()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("show_weekday"))
        .stdout(contains("separator_char"));

    rts()
        .env("HOME", &home)
        .env("APPDATA", &home)
        .args(["config", "--migrate", "--print"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("show_weekday: Medium"));
    assert!(content.contains("separator_char"));
    assert!(content.contains("# show_weekday parameter options:"));

    fs::remove_dir_all(&home).ok();
}
