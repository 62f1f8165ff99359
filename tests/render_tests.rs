use rtimesheet::config::Config;
use rtimesheet::core::Core;
use rtimesheet::models::{DayEntry, Period, PersistedRecord};
use rtimesheet::ui::render::render_sheet;
use rtimesheet::utils::formatting::strip_ansi;

fn weekend_record() -> PersistedRecord {
    let mut record = PersistedRecord {
        employee_name: "Ana Ruiz".into(),
        contracted_hours_per_period: 8,
        period: Period::new(Some("2025-03-08"), Some("2025-03-09")),
        ..Default::default()
    };
    record.entries.insert(
        "2025-03-08".into(),
        DayEntry::new("09:00", "18:30", "inventory"),
    );
    record
}

fn config(show_weekday: &str, separator: &str) -> Config {
    Config {
        database: String::new(),
        show_weekday: show_weekday.into(),
        separator_char: separator.into(),
    }
}

#[test]
fn test_render_rows_and_footer() {
    let view = Core::build_sheet(&weekend_record());
    let out = strip_ansi(&render_sheet(&view, &config("Medium", "=")));

    assert!(out.contains("Employee:   Ana Ruiz"));
    assert!(out.contains("2025-03-08 → 2025-03-09"));
    assert!(out.contains("Contract:   8 h"));

    let saturday = out
        .lines()
        .find(|l| l.starts_with("2025-03-08"))
        .expect("saturday row");
    assert!(saturday.contains("Sat"));
    assert!(saturday.contains("09:30"));
    assert!(saturday.ends_with("inventory"));

    // empty day shows placeholders and a zero duration
    let sunday = out
        .lines()
        .find(|l| l.starts_with("2025-03-09"))
        .expect("sunday row");
    assert!(sunday.contains("--:--"));
    assert!(sunday.contains("00:00"));

    assert!(out.lines().any(|l| !l.is_empty() && l.chars().all(|c| c == '=')));
    assert!(out.contains("Total period: 09:30"));
    assert!(out.contains("Overtime:     01:30"));
}

#[test]
fn test_render_without_weekday_column() {
    let view = Core::build_sheet(&weekend_record());
    let out = strip_ansi(&render_sheet(&view, &config("None", "-")));

    assert!(!out.contains("Day"));
    assert!(!out.contains("Sat"));
}

#[test]
fn test_render_empty_period_notice() {
    let mut record = weekend_record();
    record.period = Period::new(Some("2025-03-09"), Some("2025-03-08"));

    let view = Core::build_sheet(&record);
    let out = strip_ansi(&render_sheet(&view, &config("Medium", "-")));

    assert!(out.contains("No days to show"));
    assert!(!out.contains("Total period"));
    assert!(!out.contains("inventory"));
}
