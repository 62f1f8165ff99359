use rtimesheet::core::{Core, day_duration, period_totals};
use rtimesheet::models::record::parse_contracted_hours;
use rtimesheet::models::{DayDuration, DayEntry, Period, PersistedRecord};
use rtimesheet::utils::format_hhmm;

#[test]
fn test_day_duration_same_day() {
    let d = day_duration("09:00", "17:00");
    assert_eq!(d, DayDuration::Worked(480));
    assert_eq!(d.to_string(), "08:00");
}

#[test]
fn test_day_duration_overnight_wraps_once() {
    let d = day_duration("22:00", "06:00");
    assert_eq!(d, DayDuration::Worked(480));
    assert_eq!(d.to_string(), "08:00");

    assert_eq!(day_duration("23:59", "00:00"), DayDuration::Worked(1));
}

#[test]
fn test_day_duration_equal_times_is_zero() {
    assert_eq!(day_duration("12:00", "12:00"), DayDuration::Worked(0));
}

#[test]
fn test_day_duration_unset_when_a_time_is_missing() {
    let d = day_duration("", "17:00");
    assert!(d.is_unset());
    assert_eq!(d.minutes(), 0);
    assert_eq!(d.to_string(), "00:00");

    assert!(day_duration("09:00", "").is_unset());
    assert!(day_duration("", "").is_unset());
}

#[test]
fn test_day_duration_unset_on_garbage() {
    assert!(day_duration("9am", "17:00").is_unset());
    assert!(day_duration("09:00", "25:00").is_unset());
}

#[test]
fn test_format_hhmm_hours_unbounded() {
    assert_eq!(format_hhmm(0), "00:00");
    assert_eq!(format_hhmm(5), "00:05");
    assert_eq!(format_hhmm(100), "01:40");
    assert_eq!(format_hhmm(1800), "30:00");
    assert_eq!(format_hhmm(2500), "41:40");
}

#[test]
fn test_totals_with_overtime() {
    let durations = [
        DayDuration::Worked(500),
        DayDuration::Worked(500),
        DayDuration::Worked(500),
        DayDuration::Worked(500),
        DayDuration::Worked(500),
    ];

    let totals = period_totals(&durations, Some(40));
    assert_eq!(totals.total_minutes, 2500);
    assert_eq!(totals.overtime_minutes, 100);
    assert_eq!(totals.total_display(), "41:40");
    assert_eq!(totals.overtime_display(), "01:40");
}

#[test]
fn test_totals_deficit_is_zero_overtime() {
    let durations = [DayDuration::Worked(1000), DayDuration::Worked(1000)];

    let totals = period_totals(&durations, Some(40));
    assert_eq!(totals.total_display(), "33:20");
    assert_eq!(totals.overtime_minutes, 0);
    assert_eq!(totals.overtime_display(), "00:00");
}

#[test]
fn test_totals_without_contract_has_no_overtime() {
    let durations = [DayDuration::Worked(3000)];

    let totals = period_totals(&durations, None);
    assert_eq!(totals.total_minutes, 3000);
    assert_eq!(totals.overtime_display(), "00:00");
}

#[test]
fn test_totals_unset_days_count_zero() {
    let durations = [
        DayDuration::Worked(480),
        DayDuration::Unset,
        DayDuration::Worked(480),
    ];

    let totals = period_totals(&durations, Some(0));
    assert_eq!(totals.total_minutes, 960);
    assert_eq!(totals.overtime_minutes, 960);
}

#[test]
fn test_totals_of_nothing() {
    let none: [DayDuration; 0] = [];
    let totals = period_totals(&none, Some(40));
    assert_eq!(totals.total_display(), "00:00");
    assert_eq!(totals.overtime_display(), "00:00");
}

#[test]
fn test_parse_contracted_hours() {
    assert_eq!(parse_contracted_hours("40"), Some(40));
    assert_eq!(parse_contracted_hours(" 37 "), Some(37));
    assert_eq!(parse_contracted_hours("+8"), Some(8));
    assert_eq!(parse_contracted_hours("40h"), Some(40));
    assert_eq!(parse_contracted_hours("0"), Some(0));

    assert_eq!(parse_contracted_hours(""), None);
    assert_eq!(parse_contracted_hours("abc"), None);
    assert_eq!(parse_contracted_hours("-5"), None);
    assert_eq!(parse_contracted_hours("h40"), None);
}

#[test]
fn test_build_sheet_week() {
    let mut record = PersistedRecord {
        employee_name: "Ana".into(),
        contracted_hours_per_period: 40,
        period: Period::new(Some("2025-03-03"), Some("2025-03-09")),
        ..Default::default()
    };
    for day in ["2025-03-03", "2025-03-04", "2025-03-05", "2025-03-06"] {
        record
            .entries
            .insert(day.to_string(), DayEntry::new("08:40", "17:00", ""));
    }
    // Friday night shift
    record.entries.insert(
        "2025-03-07".to_string(),
        DayEntry::new("22:00", "06:20", "night"),
    );
    // only clock-in: unset
    record
        .entries
        .insert("2025-03-08".to_string(), DayEntry::new("09:00", "", ""));

    let view = Core::build_sheet(&record);
    assert_eq!(view.rows.len(), 7);
    assert_eq!(view.rows[4].duration, DayDuration::Worked(500));
    assert!(view.rows[5].duration.is_unset());
    assert!(view.rows[6].duration.is_unset());
    assert_eq!(view.total_display(), "41:40");
    assert_eq!(view.overtime_display(), "01:40");
}

#[test]
fn test_build_sheet_incomplete_period() {
    let mut record = PersistedRecord {
        contracted_hours_per_period: 40,
        period: Period::new(Some("2025-03-03"), None),
        ..Default::default()
    };
    record
        .entries
        .insert("2025-03-03".to_string(), DayEntry::new("09:00", "17:00", ""));

    let view = Core::build_sheet(&record);
    assert!(view.is_empty());
    assert_eq!(view.total_display(), "00:00");
    assert_eq!(view.overtime_display(), "00:00");
}

#[test]
fn test_build_sheet_without_contract_has_no_overtime() {
    let mut record = PersistedRecord {
        period: Period::new(Some("2025-03-03"), Some("2025-03-03")),
        ..Default::default()
    };
    record
        .entries
        .insert("2025-03-03".to_string(), DayEntry::new("09:00", "17:00", ""));

    // never set
    let view = Core::build_sheet(&record);
    assert_eq!(view.total_display(), "08:00");
    assert_eq!(view.overtime_display(), "00:00");

    // unparseable input is stored as 0
    let raw = r#"{"contractedHoursPerPeriod":"lots","period":{"start":"2025-03-03","end":"2025-03-03"},
        "entries":{"2025-03-03":{"timeIn":"09:00","timeOut":"17:00","notes":""}}}"#;
    let decoded = rtimesheet::core::store::decode_record(raw).expect("valid document");
    assert_eq!(decoded.contracted_hours_per_period, 0);

    let view = Core::build_sheet(&decoded);
    assert_eq!(view.total_display(), "08:00");
    assert_eq!(view.overtime_display(), "00:00");
}
