use chrono::{Datelike, NaiveDate, Weekday};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_FORMAT).ok()
}

pub fn to_iso(d: &NaiveDate) -> String {
    d.format(ISO_FORMAT).to_string()
}

/// How the weekday is shown next to a date (config `show_weekday`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayStyle {
    None,
    Short,
    Medium,
    Long,
}

impl WeekdayStyle {
    /// Unknown values fall back to Medium.
    pub fn from_config(s: &str) -> Self {
        match s {
            "None" => WeekdayStyle::None,
            "Short" => WeekdayStyle::Short,
            "Long" => WeekdayStyle::Long,
            _ => WeekdayStyle::Medium,
        }
    }
}

pub fn weekday_str(d: &NaiveDate, style: WeekdayStyle) -> String {
    let wd = d.weekday();
    match style {
        WeekdayStyle::None => String::new(),
        WeekdayStyle::Short => short_name(wd).to_string(),
        WeekdayStyle::Medium => wd.to_string(),
        WeekdayStyle::Long => long_name(wd).to_string(),
    }
}

fn short_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Mo",
        Weekday::Tue => "Tu",
        Weekday::Wed => "We",
        Weekday::Thu => "Th",
        Weekday::Fri => "Fr",
        Weekday::Sat => "Sa",
        Weekday::Sun => "Su",
    }
}

fn long_name(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
