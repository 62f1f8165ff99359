//! Time utilities: parsing HH:MM, minutes since midnight, HH:MM formatting.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// `h*60+m` for a valid `HH:MM`, `None` otherwise.
pub fn minutes_since_midnight(t: &str) -> Option<u32> {
    parse_time(t).map(|t| t.hour() * 60 + t.minute())
}

/// `HH:MM` with zero padding and no upper bound on hours (`1800` → `30:00`).
pub fn format_hhmm(mins: u32) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

/// Validate a time given on the command line: `HH:MM`, or empty to clear.
/// The stored value is normalized to two-digit hours.
pub fn normalize_time_input(input: &str) -> AppResult<String> {
    let s = input.trim();
    if s.is_empty() {
        return Ok(String::new());
    }

    let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
    Ok(t.format("%H:%M").to_string())
}
