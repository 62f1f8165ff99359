// src/export/excel_date.rs

use crate::utils::time::minutes_since_midnight;
use chrono::NaiveDate;

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_FORMAT: &str = "hh:mm";
/// Elapsed time: hours keep counting past 24.
pub(crate) const DURATION_FORMAT: &str = "[hh]:mm";

const MINUTES_PER_DAY: f64 = 1440.0;

/// Seriale Excel di una data (giorni dal 1899-12-30).
pub(crate) fn date_serial(d: &NaiveDate) -> Option<f64> {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((*d - epoch).num_days() as f64)
}

/// `HH:MM` as a fraction of a day; `None` for empty or invalid values.
pub(crate) fn time_fraction(s: &str) -> Option<f64> {
    minutes_since_midnight(s).map(|m| m as f64 / MINUTES_PER_DAY)
}

pub(crate) fn duration_fraction(minutes: u32) -> f64 {
    minutes as f64 / MINUTES_PER_DAY
}
