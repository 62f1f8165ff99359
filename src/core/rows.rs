//! Period row generator: one row per calendar day of the inclusive period.

use crate::models::record::DayEntry;
use crate::models::row::RowView;
use crate::utils::date::{parse_date, to_iso};
use std::collections::BTreeMap;

/// Build the ordered rows for `start..=end`.
///
/// Returns an empty vector when either bound is missing or unparseable, or
/// when `end` is before `start`: an incomplete period is a normal state of
/// the sheet, not an error. Days are advanced as calendar dates, so month,
/// year and leap-day boundaries need no special handling.
pub fn generate_rows(
    start: Option<&str>,
    end: Option<&str>,
    entries: &BTreeMap<String, DayEntry>,
) -> Vec<RowView> {
    let (Some(start), Some(end)) = (start.and_then(parse_date), end.and_then(parse_date)) else {
        return Vec::new();
    };

    if end < start {
        return Vec::new();
    }

    let mut out = Vec::with_capacity((end - start).num_days() as usize + 1);
    let mut d = start;

    while d <= end {
        let key = to_iso(&d);
        let entry = entries.get(&key).cloned().unwrap_or_default();
        out.push(RowView { date: d, key, entry });

        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}
