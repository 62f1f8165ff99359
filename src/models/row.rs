use crate::models::record::DayEntry;
use chrono::NaiveDate;

/// One generated day of the period, ready to be paired with a duration and
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub date: NaiveDate,
    /// ISO `YYYY-MM-DD`, also the key into `PersistedRecord::entries`.
    pub key: String,
    pub entry: DayEntry,
}
