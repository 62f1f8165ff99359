//! Field-level edits of the sheet. Each one is a single read-modify-write
//! of the stored document.

use crate::core::store::{RecordStorage, TimesheetStore, decode_record};
use crate::errors::{AppError, AppResult};
use crate::models::record::{DayEntry, PersistedRecord, parse_contracted_hours};
use crate::utils::date::{parse_date, to_iso};
use crate::utils::time::normalize_time_input;

/// Changes for one day. `None` keeps the stored value, `Some("")` clears it.
#[derive(Debug, Default, Clone)]
pub struct EntryUpdate {
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub notes: Option<String>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.time_in.is_none() && self.time_out.is_none() && self.notes.is_none()
    }
}

/// Result of `set_contracted_hours`: what was stored and whether the input
/// had to be replaced by 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursOutcome {
    pub stored: u32,
    pub parsed: bool,
}

pub struct EditLogic;

impl EditLogic {
    pub fn set_employee_name<S: RecordStorage>(
        store: &mut TimesheetStore<S>,
        name: &str,
    ) -> AppResult<PersistedRecord> {
        store.mutate(|r| r.employee_name = name.to_string())
    }

    /// Unparseable input stores 0.
    pub fn set_contracted_hours<S: RecordStorage>(
        store: &mut TimesheetStore<S>,
        input: &str,
    ) -> AppResult<HoursOutcome> {
        let parsed = parse_contracted_hours(input);
        let stored = parsed.unwrap_or(0);
        store.mutate(|r| r.contracted_hours_per_period = stored)?;

        Ok(HoursOutcome {
            stored,
            parsed: parsed.is_some(),
        })
    }

    /// Replace the given bounds; an empty string clears a bound. Entries are
    /// left untouched, including those now outside the period.
    pub fn set_period<S: RecordStorage>(
        store: &mut TimesheetStore<S>,
        start: Option<&str>,
        end: Option<&str>,
    ) -> AppResult<PersistedRecord> {
        let start = start.map(normalize_bound).transpose()?;
        let end = end.map(normalize_bound).transpose()?;

        store.mutate(|r| {
            if let Some(s) = start {
                r.period.start = s;
            }
            if let Some(e) = end {
                r.period.end = e;
            }
        })
    }

    /// Update one day. The date becomes the entry key, so it must be a valid
    /// calendar date; times must be `HH:MM` or empty.
    pub fn update_entry<S: RecordStorage>(
        store: &mut TimesheetStore<S>,
        date: &str,
        update: &EntryUpdate,
    ) -> AppResult<DayEntry> {
        let key = entry_key(date)?;
        let time_in = update
            .time_in
            .as_deref()
            .map(normalize_time_input)
            .transpose()?;
        let time_out = update
            .time_out
            .as_deref()
            .map(normalize_time_input)
            .transpose()?;

        let record = store.mutate(|r| {
            let entry = r.entries.entry(key.clone()).or_default();
            if let Some(t) = time_in {
                entry.time_in = t;
            }
            if let Some(t) = time_out {
                entry.time_out = t;
            }
            if let Some(n) = &update.notes {
                entry.notes = n.clone();
            }
        })?;

        Ok(record.entry(&key).cloned().unwrap_or_default())
    }

    pub fn remove_entry<S: RecordStorage>(
        store: &mut TimesheetStore<S>,
        date: &str,
    ) -> AppResult<DayEntry> {
        let key = entry_key(date)?;
        let mut removed = None;

        store.try_mutate(|r| {
            removed = r.entries.remove(&key);
            if removed.is_none() {
                return Err(AppError::NoEntryForDate(key.clone()));
            }
            Ok(())
        })?;

        removed.ok_or(AppError::NoEntryForDate(key))
    }

    /// Replace the whole record with `document` (current or legacy layout).
    pub fn import_record<S: RecordStorage>(
        store: &mut TimesheetStore<S>,
        document: &str,
    ) -> AppResult<PersistedRecord> {
        let imported = decode_record(document)
            .ok_or_else(|| AppError::Import("document is not a timesheet record".into()))?;

        store.save(&imported)?;
        Ok(imported)
    }
}

fn entry_key(date: &str) -> AppResult<String> {
    parse_date(date)
        .map(|d| to_iso(&d))
        .ok_or_else(|| AppError::InvalidDate(date.to_string()))
}

fn normalize_bound(input: &str) -> AppResult<Option<String>> {
    let s = input.trim();
    if s.is_empty() {
        return Ok(None);
    }
    parse_date(s)
        .map(|d| Some(to_iso(&d)))
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}
