//! Record store: the only way handlers touch the persisted document.
//!
//! The document is always read whole, changed in memory, and written back
//! whole. Storage backends only move raw JSON text around.

use crate::errors::AppResult;
use crate::models::record::PersistedRecord;
use crate::ui::messages::warning;
use crate::utils::date::{parse_date, to_iso};
use std::collections::HashMap;

/// Fixed key the document is stored under.
pub const STORAGE_KEY: &str = "timesheet-record";

/// Durable key-value storage for the JSON document.
pub trait RecordStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>>;
    fn write(&mut self, key: &str, document: &str) -> AppResult<()>;
}

/// In-process storage, used by tests and by callers embedding the library.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    docs: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(key: &str, document: &str) -> Self {
        let mut docs = HashMap::new();
        docs.insert(key.to_string(), document.to_string());
        Self { docs }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.docs.get(key).map(String::as_str)
    }
}

impl RecordStorage for MemoryStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.docs.get(key).cloned())
    }

    fn write(&mut self, key: &str, document: &str) -> AppResult<()> {
        self.docs.insert(key.to_string(), document.to_string());
        Ok(())
    }
}

pub struct TimesheetStore<S: RecordStorage> {
    storage: S,
}

impl<S: RecordStorage> TimesheetStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current record. A missing document yields the default record, and so
    /// does a document that cannot be decoded.
    pub fn load(&self) -> AppResult<PersistedRecord> {
        let Some(raw) = self.storage.read(STORAGE_KEY)? else {
            return Ok(PersistedRecord::default());
        };

        match decode_record(&raw) {
            Some(record) => Ok(record),
            None => {
                warning("Stored timesheet is unreadable, starting from an empty sheet.");
                Ok(PersistedRecord::default())
            }
        }
    }

    pub fn save(&mut self, record: &PersistedRecord) -> AppResult<()> {
        let doc = serde_json::to_string(record)?;
        self.storage.write(STORAGE_KEY, &doc)
    }

    /// Read-modify-write of the whole document. Returns the saved record.
    pub fn mutate<F>(&mut self, f: F) -> AppResult<PersistedRecord>
    where
        F: FnOnce(&mut PersistedRecord),
    {
        let mut record = self.load()?;
        f(&mut record);
        self.save(&record)?;
        Ok(record)
    }

    /// Like `mutate`, for changes that can be rejected. Nothing is written
    /// when `f` fails.
    pub fn try_mutate<F>(&mut self, f: F) -> AppResult<PersistedRecord>
    where
        F: FnOnce(&mut PersistedRecord) -> AppResult<()>,
    {
        let mut record = self.load()?;
        f(&mut record)?;
        self.save(&record)?;
        Ok(record)
    }

    /// Write the default record if nothing is stored yet. Returns true when
    /// a document was created.
    pub fn ensure_initialized(&mut self) -> AppResult<bool> {
        if self.storage.read(STORAGE_KEY)?.is_some() {
            return Ok(false);
        }
        self.save(&PersistedRecord::default())?;
        Ok(true)
    }
}

/// Decode a stored or imported document; `None` when it is not a JSON object
/// of the expected shape. Entry keys come out as ISO dates: parseable keys
/// are normalized, the others dropped.
pub fn decode_record(raw: &str) -> Option<PersistedRecord> {
    let mut record: PersistedRecord = serde_json::from_str(raw).ok()?;
    record.entries = std::mem::take(&mut record.entries)
        .into_iter()
        .filter_map(|(k, v)| parse_date(&k).map(|d| (to_iso(&d), v)))
        .collect();
    Some(record)
}
