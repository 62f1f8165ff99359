//! Durable key-value storage for the timesheet document.

use crate::core::store::RecordStorage;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStorage<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStorage<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// `updated_at` of a stored key, if any.
    pub fn updated_at(&self, key: &str) -> AppResult<Option<String>> {
        let v = self
            .conn
            .query_row(
                "SELECT updated_at FROM kv_store WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(v)
    }
}

impl RecordStorage for SqliteStorage<'_> {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let v = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(v)
    }

    /// Single upsert statement: the document is replaced as a whole.
    fn write(&mut self, key: &str, document: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, document, now],
        )?;
        Ok(())
    }
}
