//! SQLite connection wrapper (lightweight for CLI usage).

use crate::core::store::TimesheetStore;
use crate::db::initialize::init_db;
use crate::db::kv::SqliteStorage;
use crate::errors::AppResult;
use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database and make sure the schema is current.
    pub fn open_ready(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Record store backed by this connection.
    pub fn store(&self) -> TimesheetStore<SqliteStorage<'_>> {
        TimesheetStore::new(SqliteStorage::new(&self.conn))
    }
}
