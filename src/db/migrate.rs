use crate::core::store::{STORAGE_KEY, decode_record};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if the `kv_store` table exists.
fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv_store'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn migrate_create_kv_store(conn: &Connection) -> AppResult<()> {
    let version = "20251016_0001_create_kv_store";

    if is_applied(conn, version)? {
        return Ok(());
    }

    let existed = kv_table_exists(conn)?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .map_err(|e| AppError::Migration(format!("Failed to create 'kv_store': {}", e)))?;

    mark_applied(conn, version, "Created kv_store table")?;

    if !existed {
        success("Created kv_store table.");
    }

    Ok(())
}

/// The CLI always writes the current layout, but the `kv_store` row can also
/// be filled from outside: a copy of the browser page's localStorage value, or
/// another tool sharing the database file. Such documents keep Spanish field
/// names and may carry entry keys that are not dates; rewrite them once in the
/// current layout so `db --info` and external readers see what `show` sees.
fn migrate_normalize_record_keys(conn: &Connection) -> AppResult<()> {
    let version = "20251020_0002_normalize_record_keys";

    if is_applied(conn, version)? {
        return Ok(());
    }

    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            [STORAGE_KEY],
            |row| row.get(0),
        )
        .optional()?;

    let mut message = "No stored timesheet to normalize";

    if let Some(raw) = raw {
        match decode_record(&raw) {
            Some(record) => {
                let normalized = serde_json::to_string(&record)?;
                if normalized != raw {
                    conn.execute(
                        "UPDATE kv_store SET value = ?1 WHERE key = ?2",
                        [normalized.as_str(), STORAGE_KEY],
                    )?;
                    message = "Rewrote stored timesheet with current field names";
                    success(message);
                } else {
                    message = "Stored timesheet already uses current field names";
                }
            }
            None => {
                warning("Stored timesheet is unreadable, left unchanged.");
                message = "Stored timesheet unreadable, left unchanged";
            }
        }
    }

    mark_applied(conn, version, message)?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    migrate_create_kv_store(conn)?;
    migrate_normalize_record_keys(conn)?;
    Ok(())
}

/// Versions already recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
