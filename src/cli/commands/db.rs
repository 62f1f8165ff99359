//! `db` maintenance: migrations, integrity check, VACUUM and statistics.
//! Steps run in a fixed order whatever the flag order on the command line.

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::migrate::{applied_versions, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    if !(*migrate || *check || *vacuum || *show_info) {
        warning("Nothing to do: use --migrate, --check, --vacuum or --info.");
        return Ok(());
    }

    // plain open: --migrate must be the one applying pending versions
    let pool = DbPool::new(&cfg.database)?;

    if *migrate {
        run_migrate(&pool.conn)?;
    }
    if *check {
        run_integrity_check(&pool.conn)?;
    }
    if *vacuum {
        run_vacuum(&pool.conn)?;
    }
    if *show_info {
        stats::print_db_info(&pool, &cfg.database)?;
    }

    Ok(())
}

fn run_migrate(conn: &Connection) -> AppResult<()> {
    info("Running migrations…");

    let before = applied_versions(conn).map(|v| v.len()).unwrap_or(0);
    run_pending_migrations(conn)?;
    let after = applied_versions(conn)?.len();

    match after.saturating_sub(before) {
        0 => success("Schema already up to date."),
        n => success(format!("Applied {} migration(s).", n)),
    }
    Ok(())
}

/// Reports corruption without failing the command.
fn run_integrity_check(conn: &Connection) -> AppResult<()> {
    info("Running integrity check…");

    let result: String = conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if result == "ok" {
        success("Integrity check passed.");
    } else {
        error(format!("Integrity check failed: {}", result));
    }
    Ok(())
}

fn run_vacuum(conn: &Connection) -> AppResult<()> {
    info("Compacting database…");
    conn.execute_batch("VACUUM;")?;
    success("Vacuum completed.");

    ttlog_or_warn(conn, "db", "vacuum", "Database compacted");
    Ok(())
}
