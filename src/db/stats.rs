use crate::core::store::{RecordStorage, STORAGE_KEY};
use crate::db::kv::SqliteStorage;
use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) STORED DOCUMENT
    //
    let storage = SqliteStorage::new(&pool.conn);
    let raw = storage.read(STORAGE_KEY)?;
    let updated_at = storage.updated_at(STORAGE_KEY)?;

    let Some(raw) = raw else {
        println!("{}• Timesheet:{} {}not stored yet{}", CYAN, RESET, GREY, RESET);
        println!();
        return Ok(());
    };

    println!("{}• Document:{} {} bytes", CYAN, RESET, raw.len());
    println!(
        "{}• Last update:{} {}",
        CYAN,
        RESET,
        updated_at.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 3) ENTRIES AND DATE RANGE
    //
    let record = pool.store().load()?;
    println!(
        "{}• Day entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        record.entries.len(),
        RESET
    );

    // entries are keyed by ISO date, so map order is date order
    let first = record.entries.keys().next().cloned();
    let last = record.entries.keys().next_back().cloned();

    println!("{}• Entry dates:{}", CYAN, RESET);
    println!(
        "    from: {}",
        first.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );
    println!(
        "    to:   {}",
        last.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    //
    // 4) SCHEMA
    //
    let versions = applied_versions(&pool.conn)?;
    println!(
        "{}• Migrations applied:{} {}",
        CYAN,
        RESET,
        versions.len()
    );

    println!();
    Ok(())
}
