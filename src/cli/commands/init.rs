use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - an empty timesheet record, unless one is already stored
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ PREPARA CONFIGURAZIONE
    //
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rTimesheet…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ APERTURA DB + MIGRAZIONI
    //
    let pool = DbPool::open_ready(&db_path)?;
    println!("✅ Database initialized at {}", &db_path);

    //
    // 3️⃣ RECORD DI DEFAULT
    //
    let created = pool.store().ensure_initialized()?;
    if created {
        println!("🗒️  Empty timesheet created");
    }

    //
    // 4️⃣ LOG INTERNO (non bloccante)
    //
    ttlog_or_warn(
        &pool.conn,
        "init",
        &db_path,
        if created {
            "Database initialized with an empty timesheet"
        } else {
            "Database initialized, existing timesheet kept"
        },
    );

    println!("🎉 rTimesheet initialization completed!");
    Ok(())
}
