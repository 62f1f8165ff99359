use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EditLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        //
        // Confirmation prompt
        //
        if !*yes
            && !confirm(&format!(
                "Delete the entry for {}? This action is irreversible.",
                d
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let pool = DbPool::open_ready(&cfg.database)?;
        let key = date::to_iso(&d);
        EditLogic::remove_entry(&mut pool.store(), &key)?;

        ttlog_or_warn(&pool.conn, "del", &key, "Day entry deleted");
        success(format!("Entry for {} has been deleted.", key));
    }

    Ok(())
}
