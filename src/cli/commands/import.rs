use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EditLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let document = fs::read_to_string(&path)
            .map_err(|e| AppError::Import(format!("cannot read {}: {}", path.display(), e)))?;

        let pool = DbPool::open_ready(&cfg.database)?;
        let record = EditLogic::import_record(&mut pool.store(), &document)?;

        ttlog_or_warn(
            &pool.conn,
            "import",
            &path.to_string_lossy(),
            &format!("Timesheet replaced ({} entries)", record.entries.len()),
        );

        success(format!("Timesheet imported from {}", path.display()));
        info(format!(
            "Employee: '{}', {} day entries.",
            record.employee_name,
            record.entries.len()
        ));
    }

    Ok(())
}
