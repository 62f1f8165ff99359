use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EditLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee { name } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;
        let name = name.trim();

        EditLogic::set_employee_name(&mut pool.store(), name)?;
        ttlog_or_warn(&pool.conn, "employee", name, "Employee name updated");

        if name.is_empty() {
            success("Employee name cleared.");
        } else {
            success(format!("Employee set to '{}'.", name));
        }
    }

    Ok(())
}
