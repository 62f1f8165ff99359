use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{Core, EditLogic};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Period { start, end } = cmd {
        if start.is_none() && end.is_none() {
            warning("Nothing to change: use --start and/or --end.");
            return Ok(());
        }

        let pool = DbPool::open_ready(&cfg.database)?;
        let record = EditLogic::set_period(&mut pool.store(), start.as_deref(), end.as_deref())?;

        let start = record.period.start().unwrap_or("");
        let end = record.period.end().unwrap_or("");
        ttlog_or_warn(
            &pool.conn,
            "period",
            &format!("{}..{}", start, end),
            "Period updated",
        );

        success(format!(
            "Period: {} → {}",
            if start.is_empty() { "--" } else { start },
            if end.is_empty() { "--" } else { end }
        ));

        // entries outside the period are kept, only the row set changes
        let view = Core::build_sheet(&record);
        if view.is_empty() {
            warning("The period is incomplete or ends before it starts: no days to show.");
        } else {
            info(format!("{} day(s) in the period.", view.rows.len()));
        }
    }

    Ok(())
}
