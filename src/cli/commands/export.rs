use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Core;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::open_ready(&cfg.database)?;
        let view = Core::build_sheet(&pool.store().load()?);

        if ExportLogic::export(&view, *format, file, *force)? {
            ttlog_or_warn(
                &pool.conn,
                "export",
                file,
                &format!("{} export of {} day(s)", format.as_str(), view.rows.len()),
            );
        }
    }
    Ok(())
}
