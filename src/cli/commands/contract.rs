use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::EditLogic;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Contract { hours } = cmd {
        let pool = DbPool::open_ready(&cfg.database)?;

        let outcome = EditLogic::set_contracted_hours(&mut pool.store(), hours)?;

        if !outcome.parsed {
            warning(format!(
                "'{}' is not a whole number of hours: contracted hours set to 0.",
                hours
            ));
        }

        ttlog_or_warn(
            &pool.conn,
            "contract",
            &outcome.stored.to_string(),
            &format!("Contracted hours set from input '{}'", hours),
        );

        success(format!("Contracted hours: {} h", outcome.stored));
    }

    Ok(())
}
