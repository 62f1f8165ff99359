use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{EditLogic, EntryUpdate, day_duration};
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::formatting::or_placeholder;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date,
        time_in,
        time_out,
        notes,
    } = cmd
    {
        let update = EntryUpdate {
            time_in: time_in.clone(),
            time_out: time_out.clone(),
            notes: notes.clone(),
        };

        if update.is_empty() {
            return Err(AppError::Other(
                "nothing to update: use --in, --out or --notes".into(),
            ));
        }

        let pool = DbPool::open_ready(&cfg.database)?;
        let entry = EditLogic::update_entry(&mut pool.store(), date, &update)?;
        let duration = day_duration(&entry.time_in, &entry.time_out);

        ttlog_or_warn(
            &pool.conn,
            "set",
            date,
            &format!(
                "in={} out={} notes={}",
                or_placeholder(&entry.time_in),
                or_placeholder(&entry.time_out),
                entry.notes
            ),
        );

        success(format!(
            "{}: {} → {} ({})",
            date,
            or_placeholder(&entry.time_in),
            or_placeholder(&entry.time_out),
            duration
        ));
    }

    Ok(())
}
