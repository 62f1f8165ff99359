use crate::config::Config;
use crate::core::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::render::render_sheet;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open_ready(&cfg.database)?;
    let record = pool.store().load()?;

    let view = Core::build_sheet(&record);
    print!("{}", render_sheet(&view, cfg));

    Ok(())
}
