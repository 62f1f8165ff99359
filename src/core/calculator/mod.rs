pub mod duration;
pub mod totals;

pub use duration::day_duration;
pub use totals::period_totals;
