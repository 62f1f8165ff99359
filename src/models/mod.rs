pub mod duration;
pub mod record;
pub mod row;
pub mod sheet;
pub mod totals;

pub use duration::DayDuration;
pub use record::{DayEntry, PersistedRecord, Period};
pub use row::RowView;
pub use sheet::{SheetRow, SheetView};
pub use totals::PeriodTotals;
