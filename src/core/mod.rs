pub mod backup;
pub mod calculator;
pub mod edit;
pub mod log;
pub mod rows;
pub mod sheet;
pub mod store;

pub use calculator::{day_duration, period_totals};
pub use edit::{EditLogic, EntryUpdate};
pub use rows::generate_rows;
pub use sheet::Core;
pub use store::{MemoryStorage, RecordStorage, STORAGE_KEY, TimesheetStore};
