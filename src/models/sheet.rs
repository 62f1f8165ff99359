use crate::models::duration::DayDuration;
use crate::models::record::Period;
use crate::models::row::RowView;
use crate::models::totals::PeriodTotals;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub row: RowView,
    pub duration: DayDuration,
}

/// Everything the renderer and the exporters need, computed from one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    pub employee_name: String,
    pub contracted_hours: u32,
    pub period: Period,
    pub rows: Vec<SheetRow>,
    pub totals: PeriodTotals,
}

impl SheetView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_display(&self) -> String {
        self.totals.total_display()
    }

    pub fn overtime_display(&self) -> String {
        self.totals.overtime_display()
    }
}
