use crate::utils::time::format_hhmm;

/// Aggregates over every rendered row of the period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodTotals {
    pub total_minutes: u32,
    /// Never negative: a deficit is reported as 0.
    pub overtime_minutes: u32,
}

impl PeriodTotals {
    pub fn total_display(&self) -> String {
        format_hhmm(self.total_minutes)
    }

    pub fn overtime_display(&self) -> String {
        format_hhmm(self.overtime_minutes)
    }
}
