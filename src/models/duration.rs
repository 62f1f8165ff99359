use crate::utils::time::format_hhmm;
use std::fmt;

/// Worked time for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayDuration {
    /// Clock-in or clock-out missing (or unreadable).
    Unset,
    Worked(u32),
}

impl DayDuration {
    /// Minutes counted towards the period total; unset days count as 0.
    pub fn minutes(&self) -> u32 {
        match self {
            DayDuration::Unset => 0,
            DayDuration::Worked(m) => *m,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, DayDuration::Unset)
    }
}

impl fmt::Display for DayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hhmm(self.minutes()))
    }
}
