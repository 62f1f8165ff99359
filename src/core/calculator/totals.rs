use crate::models::duration::DayDuration;
use crate::models::totals::PeriodTotals;

/// Sum the day durations and compare them with the contracted hours.
///
/// Without a contracted-hours value the overtime is 0. A total below the
/// contracted minutes is not reported as negative overtime.
pub fn period_totals<'a, I>(durations: I, contracted_hours: Option<u32>) -> PeriodTotals
where
    I: IntoIterator<Item = &'a DayDuration>,
{
    let total_minutes = durations
        .into_iter()
        .fold(0u32, |acc, d| acc.saturating_add(d.minutes()));

    let overtime_minutes = match contracted_hours {
        Some(hours) => total_minutes.saturating_sub(hours.saturating_mul(60)),
        None => 0,
    };

    PeriodTotals {
        total_minutes,
        overtime_minutes,
    }
}
