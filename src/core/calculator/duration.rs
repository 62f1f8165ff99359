use crate::models::duration::DayDuration;
use crate::utils::time::{MINUTES_PER_DAY, minutes_since_midnight};

/// Worked minutes between clock-in and clock-out.
///
/// A clock-out earlier than the clock-in is an overnight shift and wraps
/// once past midnight; shifts of 24h or more cannot be expressed. A missing
/// or unreadable time leaves the day unset.
pub fn day_duration(time_in: &str, time_out: &str) -> DayDuration {
    let (Some(t_in), Some(mut t_out)) = (
        minutes_since_midnight(time_in),
        minutes_since_midnight(time_out),
    ) else {
        return DayDuration::Unset;
    };

    if t_out < t_in {
        t_out += MINUTES_PER_DAY;
    }

    DayDuration::Worked(t_out - t_in)
}
