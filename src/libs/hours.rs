//! Worked-hours calculation for a single attendance record.

use crate::libs::attendance::SENTINEL_TIME;
use crate::libs::formatter::parse_time_wire;
use chrono::Timelike;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes between check-in and check-out, or `None` while the record is incomplete.
///
/// Only hours and minutes take part; seconds are ignored. A check-out earlier
/// than the check-in is read as a shift that crossed midnight.
// NOTE: that wraparound also hides a checkout typed before the check-in on the
// same day, which then reads as a ~24h shift.
pub fn minutes_worked(check_in: Option<&str>, check_out: Option<&str>) -> Option<i64> {
    let check_in = check_in.map(str::trim).filter(|time| !time.is_empty())?;
    let check_out = check_out.map(str::trim).filter(|time| !time.is_empty() && *time != SENTINEL_TIME)?;

    let check_in = parse_time_wire(check_in)?;
    let check_out = parse_time_wire(check_out)?;

    let to_minutes = |time: chrono::NaiveTime| i64::from(time.hour()) * 60 + i64::from(time.minute());
    let minutes = to_minutes(check_out) - to_minutes(check_in);

    Some(if minutes < 0 { minutes + MINUTES_PER_DAY } else { minutes })
}

/// Formats minutes as `"7h"` or `"7h 30m"`.
pub fn format_hours(minutes: i64) -> String {
    let hours = minutes / 60;
    let minutes = minutes % 60;

    if minutes == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, minutes)
    }
}

/// Hours worked as shown in the attendance history, `"0h"` until the record is complete.
pub fn hours_worked(check_in: Option<&str>, check_out: Option<&str>) -> String {
    minutes_worked(check_in, check_out).map_or_else(|| format_hours(0), format_hours)
}
