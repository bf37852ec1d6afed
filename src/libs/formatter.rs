//! Conversions between chrono values and the attendance wire strings.
//!
//! The attendance service exchanges times of day as `HH:MM:SS` and calendar
//! dates as `YYYY-MM-DD`. Times are written in the zone of the value being
//! formatted (the user's local clock), while dates are normalized to UTC,
//! which is what the server keys its records on.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use punchclock::libs::formatter::{date_to_wire, format_elapsed, time_of_day_to_wire};
//!
//! let moment = Utc.with_ymd_and_hms(2025, 3, 14, 9, 5, 7).unwrap();
//! assert_eq!(time_of_day_to_wire(&moment), "09:05:07");
//! assert_eq!(date_to_wire(&moment), "2025-03-14");
//! assert_eq!(format_elapsed(3_725), "01:02:05");
//! ```

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};

pub const WIRE_TIME_FORMAT: &str = "%H:%M:%S";
pub const WIRE_SHORT_TIME_FORMAT: &str = "%H:%M";
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats the time of day of `moment`, in its own zone, as `HH:MM:SS`.
pub fn time_of_day_to_wire<Tz: TimeZone>(moment: &DateTime<Tz>) -> String {
    moment.naive_local().time().format(WIRE_TIME_FORMAT).to_string()
}

/// Formats the calendar date of `moment`, normalized to UTC, as `YYYY-MM-DD`.
pub fn date_to_wire<Tz: TimeZone>(moment: &DateTime<Tz>) -> String {
    moment.naive_utc().date().format(WIRE_DATE_FORMAT).to_string()
}

/// Parses `HH:MM:SS` or `HH:MM`.
pub fn parse_time_wire(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, WIRE_TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(time, WIRE_SHORT_TIME_FORMAT))
        .ok()
}

pub fn parse_date_wire(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), WIRE_DATE_FORMAT).ok()
}

/// Whole seconds from `since` to `now`, rounded down.
pub fn elapsed_seconds<Tz: TimeZone>(since: &DateTime<Tz>, now: &DateTime<Tz>) -> i64 {
    now.clone().signed_duration_since(since.clone()).num_milliseconds().div_euclid(1000)
}

/// Formats a running timer as `HH:MM:SS`.
///
/// Hours are not wrapped at 24 and negative values display as zero.
pub fn format_elapsed(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}
