//! Late-arrival classification.
//!
//! A punch-in counts as late from 10:15 local time onwards. The cutoff is a
//! business constant, carried in a [`LatenessPolicy`] so it can be set from
//! configuration and swapped in tests.

use crate::libs::formatter::parse_time_wire;
use chrono::{NaiveTime, Timelike};
use std::fmt::{self, Display, Formatter};

pub const LATE_CUTOFF_HOUR: u32 = 10;
pub const LATE_CUTOFF_MINUTE: u32 = 15;

pub const REMARK_LATE: &str = "Late arrival";
pub const REMARK_ON_TIME: &str = "Good";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatenessPolicy {
    hour: u32,
    minute: u32,
}

impl Default for LatenessPolicy {
    fn default() -> Self {
        Self {
            hour: LATE_CUTOFF_HOUR,
            minute: LATE_CUTOFF_MINUTE,
        }
    }
}

impl LatenessPolicy {
    /// Returns `None` for an impossible time of day.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Parses an `HH:MM` cutoff such as `"10:15"`.
    pub fn parse(cutoff: &str) -> Option<Self> {
        parse_time_wire(cutoff).and_then(|time| Self::new(time.hour(), time.minute()))
    }

    /// Late when the hour is past the cutoff hour, or equal with the minute at or past the cutoff minute.
    pub fn is_late(&self, time: NaiveTime) -> bool {
        time.hour() > self.hour || (time.hour() == self.hour && time.minute() >= self.minute)
    }

    /// Same as [`is_late`](Self::is_late) for an `HH:MM` wire string; unparseable input is never late.
    pub fn is_late_wire(&self, time: &str) -> bool {
        parse_time_wire(time).is_some_and(|time| self.is_late(time))
    }

    pub fn remark(&self, time: NaiveTime) -> &'static str {
        remark_for(self.is_late(time))
    }
}

impl Display for LatenessPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

pub fn remark_for(late: bool) -> &'static str {
    if late {
        REMARK_LATE
    } else {
        REMARK_ON_TIME
    }
}

/// Classifies `time` against the standard 10:15 cutoff.
pub fn is_late(time: NaiveTime) -> bool {
    LatenessPolicy::default().is_late(time)
}

/// Classifies an `HH:MM` wire string against the standard 10:15 cutoff.
pub fn is_late_wire(time: &str) -> bool {
    LatenessPolicy::default().is_late_wire(time)
}
