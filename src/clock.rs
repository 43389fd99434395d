//! Clock conversion
//!
//! The footer stamps clock intervals as milliseconds since midnight.
//! [`logptime`] splits such a value into its time-of-day components.
//! Values outside `0..=MS_MAX` saturate to the nearest end of the day.

use serde::Serialize;
use std::fmt;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
/// Last valid millisecond of a day
pub const MS_MAX: i64 = 24 * MS_PER_HOUR - 1;

/// A time of day with millisecond resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32, second: u32, millisecond: u32) -> Self {
        TimeOfDay {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Milliseconds since midnight
    pub fn as_millis(&self) -> i64 {
        i64::from(self.hour) * MS_PER_HOUR
            + i64::from(self.minute) * MS_PER_MINUTE
            + i64::from(self.second) * MS_PER_SECOND
            + i64::from(self.millisecond)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Convert milliseconds since midnight to a time of day, saturating at
/// midnight and at [`MS_MAX`]
pub fn logptime(timestamp: i64) -> TimeOfDay {
    let timestamp = timestamp.clamp(0, MS_MAX);
    let hour = timestamp / MS_PER_HOUR;
    let minute = (timestamp - hour * MS_PER_HOUR) / MS_PER_MINUTE;
    let second = (timestamp - hour * MS_PER_HOUR - minute * MS_PER_MINUTE) / MS_PER_SECOND;
    let millisecond =
        timestamp - hour * MS_PER_HOUR - minute * MS_PER_MINUTE - second * MS_PER_SECOND;
    TimeOfDay::new(hour as u32, minute as u32, second as u32, millisecond as u32)
}
