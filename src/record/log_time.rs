//! Clock intervals

use serde::Serialize;

use crate::clock::{logptime, TimeOfDay};

/// A `(start, stop)` pair of milliseconds since midnight
///
/// The time-of-day views are derived once at construction. Equality only
/// looks at `start` and `stop`.
#[derive(Debug, Clone, Copy, Eq, Serialize)]
pub struct LogTime {
    start: i64,
    stop: i64,
    start_time: TimeOfDay,
    stop_time: TimeOfDay,
}

impl LogTime {
    pub fn new(start: i64, stop: i64) -> Self {
        LogTime {
            start,
            stop,
            start_time: logptime(start),
            stop_time: logptime(stop),
        }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    pub fn start_time(&self) -> TimeOfDay {
        self.start_time
    }

    pub fn stop_time(&self) -> TimeOfDay {
        self.stop_time
    }

    /// Length of the interval in milliseconds
    pub fn duration_ms(&self) -> i64 {
        self.stop - self.start
    }
}

impl PartialEq for LogTime {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.stop == other.stop
    }
}
