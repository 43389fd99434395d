//! Fluent assertion API for parsed logs

use crate::ast::{Clock, Modality};
use crate::record::{MeasurementSummary, NrSummary, PhysioLog};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a parsed log
pub fn assert_log(log: &PhysioLog) -> LogAssertion<'_> {
    LogAssertion { log }
}

// ============================================================================
// Log Assertions
// ============================================================================

pub struct LogAssertion<'a> {
    log: &'a PhysioLog,
}

impl<'a> LogAssertion<'a> {
    pub fn n_params(self, expected: usize) -> Self {
        assert_eq!(
            self.log.n_params(),
            expected,
            "Expected {} params, found {:?}",
            expected,
            self.log.params()
        );
        self
    }

    pub fn params(self, expected: &[i64]) -> Self {
        assert_eq!(self.log.params(), expected, "params differ");
        self
    }

    pub fn rate(self, expected: i64) -> Self {
        assert_eq!(self.log.rate(), expected, "rate differs");
        self
    }

    /// Assert the whole sample stream
    pub fn ts(self, expected: &[i64]) -> Self {
        assert_eq!(self.log.ts(), expected, "samples differ");
        self
    }

    pub fn ts_len(self, expected: usize) -> Self {
        let actual = self.log.ts().len();
        assert_eq!(
            actual, expected,
            "Expected {} samples, found {}",
            expected, actual
        );
        self
    }

    /// Assert the annotation blocks in encounter order
    pub fn info(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.log.info().iter().map(String::as_str).collect();
        assert_eq!(actual, expected, "annotation blocks differ");
        self
    }

    /// Assert on a channel summary, which must be present
    pub fn summary<F>(self, modality: Modality, assertion: F) -> Self
    where
        F: FnOnce(SummaryAssertion<'a>),
    {
        let summary = self
            .log
            .summary(modality)
            .unwrap_or_else(|| panic!("{}: Expected a summary, found none", modality));
        assertion(SummaryAssertion {
            summary,
            context: modality.to_string(),
        });
        self
    }

    pub fn no_summary(self, modality: Modality) -> Self {
        assert!(
            self.log.summary(modality).is_none(),
            "{}: Expected no summary, found {:?}",
            modality,
            self.log.summary(modality)
        );
        self
    }

    pub fn nr(self, expected: NrSummary) -> Self {
        assert_eq!(self.log.nr(), &expected, "nr line differs");
        self
    }

    /// Assert a clock interval by its raw millisecond values
    pub fn log_time(self, clock: Clock, start: i64, stop: i64) -> Self {
        let time = self.log.log_time(clock);
        assert_eq!(
            (time.start(), time.stop()),
            (start, stop),
            "{}: clock interval differs",
            clock
        );
        self
    }

    /// Assert a clock interval by its `HH:MM:SS.mmm` rendering
    pub fn time_of_day(self, clock: Clock, start: &str, stop: &str) -> Self {
        let time = self.log.log_time(clock);
        assert_eq!(
            (time.start_time().to_string(), time.stop_time().to_string()),
            (start.to_string(), stop.to_string()),
            "{}: time of day differs",
            clock
        );
        self
    }
}

// ============================================================================
// Summary Assertions
// ============================================================================

pub struct SummaryAssertion<'a> {
    summary: &'a MeasurementSummary,
    context: String,
}

impl<'a> SummaryAssertion<'a> {
    pub fn freq(self, expected: i64) -> Self {
        assert_eq!(self.summary.freq, expected, "{}: freq differs", self.context);
        self
    }

    pub fn per(self, expected: i64) -> Self {
        assert_eq!(self.summary.per, expected, "{}: per differs", self.context);
        self
    }

    pub fn min(self, expected: i64) -> Self {
        assert_eq!(self.summary.min, expected, "{}: min differs", self.context);
        self
    }

    pub fn max(self, expected: i64) -> Self {
        assert_eq!(self.summary.max, expected, "{}: max differs", self.context);
        self
    }

    pub fn avg(self, expected: i64) -> Self {
        assert_eq!(self.summary.avg, expected, "{}: avg differs", self.context);
        self
    }

    pub fn std_diff(self, expected: i64) -> Self {
        assert_eq!(
            self.summary.std_diff, expected,
            "{}: std_diff differs",
            self.context
        );
        self
    }

    /// Assert every field is zero, as for unused channels
    pub fn zeroed(self) -> Self {
        let s = self.summary;
        assert!(
            [s.freq, s.per, s.min, s.max, s.avg, s.std_diff]
                .iter()
                .all(|v| *v == 0),
            "{}: Expected an all-zero summary, found {:?}",
            self.context,
            s
        );
        self
    }
}
