//! Footer summaries

use serde::Serialize;

/// Rate and amplitude statistics for one channel
///
/// Built from two footer lines: `Freq Per` supplies `freq` and `per`,
/// `Min Max Avg StdDiff` supplies the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MeasurementSummary {
    pub freq: i64,
    pub per: i64,
    pub min: i64,
    pub max: i64,
    pub avg: i64,
    pub std_diff: i64,
}

/// Trigger counts from the `NrTrig NrMP NrArr AcqWin` line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NrSummary {
    pub nr_trig: i64,
    pub nr_m_p: i64,
    pub nr_arr: i64,
    pub acq_win: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_summary_fields() {
        let m = MeasurementSummary {
            freq: 1,
            per: 2,
            min: 3,
            max: 4,
            avg: 5,
            std_diff: 6,
        };
        assert_eq!(
            (m.freq, m.per, m.min, m.max, m.avg, m.std_diff),
            (1, 2, 3, 4, 5, 6)
        );
    }

    #[test]
    fn test_nr_summary_serializes_with_field_names() {
        let n = NrSummary {
            nr_trig: 1,
            nr_m_p: 2,
            nr_arr: 3,
            acq_win: 4,
        };
        assert_eq!(
            serde_json::to_string(&n).unwrap(),
            r#"{"nr_trig":1,"nr_m_p":2,"nr_arr":3,"acq_win":4}"#
        );
    }
}
