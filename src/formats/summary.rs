//! Human readable report of a parsed record

use super::registry::{FormatError, Formatter};
use crate::ast::{Clock, Modality};
use crate::record::{ParseOptions, PhysioLog};

pub fn to_summary_str(log: &PhysioLog) -> String {
    let mut result = String::new();

    let params = log
        .params()
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    result.push_str(&format!("params: {}\n", params));
    result.push_str(&format!("rate: {}\n", log.rate()));
    result.push_str(&format!("samples: {}\n", log.ts().len()));
    for (i, text) in log.info().iter().enumerate() {
        result.push_str(&format!("info[{}]: {}\n", i, text));
    }

    for modality in Modality::ALL {
        if let Some(s) = log.summary(modality) {
            result.push_str(&format!(
                "{}: freq={} per={} min={} max={} avg={} std_diff={}\n",
                modality, s.freq, s.per, s.min, s.max, s.avg, s.std_diff
            ));
        }
    }

    let nr = log.nr();
    result.push_str(&format!(
        "nr: trig={} mp={} arr={} acq_win={}\n",
        nr.nr_trig, nr.nr_m_p, nr.nr_arr, nr.acq_win
    ));

    for clock in Clock::ALL {
        let time = log.log_time(clock);
        result.push_str(&format!(
            "{}: {} -> {} ({} ms)\n",
            clock,
            time.start_time(),
            time.stop_time(),
            time.duration_ms()
        ));
    }
    result
}

pub struct SummaryFormatter;

impl Formatter for SummaryFormatter {
    fn name(&self) -> &str {
        "summary"
    }

    fn serialize(&self, source: &str, options: ParseOptions) -> Result<String, FormatError> {
        let log = PhysioLog::parse_with(source, options)?;
        Ok(to_summary_str(&log))
    }

    fn description(&self) -> &str {
        "A human readable report of the record"
    }
}
