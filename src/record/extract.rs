//! Parse tree to record extraction
//!
//! The footer is reduced with an explicit fold: [`FooterFold::step`] takes
//! the accumulator by value and returns the next one, and only
//! [`FooterFold::finish`] turns the collected lines into summaries. Nothing
//! is published until the whole footer has been seen, so a channel is either
//! fully populated or absent, never half-filled.

use std::collections::BTreeMap;

use crate::ast::{Clock, Footer, FooterLine, LogEvent, Modality};
use crate::error::{IntegrityError, SummaryLine};
use crate::record::log_time::LogTime;
use crate::record::summary::{MeasurementSummary, NrSummary};

/// Lines collected for one channel; a later line of the same kind replaces
/// an earlier one
#[derive(Debug, Clone, Copy, Default)]
struct ChannelLines {
    rate: Option<(i64, i64)>,
    stat: Option<(i64, i64, i64, i64)>,
}

#[derive(Debug, Clone, Copy, Default)]
struct ClockLines {
    start: Option<i64>,
    stop: Option<i64>,
}

/// Footer accumulator
#[derive(Debug, Clone, Default)]
pub(crate) struct FooterFold {
    channels: BTreeMap<Modality, ChannelLines>,
    // Only the last nr line counts
    nr: Option<NrSummary>,
    clocks: BTreeMap<Clock, ClockLines>,
}

/// Everything the footer contributes to a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FooterValues {
    pub ecg: MeasurementSummary,
    pub puls: MeasurementSummary,
    pub resp: MeasurementSummary,
    pub ext: MeasurementSummary,
    pub ext2: Option<MeasurementSummary>,
    pub nr: NrSummary,
    pub mdh: LogTime,
    pub mpcu: LogTime,
}

impl FooterFold {
    pub(crate) fn step(mut self, line: &FooterLine) -> Self {
        match *line {
            FooterLine::Rate {
                modality,
                freq,
                per,
            } => {
                self.channels.entry(modality).or_default().rate = Some((freq, per));
            }
            FooterLine::Stat {
                modality,
                min,
                max,
                avg,
                std_diff,
            } => {
                self.channels.entry(modality).or_default().stat = Some((min, max, avg, std_diff));
            }
            FooterLine::Nr {
                nr_trig,
                nr_m_p,
                nr_arr,
                acq_win,
            } => {
                self.nr = Some(NrSummary {
                    nr_trig,
                    nr_m_p,
                    nr_arr,
                    acq_win,
                });
            }
            FooterLine::Log { tag, value } => {
                let clock = self.clocks.entry(tag.clock).or_default();
                match tag.event {
                    LogEvent::Start => clock.start = Some(value),
                    LogEvent::Stop => clock.stop = Some(value),
                }
            }
        }
        self
    }

    /// Summary for a channel; `Ok(None)` when the channel never appeared
    fn summary(&self, modality: Modality) -> Result<Option<MeasurementSummary>, IntegrityError> {
        let lines = match self.channels.get(&modality) {
            Some(lines) => lines,
            None => return Ok(None),
        };
        match (lines.rate, lines.stat) {
            (Some((freq, per)), Some((min, max, avg, std_diff))) => Ok(Some(MeasurementSummary {
                freq,
                per,
                min,
                max,
                avg,
                std_diff,
            })),
            (None, _) => Err(IntegrityError::IncompleteSummary {
                modality,
                missing: SummaryLine::Rate,
            }),
            (_, None) => Err(IntegrityError::IncompleteSummary {
                modality,
                missing: SummaryLine::Stat,
            }),
        }
    }

    fn required_summary(&self, modality: Modality) -> Result<MeasurementSummary, IntegrityError> {
        self.summary(modality)?
            .ok_or(IntegrityError::MissingSummary(modality))
    }

    fn log_time(&self, clock: Clock) -> Result<LogTime, IntegrityError> {
        match self.clocks.get(&clock) {
            None => Err(IntegrityError::MissingLogTime(clock)),
            Some(ClockLines {
                start: Some(start),
                stop: Some(stop),
            }) => Ok(LogTime::new(*start, *stop)),
            Some(ClockLines { start: None, .. }) => Err(IntegrityError::IncompleteLogTime {
                clock,
                missing: LogEvent::Start,
            }),
            Some(_) => Err(IntegrityError::IncompleteLogTime {
                clock,
                missing: LogEvent::Stop,
            }),
        }
    }

    pub(crate) fn finish(self) -> Result<FooterValues, IntegrityError> {
        Ok(FooterValues {
            ecg: self.required_summary(Modality::Ecg)?,
            puls: self.required_summary(Modality::Puls)?,
            resp: self.required_summary(Modality::Resp)?,
            ext: self.required_summary(Modality::Ext)?,
            ext2: self.summary(Modality::Ext2)?,
            nr: self.nr.ok_or(IntegrityError::MissingNrLine)?,
            mdh: self.log_time(Clock::Mdh)?,
            mpcu: self.log_time(Clock::Mpcu)?,
        })
    }
}

/// Reduce the footer lines to their summaries
pub(crate) fn fold_footer(footer: &Footer) -> Result<FooterValues, IntegrityError> {
    footer
        .lines
        .iter()
        .fold(FooterFold::default(), FooterFold::step)
        .finish()
}

/// Rate field position within the parameter block
pub(crate) fn rate_index(n_params: usize) -> usize {
    if n_params == 4 {
        2
    } else {
        3
    }
}
