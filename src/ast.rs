//! Parse tree for physio logs
//!
//! The grammar produces a [`Document`] with exactly two children: the
//! [`Body`] (parameters, samples and annotation blocks, everything before
//! the `5003` sentinel) and the [`Footer`] (per-channel statistics, trigger
//! counts and clock intervals, up to the `6003` sentinel).
//!
//! The tree is built once by the parser, consumed once by the record
//! extractor, and then discarded. Nodes own their children; there are no
//! back-references.

use serde::Serialize;
use std::fmt;

/// A monitored channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Ecg,
    Puls,
    Resp,
    Ext,
    Ext2,
}

impl Modality {
    /// Channels every log must summarise in its footer
    pub const REQUIRED: [Modality; 4] = [Modality::Ecg, Modality::Puls, Modality::Resp, Modality::Ext];

    pub const ALL: [Modality; 5] = [
        Modality::Ecg,
        Modality::Puls,
        Modality::Resp,
        Modality::Ext,
        Modality::Ext2,
    ];

    /// The keyword used for this channel in the log footer
    pub fn name(self) -> &'static str {
        match self {
            Modality::Ecg => "ECG",
            Modality::Puls => "PULS",
            Modality::Resp => "RESP",
            Modality::Ext => "EXT",
            Modality::Ext2 => "EXT2",
        }
    }

    pub fn is_required(self) -> bool {
        self != Modality::Ext2
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Onboard subsystem that stamps a clock interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Clock {
    Mdh,
    Mpcu,
}

impl Clock {
    pub const ALL: [Clock; 2] = [Clock::Mdh, Clock::Mpcu];

    pub fn name(self) -> &'static str {
        match self {
            Clock::Mdh => "MDH",
            Clock::Mpcu => "MPCU",
        }
    }
}

impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which end of a clock interval a log line records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogEvent {
    Start,
    Stop,
}

impl LogEvent {
    pub fn name(self) -> &'static str {
        match self {
            LogEvent::Start => "Start",
            LogEvent::Stop => "Stop",
        }
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `(event, clock)` pair carried by a `Log<Event><Clock>Time` keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LogTag {
    pub event: LogEvent,
    pub clock: Clock,
}

impl LogTag {
    pub fn new(event: LogEvent, clock: Clock) -> Self {
        LogTag { event, clock }
    }
}

impl fmt::Display for LogTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Log{}{}Time", self.event, self.clock)
    }
}

/// Root of the parse tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub body: Body,
    pub footer: Footer,
}

/// Everything before the `5003` sentinel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    /// The leading acquisition parameters (4 or 5 integers)
    pub params: Vec<i64>,
    /// Samples and annotation blocks in source order, parameters and
    /// separators dropped
    pub data: Vec<DataItem>,
}

impl Body {
    /// Split a body run: the first `n_params` integers are the parameters,
    /// wherever annotation blocks fall among them. `None` when the run holds
    /// fewer integers than that.
    pub fn split(run: Vec<DataItem>, n_params: usize) -> Option<Body> {
        let mut params = Vec::with_capacity(n_params);
        let mut data = Vec::with_capacity(run.len());
        for item in run {
            match item {
                DataItem::Sample(value) if params.len() < n_params => params.push(value),
                other => data.push(other),
            }
        }
        (params.len() == n_params).then_some(Body { params, data })
    }

    /// Sample values in source order, annotations skipped
    pub fn samples(&self) -> impl Iterator<Item = i64> + '_ {
        self.data.iter().filter_map(|item| match item {
            DataItem::Sample(value) => Some(*value),
            DataItem::Info(_) => None,
        })
    }

    /// Annotation texts in encounter order
    pub fn annotations(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.iter().filter_map(|item| match item {
            DataItem::Info(text) => Some(text.as_str()),
            DataItem::Sample(_) => None,
        })
    }
}

/// A single element of the body data run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataItem {
    Sample(i64),
    /// A `5002 ... 6002` block, its units joined by single spaces
    Info(String),
}

impl DataItem {
    pub fn node_type(&self) -> &'static str {
        match self {
            DataItem::Sample(_) => "sample",
            DataItem::Info(_) => "info",
        }
    }
}

/// Everything between the `5003` and `6003` sentinels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Footer {
    pub lines: Vec<FooterLine>,
}

/// One recognised footer line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterLine {
    /// `<Modality> Freq Per: <freq> <per>`
    Rate { modality: Modality, freq: i64, per: i64 },
    /// `<Modality> Min Max Avg StdDiff: <min> <max> <avg> <std_diff>`
    Stat {
        modality: Modality,
        min: i64,
        max: i64,
        avg: i64,
        std_diff: i64,
    },
    /// `NrTrig NrMP NrArr AcqWin: <nr_trig> <nr_m_p> <nr_arr> <acq_win>`
    Nr {
        nr_trig: i64,
        nr_m_p: i64,
        nr_arr: i64,
        acq_win: i64,
    },
    /// `Log<Start|Stop><MDH|MPCU>Time: <value>`
    Log { tag: LogTag, value: i64 },
}

impl FooterLine {
    /// Grammar rule name of the line
    pub fn node_type(&self) -> &'static str {
        match self {
            FooterLine::Rate { .. } => "rate_line",
            FooterLine::Stat { .. } => "stat_line",
            FooterLine::Nr { .. } => "nr_line",
            FooterLine::Log { .. } => "log_line",
        }
    }

    /// Short rendering of the line's key and values
    pub fn display_label(&self) -> String {
        match self {
            FooterLine::Rate { modality, freq, per } => format!("{} {} {}", modality, freq, per),
            FooterLine::Stat {
                modality,
                min,
                max,
                avg,
                std_diff,
            } => format!("{} {} {} {} {}", modality, min, max, avg, std_diff),
            FooterLine::Nr {
                nr_trig,
                nr_m_p,
                nr_arr,
                acq_win,
            } => format!("{} {} {} {}", nr_trig, nr_m_p, nr_arr, acq_win),
            FooterLine::Log { tag, value } => format!("{} {}", tag, value),
        }
    }
}
