//! The parsed physio record
//!
//! [`PhysioLog`] is the value handed to downstream signal processing: the
//! acquisition parameters, the sample stream, the annotation blocks, the
//! per-channel footer summaries and the two clock intervals. It is built
//! once per parse call and never mutated afterwards.

pub mod extract;
pub mod log_time;
pub mod summary;

use log::debug;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::ast::{Clock, Document, Modality};
use crate::error::PhysioError;
use crate::lexer::{decode, tokenize};
use crate::parser::{parse_tokens, resolve_param_count};

pub use log_time::LogTime;
pub use summary::{MeasurementSummary, NrSummary};

/// Caller-supplied knobs for a parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Number of leading parameters; `None` lets the log decide
    pub n_params: Option<usize>,
}

impl ParseOptions {
    pub fn with_n_params(n_params: usize) -> Self {
        ParseOptions {
            n_params: Some(n_params),
        }
    }

    /// Settle the parameter count for `source`, rejecting explicit counts
    /// other than 4 or 5
    pub fn resolve(&self, source: &str) -> Result<usize, PhysioError> {
        if let Some(n) = self.n_params {
            if !(4..=5).contains(&n) {
                return Err(PhysioError::InvalidParamCount(n));
            }
        }
        let n_params = resolve_param_count(source, self.n_params);
        debug!(
            "using {} params ({})",
            n_params,
            if self.n_params.is_some() {
                "explicit"
            } else {
                "resolved"
            }
        );
        Ok(n_params)
    }
}

/// A fully parsed physio log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhysioLog {
    n_params: usize,
    params: Vec<i64>,
    rate: i64,
    info: Vec<String>,
    ts: Vec<i64>,
    ecg: MeasurementSummary,
    puls: MeasurementSummary,
    resp: MeasurementSummary,
    ext: MeasurementSummary,
    ext2: Option<MeasurementSummary>,
    nr: NrSummary,
    mdh: LogTime,
    mpcu: LogTime,
}

impl PhysioLog {
    /// Parse log text, resolving the parameter count heuristically
    pub fn parse(content: &str) -> Result<Self, PhysioError> {
        Self::parse_with(content, ParseOptions::default())
    }

    /// Parse log text with explicit options
    pub fn parse_with(content: &str, options: ParseOptions) -> Result<Self, PhysioError> {
        let n_params = options.resolve(content)?;
        let tokens = tokenize(content)?;
        let doc = parse_tokens(tokens, content, n_params)?;
        Self::from_document(doc, n_params)
    }

    /// Parse raw bytes; they must be UTF-8
    pub fn from_bytes(bytes: &[u8], options: ParseOptions) -> Result<Self, PhysioError> {
        Self::parse_with(decode(bytes)?, options)
    }

    /// Read a log from any reader
    pub fn from_reader<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self, PhysioError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(&bytes, options)
    }

    /// Read a log from a file
    pub fn from_path(path: impl AsRef<Path>, options: ParseOptions) -> Result<Self, PhysioError> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes, options)
    }

    /// Interpret a parse tree built with `n_params` leading parameters
    pub(crate) fn from_document(doc: Document, n_params: usize) -> Result<Self, PhysioError> {
        let footer = extract::fold_footer(&doc.footer)?;

        let Document { body, .. } = doc;
        let rate = body.params[extract::rate_index(n_params)];
        let ts: Vec<i64> = body.samples().collect();
        let info: Vec<String> = body.annotations().map(str::to_string).collect();
        debug!(
            "extracted {} samples and {} annotation blocks",
            ts.len(),
            info.len()
        );

        Ok(PhysioLog {
            n_params,
            params: body.params,
            rate,
            info,
            ts,
            ecg: footer.ecg,
            puls: footer.puls,
            resp: footer.resp,
            ext: footer.ext,
            ext2: footer.ext2,
            nr: footer.nr,
            mdh: footer.mdh,
            mpcu: footer.mpcu,
        })
    }

    /// The resolved number of leading parameters (4 or 5)
    pub fn n_params(&self) -> usize {
        self.n_params
    }

    pub fn params(&self) -> &[i64] {
        &self.params
    }

    /// Sampling rate: the 3rd parameter of a 4-parameter log, else the 4th
    pub fn rate(&self) -> i64 {
        self.rate
    }

    /// Annotation blocks in encounter order
    pub fn info(&self) -> &[String] {
        &self.info
    }

    /// Sample stream in source order
    pub fn ts(&self) -> &[i64] {
        &self.ts
    }

    /// The whole integer run of the body: params followed by samples
    pub fn data(&self) -> impl Iterator<Item = i64> + '_ {
        self.params.iter().chain(self.ts.iter()).copied()
    }

    pub fn ecg(&self) -> &MeasurementSummary {
        &self.ecg
    }

    pub fn puls(&self) -> &MeasurementSummary {
        &self.puls
    }

    pub fn resp(&self) -> &MeasurementSummary {
        &self.resp
    }

    pub fn ext(&self) -> &MeasurementSummary {
        &self.ext
    }

    /// Second external channel, only present in some logs
    pub fn ext2(&self) -> Option<&MeasurementSummary> {
        self.ext2.as_ref()
    }

    /// Summary by channel
    pub fn summary(&self, modality: Modality) -> Option<&MeasurementSummary> {
        match modality {
            Modality::Ecg => Some(&self.ecg),
            Modality::Puls => Some(&self.puls),
            Modality::Resp => Some(&self.resp),
            Modality::Ext => Some(&self.ext),
            Modality::Ext2 => self.ext2.as_ref(),
        }
    }

    pub fn nr(&self) -> &NrSummary {
        &self.nr
    }

    pub fn mdh(&self) -> &LogTime {
        &self.mdh
    }

    pub fn mpcu(&self) -> &LogTime {
        &self.mpcu
    }

    /// Clock interval by subsystem
    pub fn log_time(&self, clock: Clock) -> &LogTime {
        match clock {
            Clock::Mdh => &self.mdh,
            Clock::Mpcu => &self.mpcu,
        }
    }
}

impl FromStr for PhysioLog {
    type Err = PhysioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PhysioLog::parse(s)
    }
}
