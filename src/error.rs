//! Error types for the physio log pipeline
//!
//! Every stage fails with its own error: the lexer with [`LexError`], the
//! grammar with [`ParseError`] and the record extractor with
//! [`IntegrityError`]. [`PhysioError`] wraps them for the public entry points.

use std::fmt;
use std::io;
use std::ops::Range;

use crate::ast::{Clock, LogEvent, Modality};

/// Errors that can occur while tokenizing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The input holds no tokens at all
    Empty,
    /// The input bytes are not valid UTF-8
    InvalidUtf8 { valid_up_to: usize },
    /// A unit could not be turned into a token (e.g. an integer overflowing i64)
    Unrecognized { span: Range<usize>, text: String },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::Empty => write!(f, "Input is empty"),
            LexError::InvalidUtf8 { valid_up_to } => {
                write!(f, "Input is not valid UTF-8 (valid up to byte {})", valid_up_to)
            }
            LexError::Unrecognized { span, text } => {
                write!(f, "Unrecognized input {:?} at bytes {:?}", text, span)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// The token stream does not match the log grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Constructs the grammar would have accepted at this point
    pub expected: Vec<String>,
    /// The offending token, `None` at end of input
    pub found: Option<String>,
    /// Index of the offending token in the token stream
    pub position: usize,
    /// Byte range of the offending token in the source
    pub span: Option<Range<usize>>,
    /// 1-based line of the offending token
    pub line: usize,
    /// 1-based column of the offending token
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: ", self.line, self.column)?;
        match &self.found {
            Some(found) => write!(f, "unexpected {:?}", found)?,
            None => write!(f, "unexpected end of input")?,
        }
        if !self.expected.is_empty() {
            write!(f, ", expected {}", self.expected.join(" or "))?;
        }
        write!(f, " (token {})", self.position)
    }
}

impl std::error::Error for ParseError {}

/// The two kinds of footer lines that make up a channel summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryLine {
    Rate,
    Stat,
}

impl fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryLine::Rate => f.write_str("Freq Per"),
            SummaryLine::Stat => f.write_str("Min Max Avg StdDiff"),
        }
    }
}

/// The log parsed but a required footer section never appeared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    MissingSummary(Modality),
    IncompleteSummary {
        modality: Modality,
        missing: SummaryLine,
    },
    MissingNrLine,
    MissingLogTime(Clock),
    IncompleteLogTime {
        clock: Clock,
        missing: LogEvent,
    },
}

impl fmt::Display for IntegrityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityError::MissingSummary(modality) => {
                write!(f, "Footer has no summary for {}", modality)
            }
            IntegrityError::IncompleteSummary { modality, missing } => {
                write!(f, "Footer summary for {} lacks its '{}' line", modality, missing)
            }
            IntegrityError::MissingNrLine => write!(f, "Footer has no NrTrig NrMP NrArr AcqWin line"),
            IntegrityError::MissingLogTime(clock) => {
                write!(f, "Footer has no {} log times", clock)
            }
            IntegrityError::IncompleteLogTime { clock, missing } => {
                write!(f, "Footer lacks the {} time for {}", missing, clock)
            }
        }
    }
}

impl std::error::Error for IntegrityError {}

/// Errors surfaced by the public parsing entry points
#[derive(Debug)]
pub enum PhysioError {
    Lex(LexError),
    Parse(ParseError),
    Integrity(IntegrityError),
    /// An explicit parameter count other than 4 or 5
    InvalidParamCount(usize),
    Io(io::Error),
}

impl fmt::Display for PhysioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysioError::Lex(e) => write!(f, "Lexer error: {}", e),
            PhysioError::Parse(e) => write!(f, "Parse error: {}", e),
            PhysioError::Integrity(e) => write!(f, "Integrity error: {}", e),
            PhysioError::InvalidParamCount(n) => {
                write!(f, "Invalid parameter count {} (expected 4 or 5)", n)
            }
            PhysioError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for PhysioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PhysioError::Lex(e) => Some(e),
            PhysioError::Parse(e) => Some(e),
            PhysioError::Integrity(e) => Some(e),
            PhysioError::InvalidParamCount(_) => None,
            PhysioError::Io(e) => Some(e),
        }
    }
}

impl From<LexError> for PhysioError {
    fn from(err: LexError) -> Self {
        PhysioError::Lex(err)
    }
}

impl From<ParseError> for PhysioError {
    fn from(err: ParseError) -> Self {
        PhysioError::Parse(err)
    }
}

impl From<IntegrityError> for PhysioError {
    fn from(err: IntegrityError) -> Self {
        PhysioError::Integrity(err)
    }
}

impl From<io::Error> for PhysioError {
    fn from(err: io::Error) -> Self {
        PhysioError::Io(err)
    }
}
