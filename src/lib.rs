//! # physio-log
//!
//! A parser for physiological monitoring logs: the plain-text files a scanner
//! writes alongside an acquisition, holding the raw pulse/ECG/respiration
//! sample stream, annotation blocks and a footer of per-channel statistics
//! and clock intervals.
//!
//! The pipeline runs in four stages, each with its own module and error:
//!
//! 1. [`lexer`] turns the text into tokens
//! 2. [`parser`] resolves the parameter count and builds the parse tree in [`ast`]
//! 3. [`record`] folds the tree into a [`PhysioLog`]
//! 4. [`clock`] converts the footer's millisecond stamps to times of day
//!
//! ```rust,ignore
//! let log = physio_log::parse(&std::fs::read_to_string("run1.puls")?)?;
//! println!("{} samples at rate {}", log.ts().len(), log.rate());
//! ```
//!
//! ## Testing
//!
//! See the [testing module](crate::testing) for the sample logs and the
//! fluent assertions used across the test suite.

pub mod ast;
pub mod clock;
pub mod config;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod record;
pub mod testing;

pub use ast::{Clock, LogEvent, Modality};
pub use clock::{logptime, TimeOfDay};
pub use error::{IntegrityError, LexError, ParseError, PhysioError};
pub use record::{LogTime, MeasurementSummary, NrSummary, ParseOptions, PhysioLog};

/// Parse a log, resolving the parameter count heuristically
pub fn parse(content: &str) -> Result<PhysioLog, PhysioError> {
    PhysioLog::parse(content)
}
