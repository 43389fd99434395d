//! Testing utilities for physio logs
//!
//! Two tools that are meant to be used together:
//!
//! 1. [`PhysioSources`] - verified sample logs under `tests/data`
//! 2. [`assert_log`] - fluent assertions over a parsed [`PhysioLog`](crate::PhysioLog)
//!
//! Real logs have many small quirks (padding in footer lines, annotations
//! wrapped across lines, 4 vs 5 parameters). Keeping the samples in one place
//! means they get fixed in one place when a quirk turns up.
//!
//! ```rust,ignore
//! use physio_log::ast::Modality;
//! use physio_log::testing::{assert_log, PhysioSources};
//!
//! let log = PhysioSources::load("sample_basic")?;
//! assert_log(&log)
//!     .n_params(4)
//!     .rate(20)
//!     .info(&["LOGVERSION 102", "TRIGGERMETHOD 1", "MSGTYPE 103"])
//!     .summary(Modality::Puls, |s| {
//!         s.freq(72).per(823);
//!     })
//!     .no_summary(Modality::Ext2);
//! ```

mod assertions;
mod sources;

pub use assertions::{assert_log, LogAssertion, SummaryAssertion};
pub use sources::{PhysioSources, AVAILABLE_SAMPLES};
