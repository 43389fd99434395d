//! Parameter-count resolution
//!
//! The body opens with 4 or 5 acquisition parameters and nothing in the
//! format says which. Precedence is: explicit count from the caller, then the
//! lookahead heuristic, then the default of 4.

use once_cell::sync::Lazy;
use regex::Regex;

/// Parameter count used when nothing else decides
pub const N_PARAMS_DEFAULT: usize = 4;

/// 4 or 5 leading integers immediately followed by an annotation block.
/// Digits and whitespace are ASCII only, matching what the lexer accepts.
static PARAMS_BEFORE_INFO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[ \t\r\n]*((?:[0-9]+[ \t\r\n]+){4,5})5002(?:[ \t\r\n]|$)").unwrap()
});

/// Resolve the parameter count, skipping the heuristic when `explicit` is set
pub fn resolve_param_count(source: &str, explicit: Option<usize>) -> usize {
    match explicit {
        Some(n) => n,
        None => heuristic_param_count(source),
    }
}

/// If the first run of 4 or 5 integers is directly followed by `5002`, that
/// run is the parameter block; otherwise assume 4.
pub fn heuristic_param_count(source: &str) -> usize {
    PARAMS_BEFORE_INFO
        .captures(source)
        .map(|caps| caps[1].split_whitespace().count())
        .unwrap_or(N_PARAMS_DEFAULT)
}
