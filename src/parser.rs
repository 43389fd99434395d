//! Parser module for physio logs
//!
//! This module contains the grammar for the physio log format and the
//! heuristic that decides how many leading integers are acquisition
//! parameters. The parser consumes the token stream from the lexer and
//! produces the parse tree in [`crate::ast`].

pub mod api;
pub mod combinators;
pub mod document;
pub mod params;
#[cfg(test)]
mod tests;

pub use api::{parse_document, parse_tokens};
pub use document::{document, RawDocument};
pub use params::{heuristic_param_count, resolve_param_count, N_PARAMS_DEFAULT};
