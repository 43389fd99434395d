//! Lexer module for physio logs
//!
//! This module contains the tokenization logic for the physio log format,
//! including token definitions and the lexer implementation.
//!
//! The log has no line structure the grammar relies on: the body is one long
//! run of integers and the footer lines are recognised by their keywords.
//! Lexing therefore drops all whitespace and keeps byte spans so that
//! annotation text can later be rebuilt from the source.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{decode, tokenize, tokens, TokenSpan};
pub use tokens::{Sentinel, Token};
