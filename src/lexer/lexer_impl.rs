//! Implementation of the physio lexer
//!
//! This module provides convenience functions for tokenizing physio text.
//! The actual tokenization is handled entirely by logos.

use log::trace;
use logos::Logos;
use std::ops::Range;

use crate::error::LexError;
use crate::lexer::tokens::Token;

/// Type alias for token with its byte span in the source
pub type TokenSpan = (Token, Range<usize>);

/// Lazily tokenize a string; restart by calling again with the same source
pub fn tokens(source: &str) -> impl Iterator<Item = Result<TokenSpan, LexError>> + '_ {
    Token::lexer(source)
        .spanned()
        .map(move |(result, span)| match result {
            Ok(token) => Ok((token, span)),
            Err(_) => Err(LexError::Unrecognized {
                text: source[span.clone()].to_string(),
                span,
            }),
        })
}

/// Tokenize a whole log, failing on empty input or an unrecognized unit
pub fn tokenize(source: &str) -> Result<Vec<TokenSpan>, LexError> {
    if source.trim().is_empty() {
        return Err(LexError::Empty);
    }
    let tokens = tokens(source).collect::<Result<Vec<_>, _>>()?;
    trace!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    Ok(tokens)
}

/// Decode raw bytes as log text
pub fn decode(bytes: &[u8]) -> Result<&str, LexError> {
    std::str::from_utf8(bytes).map_err(|e| LexError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}
