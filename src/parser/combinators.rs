//! Parser combinator functions for building the physio grammar.

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use crate::ast::{LogTag, Modality};
use crate::lexer::{Sentinel, Token, TokenSpan};

/// Type alias for parser error
pub(crate) type ParserError = Simple<TokenSpan>;

/// Helper: match a specific token, ignoring the span
pub(crate) fn token(
    t: Token,
    label: &'static str,
) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    filter(move |(tok, _): &TokenSpan| tok == &t)
        .ignored()
        .labelled(label)
}

/// Match a sentinel marker
pub(crate) fn sentinel(kind: Sentinel) -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    token(Token::Sentinel(kind), kind.literal())
}

pub(crate) fn colon() -> impl Parser<TokenSpan, (), Error = ParserError> + Clone {
    token(Token::Colon, ":")
}

/// Match an integer token and yield its value
pub(crate) fn int() -> impl Parser<TokenSpan, i64, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, (tok, tok_span): TokenSpan| match tok {
        Token::Int(value) => Ok(value),
        other => Err(ParserError::expected_input_found(
            span,
            None,
            Some((other, tok_span)),
        )),
    })
    .labelled("integer")
}

/// Match a footer value; a sentinel literal after a colon is just a number
pub(crate) fn value() -> impl Parser<TokenSpan, i64, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, (tok, tok_span): TokenSpan| match tok {
        Token::Int(value) => Ok(value),
        Token::Sentinel(s) => Ok(s.value()),
        other => Err(ParserError::expected_input_found(
            span,
            None,
            Some((other, tok_span)),
        )),
    })
    .labelled("integer")
}

/// Match a channel keyword
pub(crate) fn modality() -> impl Parser<TokenSpan, Modality, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, (tok, tok_span): TokenSpan| match tok {
        Token::Modality(m) => Ok(m),
        other => Err(ParserError::expected_input_found(
            span,
            None,
            Some((other, tok_span)),
        )),
    })
    .labelled("modality")
}

/// Match a `Log<Event><Clock>Time` keyword
pub(crate) fn log_tag() -> impl Parser<TokenSpan, LogTag, Error = ParserError> + Clone {
    filter_map(|span: Range<usize>, (tok, tok_span): TokenSpan| match tok {
        Token::LogTime(tag) => Ok(tag),
        other => Err(ParserError::expected_input_found(
            span,
            None,
            Some((other, tok_span)),
        )),
    })
    .labelled("log time key")
}

/// Helper: rebuild text from token spans
///
/// Tokens whose spans touch belong to the same whitespace-delimited unit in
/// the source (`LOGVERSION_PULS:` lexes as a word and a colon); units are
/// joined with a single space.
pub(crate) fn extract_text_from_spans(source: &str, spans: &[Range<usize>]) -> String {
    let mut text = String::new();
    let mut previous_end: Option<usize> = None;
    for span in spans {
        if span.start > span.end || span.end > source.len() {
            continue;
        }
        if let Some(end) = previous_end {
            if end != span.start {
                text.push(' ');
            }
        }
        text.push_str(&source[span.clone()]);
        previous_end = Some(span.end);
    }
    text
}

/// Parse an annotation block: `5002 <anything but 6002>* 6002`
pub(crate) fn info_block(
    source: Arc<String>,
) -> impl Parser<TokenSpan, String, Error = ParserError> + Clone {
    let content = filter(|(t, _): &TokenSpan| !t.is_sentinel(Sentinel::InfoClose)).repeated();

    sentinel(Sentinel::InfoOpen)
        .ignore_then(content)
        .then_ignore(sentinel(Sentinel::InfoClose))
        .map(move |tokens: Vec<TokenSpan>| {
            let spans: Vec<Range<usize>> = tokens.into_iter().map(|(_, s)| s).collect();
            extract_text_from_spans(&source, &spans)
        })
        .labelled("annotation block")
}
