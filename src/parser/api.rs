//! Public API for the parser.

use chumsky::prelude::*;
use log::debug;
use std::ops::Range;

use crate::ast::{Body, Document};
use crate::error::{ParseError, PhysioError};
use crate::lexer::{tokenize, Sentinel, TokenSpan};
use crate::parser::combinators::ParserError;
use crate::parser::document::document;

/// Parse an already tokenized log
///
/// `source` must be the text the tokens were produced from; annotation text
/// is sliced out of it.
pub fn parse_tokens(
    tokens: Vec<TokenSpan>,
    source: &str,
    n_params: usize,
) -> Result<Document, ParseError> {
    let spans: Vec<Range<usize>> = tokens.iter().map(|(_, s)| s.clone()).collect();
    let raw = document(source)
        .parse(tokens)
        .map_err(|errors| convert_errors(errors, &spans, source))?;
    let body = Body::split(raw.run, n_params)
        .ok_or_else(|| too_few_params(raw.footer_at, &spans, source))?;
    let doc = Document {
        body,
        footer: raw.footer,
    };
    debug!(
        "parsed {} body items and {} footer lines",
        doc.body.data.len(),
        doc.footer.lines.len()
    );
    Ok(doc)
}

/// Tokenize and parse a log into its parse tree
pub fn parse_document(source: &str, n_params: usize) -> Result<Document, PhysioError> {
    let tokens = tokenize(source)?;
    Ok(parse_tokens(tokens, source, n_params)?)
}

/// The body ended (at the `5003` token) before `n_params` integers were seen
fn too_few_params(footer_at: usize, spans: &[Range<usize>], source: &str) -> ParseError {
    let span = spans.get(footer_at).cloned();
    let offset = span.as_ref().map_or(source.len(), |s| s.start);
    let (line, column) = line_column(source, offset);
    ParseError {
        expected: vec!["integer".to_string()],
        found: Some(Sentinel::FooterOpen.literal().to_string()),
        position: footer_at,
        span,
        line,
        column,
    }
}

/// Pick the error chumsky got furthest with and describe it against the source
fn convert_errors(errors: Vec<ParserError>, spans: &[Range<usize>], source: &str) -> ParseError {
    match errors.into_iter().max_by_key(|e| e.span().start) {
        Some(error) => convert_error(&error, spans, source),
        None => ParseError {
            expected: Vec::new(),
            found: None,
            position: spans.len(),
            span: None,
            line: 1,
            column: 1,
        },
    }
}

fn convert_error(error: &ParserError, spans: &[Range<usize>], source: &str) -> ParseError {
    let position = error.span().start;

    let mut expected: Vec<String> = match error.label() {
        Some(label) => vec![label.to_string()],
        None => Vec::new(),
    };
    for item in error.expected() {
        let name = match item {
            Some((token, _)) => token.to_string(),
            None => "end of input".to_string(),
        };
        if !expected.contains(&name) {
            expected.push(name);
        }
    }

    let (found, span) = match error.found() {
        Some((token, span)) => (Some(token.to_string()), Some(span.clone())),
        None => (None, None),
    };

    let offset = span
        .as_ref()
        .map(|s| s.start)
        .or_else(|| spans.get(position).map(|s| s.start))
        .unwrap_or(source.len());
    let (line, column) = line_column(source, offset);

    ParseError {
        expected,
        found,
        position,
        span,
        line,
        column,
    }
}

/// 1-based line and column of a byte offset
pub(crate) fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = match before.rfind('\n') {
        Some(newline) => before[newline + 1..].chars().count() + 1,
        None => before.chars().count() + 1,
    };
    (line, column)
}
