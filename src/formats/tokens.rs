//! Token stream rendering
//!
//! One token per line: its byte span, its kind and the source text it covers.

use super::registry::{FormatError, Formatter};
use crate::error::PhysioError;
use crate::lexer::{tokenize, Token, TokenSpan};
use crate::record::ParseOptions;

fn kind(token: &Token) -> &'static str {
    match token {
        Token::Sentinel(_) => "sentinel",
        t if t.is_int() => "int",
        Token::Colon => "colon",
        Token::Modality(_) => "modality",
        Token::LogTime(_) => "log_time",
        t if t.is_keyword() => "keyword",
        _ => "word",
    }
}

pub fn to_token_str(tokens: &[TokenSpan]) -> String {
    let mut result = String::new();
    for (token, span) in tokens {
        let range = format!("{}..{}", span.start, span.end);
        result.push_str(&format!("{:<12} {:<8} {}\n", range, kind(token), token));
    }
    result
}

pub struct TokensFormatter;

impl Formatter for TokensFormatter {
    fn name(&self) -> &str {
        "tokens"
    }

    fn serialize(&self, source: &str, _options: ParseOptions) -> Result<String, FormatError> {
        let tokens = tokenize(source).map_err(PhysioError::from)?;
        Ok(to_token_str(&tokens))
    }

    fn description(&self) -> &str {
        "The token stream with byte spans"
    }
}
