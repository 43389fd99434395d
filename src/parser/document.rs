//! Document-level grammar
//!
//! ```text
//! document := body footer
//! body     := (info | int | 5000)*
//! info     := 5002 unit* 6002
//! footer   := 5003 (rate_line | stat_line | nr_line | log_line)* 6003
//! ```
//!
//! Footer alternatives are tried in that order at each position. Rate and
//! stat lines share their leading channel keyword, so chumsky backtracks to
//! the next alternative when a line fails after the channel.
//!
//! The grammar does not know the parameter count. The body is one flat run
//! and the first `n` integers of it, wherever annotation blocks fall, are
//! split off as parameters afterwards (see [`crate::ast::Body::split`]).

use chumsky::prelude::*;
use std::ops::Range;
use std::sync::Arc;

use crate::ast::{DataItem, Footer, FooterLine};
use crate::lexer::{Sentinel, Token, TokenSpan};
use crate::parser::combinators::{
    colon, info_block, int, log_tag, modality, sentinel, token, value, ParserError,
};

/// Parse the body run up to (not including) the `5003` sentinel
///
/// Separators are consumed and dropped; annotation blocks may appear
/// anywhere in the run.
pub(crate) fn data(
    source: Arc<String>,
) -> impl Parser<TokenSpan, Vec<DataItem>, Error = ParserError> + Clone {
    let item = choice((
        info_block(source).map(|text| Some(DataItem::Info(text))),
        int().map(|value| Some(DataItem::Sample(value))),
        sentinel(Sentinel::Separator).to(None),
    ));

    item.repeated()
        .map(|items| items.into_iter().flatten().collect())
}

/// `<Modality> Freq Per: <int> <int>`
pub(crate) fn rate_line() -> impl Parser<TokenSpan, FooterLine, Error = ParserError> + Clone {
    modality()
        .then_ignore(token(Token::Freq, "Freq"))
        .then_ignore(token(Token::Per, "Per"))
        .then_ignore(colon())
        .then(value())
        .then(value())
        .map(|((modality, freq), per)| FooterLine::Rate {
            modality,
            freq,
            per,
        })
        .labelled("rate line")
}

/// `<Modality> Min Max Avg StdDiff: <int> <int> <int> <int>`
pub(crate) fn stat_line() -> impl Parser<TokenSpan, FooterLine, Error = ParserError> + Clone {
    modality()
        .then_ignore(token(Token::Min, "Min"))
        .then_ignore(token(Token::Max, "Max"))
        .then_ignore(token(Token::Avg, "Avg"))
        .then_ignore(token(Token::StdDiff, "StdDiff"))
        .then_ignore(colon())
        .then(value().repeated().exactly(4))
        .map(|(modality, values)| FooterLine::Stat {
            modality,
            min: values[0],
            max: values[1],
            avg: values[2],
            std_diff: values[3],
        })
        .labelled("stat line")
}

/// `NrTrig NrMP NrArr AcqWin: <int> <int> <int> <int>`
pub(crate) fn nr_line() -> impl Parser<TokenSpan, FooterLine, Error = ParserError> + Clone {
    token(Token::NrTrig, "NrTrig")
        .ignore_then(token(Token::NrMp, "NrMP"))
        .ignore_then(token(Token::NrArr, "NrArr"))
        .ignore_then(token(Token::AcqWin, "AcqWin"))
        .ignore_then(colon())
        .ignore_then(value().repeated().exactly(4))
        .map(|values| FooterLine::Nr {
            nr_trig: values[0],
            nr_m_p: values[1],
            nr_arr: values[2],
            acq_win: values[3],
        })
        .labelled("nr line")
}

/// `Log<Start|Stop><MDH|MPCU>Time: <int>`
pub(crate) fn log_line() -> impl Parser<TokenSpan, FooterLine, Error = ParserError> + Clone {
    log_tag()
        .then_ignore(colon())
        .then(value())
        .map(|(tag, value)| FooterLine::Log { tag, value })
        .labelled("log line")
}

pub(crate) fn footer() -> impl Parser<TokenSpan, Footer, Error = ParserError> + Clone {
    let line = choice((rate_line(), stat_line(), nr_line(), log_line()));

    sentinel(Sentinel::FooterOpen)
        .ignore_then(line.repeated())
        .then_ignore(sentinel(Sentinel::FooterClose))
        .map(|lines| Footer { lines })
}

/// A log as the grammar sees it, before the parameters are split off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub run: Vec<DataItem>,
    pub footer: Footer,
    /// Token index of the `5003` sentinel
    pub footer_at: usize,
}

/// Parse a whole log
pub fn document(source: &str) -> impl Parser<TokenSpan, RawDocument, Error = ParserError> + Clone {
    let source = Arc::new(source.to_string());
    data(source)
        .then(footer().map_with_span(|footer, span: Range<usize>| (footer, span.start)))
        .then_ignore(end())
        .map(|(run, (footer, footer_at))| RawDocument {
            run,
            footer,
            footer_at,
        })
}
