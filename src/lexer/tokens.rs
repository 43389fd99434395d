//! Token definitions for physio logs
//!
//! This module defines all the tokens that can be produced by the physio lexer.
//! The tokens are defined using the logos derive macro for efficient tokenization.
//! Whitespace never produces a token; every other unit becomes exactly one of
//! an integer, a sentinel, a footer keyword, a colon, or a bare word.
use logos::Logos;
use std::fmt;

use crate::ast::{Clock, LogEvent, LogTag, Modality};

/// Fixed numeric markers delimiting structural regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentinel {
    /// `5000`, a no-op separator inside the sample run
    Separator,
    /// `5002`, opens an annotation block
    InfoOpen,
    /// `6002`, closes an annotation block
    InfoClose,
    /// `5003`, ends the body and opens the footer
    FooterOpen,
    /// `6003`, closes the footer
    FooterClose,
}

impl Sentinel {
    pub fn literal(self) -> &'static str {
        match self {
            Sentinel::Separator => "5000",
            Sentinel::InfoOpen => "5002",
            Sentinel::InfoClose => "6002",
            Sentinel::FooterOpen => "5003",
            Sentinel::FooterClose => "6003",
        }
    }

    /// The marker read as a plain number
    pub fn value(self) -> i64 {
        match self {
            Sentinel::Separator => 5000,
            Sentinel::InfoOpen => 5002,
            Sentinel::InfoClose => 6002,
            Sentinel::FooterOpen => 5003,
            Sentinel::FooterClose => 6003,
        }
    }
}

/// All possible tokens in a physio log
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    // Structural markers (exact literals win over the integer pattern)
    #[token("5000", |_| Sentinel::Separator)]
    #[token("5002", |_| Sentinel::InfoOpen)]
    #[token("6002", |_| Sentinel::InfoClose)]
    #[token("5003", |_| Sentinel::FooterOpen)]
    #[token("6003", |_| Sentinel::FooterClose)]
    Sentinel(Sentinel),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok(), priority = 3)]
    Int(i64),

    #[token(":")]
    Colon,

    // Channels
    #[token("ECG", |_| Modality::Ecg)]
    #[token("PULS", |_| Modality::Puls)]
    #[token("RESP", |_| Modality::Resp)]
    #[token("EXT", |_| Modality::Ext)]
    #[token("EXT2", |_| Modality::Ext2)]
    Modality(Modality),

    // Footer field names
    #[token("Freq")]
    Freq,
    #[token("Per")]
    Per,
    #[token("Min")]
    Min,
    #[token("Max")]
    Max,
    #[token("Avg")]
    Avg,
    #[token("StdDiff")]
    StdDiff,
    #[token("NrTrig")]
    NrTrig,
    #[token("NrMP")]
    NrMp,
    #[token("NrArr")]
    NrArr,
    #[token("AcqWin")]
    AcqWin,

    // LogStartMDHTime, LogStopMPCUTime, ...
    #[regex(r"LogSt(art|op)(MDH|MPCU)Time", log_tag)]
    LogTime(LogTag),

    // Anything else: free text, mostly found inside annotation blocks
    #[regex(r"[^\s:]+", |lex| lex.slice().to_string(), priority = 1)]
    Word(String),
}

fn log_tag(lex: &mut logos::Lexer<Token>) -> LogTag {
    let slice = lex.slice();
    let event = if slice.starts_with("LogStart") {
        LogEvent::Start
    } else {
        LogEvent::Stop
    };
    let clock = if slice.contains("MPCU") {
        Clock::Mpcu
    } else {
        Clock::Mdh
    };
    LogTag::new(event, clock)
}

impl Token {
    /// Check if this token is the given sentinel
    pub fn is_sentinel(&self, kind: Sentinel) -> bool {
        matches!(self, Token::Sentinel(s) if *s == kind)
    }

    /// Check if this token is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Token::Int(_))
    }

    /// Check if this token is a footer keyword (channel, field name or log key)
    pub fn is_keyword(&self) -> bool {
        !matches!(
            self,
            Token::Sentinel(_) | Token::Int(_) | Token::Colon | Token::Word(_)
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Sentinel(s) => f.write_str(s.literal()),
            Token::Int(value) => write!(f, "{}", value),
            Token::Colon => f.write_str(":"),
            Token::Modality(m) => f.write_str(m.name()),
            Token::Freq => f.write_str("Freq"),
            Token::Per => f.write_str("Per"),
            Token::Min => f.write_str("Min"),
            Token::Max => f.write_str("Max"),
            Token::Avg => f.write_str("Avg"),
            Token::StdDiff => f.write_str("StdDiff"),
            Token::NrTrig => f.write_str("NrTrig"),
            Token::NrMp => f.write_str("NrMP"),
            Token::NrArr => f.write_str("NrArr"),
            Token::AcqWin => f.write_str("AcqWin"),
            Token::LogTime(tag) => write!(f, "{}", tag),
            Token::Word(word) => f.write_str(word),
        }
    }
}
