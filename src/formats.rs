//! Output format implementations
//!
//! Each format picks up the pipeline at the stage it renders:
//! - tokens: the lexer output with byte spans
//! - tree: the parse tree before extraction (works on logs that fail integrity)
//! - summary / json: the extracted record

pub mod json;
pub mod registry;
pub mod summary;
pub mod tokens;
pub mod treeviz;

pub use json::{to_json, JsonFormatter};
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use summary::{to_summary_str, SummaryFormatter};
pub use tokens::{to_token_str, TokensFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
