//! Treeviz formatter for the parse tree

use super::registry::{FormatError, Formatter};
use crate::ast::{Body, DataItem, Document, Footer};
use crate::parser::parse_document;
use crate::record::ParseOptions;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    let mut result = String::new();
    append_body(&mut result, &doc.body, "", false);
    append_footer(&mut result, &doc.footer, "", true);
    result
}

fn append_node(result: &mut String, prefix: &str, is_last: bool, node_type: &str, label: &str) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node_type,
        truncate(label, 30)
    ));
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_body(result: &mut String, body: &Body, prefix: &str, is_last: bool) {
    let label = format!("{} params, {} items", body.params.len(), body.data.len());
    append_node(result, prefix, is_last, "body", &label);

    let prefix = child_prefix(prefix, is_last);
    let params = body
        .params
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    append_node(result, &prefix, body.data.is_empty(), "params", &params);

    for (i, item) in body.data.iter().enumerate() {
        let is_last = i == body.data.len() - 1;
        let label = match item {
            DataItem::Sample(value) => value.to_string(),
            DataItem::Info(text) => text.clone(),
        };
        append_node(result, &prefix, is_last, item.node_type(), &label);
    }
}

fn append_footer(result: &mut String, footer: &Footer, prefix: &str, is_last: bool) {
    let label = format!("{} lines", footer.lines.len());
    append_node(result, prefix, is_last, "footer", &label);

    let prefix = child_prefix(prefix, is_last);
    for (i, line) in footer.lines.iter().enumerate() {
        let is_last = i == footer.lines.len() - 1;
        append_node(result, &prefix, is_last, line.node_type(), &line.display_label());
    }
}

pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "tree"
    }

    fn serialize(&self, source: &str, options: ParseOptions) -> Result<String, FormatError> {
        let n_params = options.resolve(source)?;
        let doc = parse_document(source, n_params)?;
        Ok(to_treeviz_str(&doc))
    }

    fn description(&self) -> &str {
        "The parse tree before extraction"
    }
}
