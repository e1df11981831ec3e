//! Text normalization shared by the renderers

use super::node::Signature;
use crate::data::html;

/// Non-empty parameter texts across every signature, in order
pub fn flatten_signatures(signatures: &[Signature]) -> Vec<&str> {
    signatures
        .iter()
        .flat_map(|signature| signature.params.iter())
        .filter_map(|param| param.raw_text.as_deref())
        .filter(|text| !text.is_empty())
        .collect()
}

/// One line per parameter, prefixed with a line break; empty when there are none
pub fn format_signatures(signatures: &[Signature]) -> String {
    let lines = flatten_signatures(signatures);
    if lines.is_empty() {
        String::new()
    } else {
        format!("\n{}", lines.join("\n"))
    }
}

/// Plain-text description on its own line; empty when nothing is left
pub fn format_description(desc: &str) -> String {
    let text = html::to_plain_text(desc);
    if text.is_empty() {
        String::new()
    } else {
        format!("\n{}", text)
    }
}
