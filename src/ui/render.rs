//! Formats a single documentation node as a block of text

use super::columns::{columnize, DEFAULT_WIDTH};
use super::node::{DocNode, RuntimeObject, StructuredNode};
use super::style::Palette;
use super::text::{format_description, format_signatures};

/// Display settings for one render call
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// The query token that selected the node
    pub query: String,
    pub palette: Palette,
    /// Target line width for column lists
    pub width: usize,
}

impl RenderContext {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            palette: Palette::colored(),
            width: DEFAULT_WIDTH,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

/// Renders `node` for display
pub fn render(node: &DocNode, ctx: &RenderContext) -> String {
    match node {
        DocNode::Structured(node) => render_structured(node, ctx),
        DocNode::Runtime(object) => render_runtime(object, ctx),
    }
}

fn render_structured(node: &StructuredNode, ctx: &RenderContext) -> String {
    let p = &ctx.palette;
    let sections = [
        p.banner(&format!(" {} | {} ", node.kind, ctx.query)),
        format!("{} {}", p.label("Name:"), node.name),
        format!("{} {}", p.label("Node.js Object Type:"), node.kind),
        format!(
            "{} {}{}",
            p.label("Signature(s):"),
            node.raw_type_label,
            format_signatures(&node.signatures)
        ),
        format!("{}{}", p.label("Description:"), format_description(&node.description)),
    ];

    sections.join("\n")
}

fn render_runtime(object: &RuntimeObject, ctx: &RenderContext) -> String {
    let p = &ctx.palette;
    let sections = [
        format!("{}\n", p.alert("[ Additional Information ]")),
        format!("{} '{}'", p.label("toString:"), object.string_form),
        format!("{} '{}'", p.label("valueOf:"), object.primitive_value),
        format!("{} {}", p.label("Constructor:"), object.constructor),
        name_block(p.label("Own Properties (non-methods):"), &object.own_properties(), ctx.width),
        format!("{}\n", name_block(p.label("Methods:"), &object.methods(), ctx.width)),
    ];

    sections.join("\n")
}

/// Label followed by the column layout of `names` on the next lines
fn name_block(label: String, names: &[&str], width: usize) -> String {
    let columns = columnize(names, width);
    if columns.is_empty() {
        label
    } else {
        format!("{}\n{}", label, columns)
    }
}
