use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{ChartFrame, Renderer, UiNode};

/// Serializes frames to HTML markup.
///
/// Useful for server-side rendering or hosts that patch markup into an
/// existing document. The last frame's markup stays in `output`.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    pub output: String,
}

impl HtmlRenderer {
    #[must_use]
    pub fn markup(&self) -> &str {
        &self.output
    }
}

impl Renderer for HtmlRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        let mut out = String::with_capacity(frame.node_count() * 96);
        write_node(&frame.root, &mut out)
            .map_err(|e| ChartError::InvalidFrame(format!("failed to write html: {e}")))?;
        self.output = out;
        Ok(())
    }
}

/// Renders a single subtree to markup.
pub fn node_to_html(node: &UiNode) -> ChartResult<String> {
    let mut out = String::new();
    write_node(node, &mut out)
        .map_err(|e| ChartError::InvalidFrame(format!("failed to write html: {e}")))?;
    Ok(out)
}

fn write_node(node: &UiNode, out: &mut String) -> std::fmt::Result {
    write!(out, "<{}", node.tag)?;
    if let Some(id) = &node.id {
        write!(out, " id=\"{}\"", escape(id))?;
    }
    if !node.classes.is_empty() {
        write!(out, " class=\"{}\"", escape(&node.classes.join(" ")))?;
    }
    if !node.styles.is_empty() {
        let style = node
            .styles
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        write!(out, " style=\"{}\"", escape(&style))?;
    }
    for (name, value) in &node.attributes {
        write!(out, " {name}=\"{}\"", escape(value))?;
    }
    out.push('>');
    if let Some(text) = &node.text {
        out.push_str(&escape(text));
    }
    for child in &node.children {
        write_node(child, out)?;
    }
    write!(out, "</{}>", node.tag)
}

fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
