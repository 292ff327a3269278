//! Markdown documentation to HTML

use pulldown_cmark::{Event, Options, Parser, html};
use tsassist_types::{DisplayPart, Element, Node, display_parts_to_string};

use crate::DOCS_CLASS;

/// Render markdown to an HTML fragment.
///
/// Raw HTML in the source is emitted as escaped text, never as markup.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

/// Documentation block for a tooltip or info panel.
///
/// `None` when the parts carry no visible text.
#[must_use]
pub fn docs_node(parts: &[DisplayPart]) -> Option<Node> {
    let text = display_parts_to_string(parts);
    if text.trim().is_empty() {
        return None;
    }
    Some(
        Element::new("div")
            .with_class(DOCS_CLASS)
            .child(Node::html(render_markdown(&text)))
            .into(),
    )
}
