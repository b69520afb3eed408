//! Turning remote photo metadata into terminal text.

use chrono::NaiveDateTime;
use scraper::{Html, Node};

const BLOCK_ELEMENTS: [&str; 6] = ["p", "div", "li", "ul", "ol", "blockquote"];
/// Elements whose contents are never shown as text.
const NON_TEXT_ELEMENTS: [&str; 8] = [
    "script", "style", "textarea", "noscript", "template", "iframe", "title", "option",
];

/// Render an HTML description as plain text.
///
/// Markup is dropped and only text content survives; `<br>` and block
/// elements become line breaks. Anything inside a script, style or similar
/// element is discarded. Runs of blank lines are collapsed.
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::new();

    for node in fragment.root_element().descendants() {
        let hidden = node.ancestors().any(|ancestor| match ancestor.value() {
            Node::Element(element) => NON_TEXT_ELEMENTS.contains(&element.name()),
            _ => false,
        });
        if hidden {
            continue;
        }
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if element.name() == "br" => out.push('\n'),
            Node::Element(element) if BLOCK_ELEMENTS.contains(&element.name()) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }

    let mut lines: Vec<&str> = Vec::new();
    for line in out.lines().map(str::trim_end) {
        if line.trim().is_empty() && lines.last().is_none_or(|last| last.trim().is_empty()) {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.trim().is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Format the "taken" timestamp of a photo, e.g. "May 12, 1969".
/// Unparseable values are shown as given.
pub fn format_taken(taken: &str) -> String {
    match NaiveDateTime::parse_from_str(taken, "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => dt.format("%B %-d, %Y").to_string(),
        Err(_) => taken.to_string(),
    }
}
