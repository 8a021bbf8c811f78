// src/core/html.rs
//
// Text helpers over parsed `scraper` elements.

use scraper::{ElementRef, Node};

use super::sanitize::normalize_ws;

// Elements that start a new line in rendered output.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt",
    "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

// Elements whose text never shows.
const HIDDEN_TAGS: &[&str] = &["script", "style", "template", "noscript"];

/// `textContent`, trimmed.
pub fn text_of(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// What a reader sees of `el`: text in document order, block elements
/// separated, hidden elements skipped, whitespace collapsed.
pub fn visible_text(el: ElementRef) -> String {
    let mut buf = String::new();
    push_visible(el, &mut buf);
    normalize_ws(&buf)
}

fn push_visible(el: ElementRef, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => {
                let name = e.name();
                if HIDDEN_TAGS.contains(&name) {
                    continue;
                }
                let block = BLOCK_TAGS.contains(&name);
                if block { out.push('\n'); }
                if let Some(inner) = ElementRef::wrap(child) {
                    push_visible(inner, out);
                }
                if block { out.push('\n'); }
            }
            _ => {}
        }
    }
}
