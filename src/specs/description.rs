// src/specs/description.rs
//
// Scraped descriptions arrive as a run of <p> elements. Writers mark list
// items by starting a paragraph with "- " or "* ".

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::core::html::text_of;
use crate::core::sanitize::escape_html;

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("invalid selector: paragraph"));

static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*]\s+").expect("invalid regex: bullet marker"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DescLine {
    Bullet(String),
    Paragraph(String),
}

/// Non-empty paragraphs of `markup`, classified. Empty input gives an empty
/// vec; the caller decides what to show instead.
pub fn normalize(markup: &str) -> Vec<DescLine> {
    if markup.trim().is_empty() {
        return Vec::new();
    }
    let doc = Html::parse_fragment(markup);
    doc.select(&PARAGRAPH)
        .map(text_of)
        .filter(|t| !t.is_empty())
        .map(|line| match BULLET.find(&line) {
            Some(m) => DescLine::Bullet(line[m.end()..].to_string()),
            None => DescLine::Paragraph(line),
        })
        .collect()
}

/// Escaped markup for `lines`. Text is always escaped; only the wrapping
/// `<p>` tags are ours.
pub fn to_html(lines: &[DescLine]) -> String {
    let mut out = String::new();
    for line in lines {
        match line {
            DescLine::Bullet(t) => {
                out.push_str(r#"<p style="margin:0 0 8px 0;">• "#);
                out.push_str(&escape_html(t));
                out.push_str("</p>");
            }
            DescLine::Paragraph(t) => {
                out.push_str(r#"<p style="margin:0 0 10px 0;">"#);
                out.push_str(&escape_html(t));
                out.push_str("</p>");
            }
        }
    }
    out
}

pub fn render_html(markup: &str) -> String {
    to_html(&normalize(markup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_and_paragraphs() {
        let lines = normalize("<p>Requisitos:</p><p>- Rust</p><p>*   SQL</p><p>-sin espacio</p><p>  </p>");
        assert_eq!(
            lines,
            vec![
                DescLine::Paragraph(s!("Requisitos:")),
                DescLine::Bullet(s!("Rust")),
                DescLine::Bullet(s!("SQL")),
                DescLine::Paragraph(s!("-sin espacio")),
            ]
        );
    }

    #[test]
    fn empty_input_gives_nothing() {
        assert!(normalize("").is_empty());
        assert!(normalize("<p> </p><p></p>").is_empty());
        assert_eq!(render_html("   "), "");
    }

    #[test]
    fn text_outside_paragraphs_is_ignored() {
        assert!(normalize("<div>suelto</div>").is_empty());
    }

    #[test]
    fn output_is_escaped() {
        let html = render_html("<p>- a &lt;script&gt; &amp; \"b\"</p>");
        assert_eq!(
            html,
            r#"<p style="margin:0 0 8px 0;">• a &lt;script&gt; &amp; &quot;b&quot;</p>"#
        );
        assert!(!html.contains("<script>"));
    }
}
