// src/specs/offers.rs

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{BLOCK_SELECTOR, DEFAULT_TITLE, DESCRIPTION_SELECTOR};
use crate::core::html::{text_of, visible_text};
use crate::data::Record;

static BLOCK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(BLOCK_SELECTOR).expect("invalid selector: block"));
static TITLE_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2 a").expect("invalid selector: title link"));
static HEADING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("invalid selector: heading"));
static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("invalid selector: paragraph"));
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(DESCRIPTION_SELECTOR).expect("invalid selector: description"));

/// One listing block as found on a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    pub record: Record,
    /// Whitespace-collapsed visible text of the whole block; what the query is matched against.
    pub text: String,
}

/// All listing blocks on a page, in document order.
/// An empty vec is the archive's end-of-city signal.
pub fn parse_page(html: &str) -> Vec<Listing> {
    let doc = Html::parse_fragment(html);
    doc.select(&BLOCK)
        .map(|block| Listing { record: extract_block(block), text: visible_text(block) })
        .collect()
}

/// Record from markup holding a single listing. The first `.box_offer` is
/// used when present, otherwise the fragment itself is taken as the block.
pub fn extract(fragment: &str) -> Record {
    let doc = Html::parse_fragment(fragment);
    match doc.select(&BLOCK).next() {
        Some(block) => extract_block(block),
        None => extract_block(doc.root_element()),
    }
}

/// Positional convention: paragraphs 0, 1, 2 are organization, location and
/// posting date. Anything missing is an empty string.
pub fn extract_block(block: ElementRef) -> Record {
    let title = first_text(block, &TITLE_LINK)
        .or_else(|| first_text(block, &HEADING))
        .unwrap_or_else(|| s!(DEFAULT_TITLE));

    let paras: Vec<String> = block
        .select(&PARAGRAPH)
        .map(text_of)
        .filter(|t| !t.is_empty())
        .collect();
    let nth = |i: usize| paras.get(i).cloned().unwrap_or_default();

    let description_html = block
        .select(&DESCRIPTION)
        .next()
        .map(|d| d.inner_html().trim().to_string())
        .unwrap_or_default();

    Record {
        title,
        organization: nth(0),
        location: nth(1),
        posted: nth(2),
        description_html,
    }
}

fn first_text(block: ElementRef, sel: &Selector) -> Option<String> {
    block
        .select(sel)
        .next()
        .map(text_of)
        .filter(|t| !t.is_empty())
}
