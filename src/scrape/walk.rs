// src/scrape/walk.rs
//
// One city, page by page. Every way a page can fail to deliver listings ends
// the walk for that city; nothing here is an error for the caller.

use std::fmt;

use crate::{
    config::options::{ArchiveOptions, City},
    core::net::{FetchError, PageSource},
    data::{Record, SearchQuery},
    progress::Progress,
    specs::offers::{self, Listing},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// No response at all.
    Transport(String),
    /// Non-success status.
    Status(u16),
    /// Page loaded but held no listing blocks.
    NoBlocks,
    /// Every page up to the bound had listings.
    PageLimit,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Transport(e) => write!(f, "unreachable ({e})"),
            StopReason::Status(code) => write!(f, "status {code}"),
            StopReason::NoBlocks => f.write_str("no listings"),
            StopReason::PageLimit => f.write_str("page limit"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageOutcome {
    Listings(Vec<Listing>),
    End(StopReason),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkSummary {
    /// Pages that yielded listings.
    pub pages_read: u32,
    pub matched: usize,
    pub stop: StopReason,
}

/// Fetch and parse one page. No retries.
pub fn fetch_page(source: &dyn PageSource, url: &str) -> PageOutcome {
    let body = match source.fetch(url) {
        Ok(body) => body,
        Err(FetchError::Transport(e)) => return PageOutcome::End(StopReason::Transport(e)),
        Err(FetchError::Status(code)) => return PageOutcome::End(StopReason::Status(code)),
    };
    let listings = offers::parse_page(&body);
    if listings.is_empty() {
        PageOutcome::End(StopReason::NoBlocks)
    } else {
        PageOutcome::Listings(listings)
    }
}

/// Walk `city` from page 1 up to `archive.max_pages`, pushing every listing
/// whose visible text contains the query into `sink`, in page order.
pub fn walk_city(
    source: &dyn PageSource,
    archive: &ArchiveOptions,
    city: &City,
    query: &SearchQuery,
    sink: &mut dyn FnMut(Record),
    mut progress: Option<&mut dyn Progress>,
) -> WalkSummary {
    let mut pages_read = 0u32;
    let mut matched = 0usize;

    for page in 1..=archive.max_pages {
        let url = archive.page_url(city, page);

        let listings = match fetch_page(source, &url) {
            PageOutcome::Listings(l) => l,
            PageOutcome::End(stop) => {
                logd!("Walk: {} stopped at page {page}: {stop} ({url})", city.slug);
                return WalkSummary { pages_read, matched, stop };
            }
        };

        pages_read += 1;
        let total = listings.len();
        for listing in listings {
            if query.matches(&listing.text) {
                matched += 1;
                sink(listing.record);
            }
        }
        logd!("Walk: {} page {page}: {total} listings, {matched} matched so far", city.slug);

        if let Some(p) = progress.as_deref_mut() {
            p.page_done(city, page, matched);
        }
    }

    logf!("Walk: {} hit the {}-page limit", city.slug, archive.max_pages);
    WalkSummary { pages_read, matched, stop: StopReason::PageLimit }
}
