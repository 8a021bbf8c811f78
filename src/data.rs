// src/data.rs
//
// Plain data shared by every layer.
//
// - Record: one job offer, rebuilt from markup on every search and never
//           mutated afterwards.
// - SearchQuery: what the user asked for, normalized once.
// - Invocation: a query plus the archive base, as read from a hosting page URL.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::sanitize::fold_case;
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub organization: String,
    pub location: String,
    pub posted: String,
    /// Raw inner markup of the scraped description; empty when the block had none.
    pub description_html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    normalized: String,
    city: Option<String>,
}

impl SearchQuery {
    /// Query text is trimmed; matching uses its lowercase form. A blank city
    /// means "all cities".
    pub fn new(raw: &str, city: Option<&str>) -> Self {
        let raw = raw.trim();
        let city = city
            .map(|c| fold_case(c.trim()))
            .filter(|c| !c.is_empty());
        Self { raw: s!(raw), normalized: fold_case(raw), city }
    }

    /// From `q=...&city=...` (leading `?` optional, percent-decoding applied).
    pub fn from_query_string(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let mut q = s!();
        let mut city = s!();
        for (k, v) in url::form_urlencoded::parse(qs.as_bytes()) {
            match k.as_ref() {
                "q" => q = v.into_owned(),
                "city" => city = v.into_owned(),
                _ => {}
            }
        }
        Self::new(&q, Some(&city))
    }

    pub fn raw(&self) -> &str { &self.raw }
    pub fn normalized(&self) -> &str { &self.normalized }
    pub fn city(&self) -> Option<&str> { self.city.as_deref() }

    /// Blank queries never start a search.
    pub fn is_empty(&self) -> bool { self.normalized.is_empty() }

    /// Case-insensitive substring test against a block's visible text.
    pub fn matches(&self, visible_text: &str) -> bool {
        fold_case(visible_text).contains(&self.normalized)
    }
}

/// Query and archive location taken from the URL of the page hosting the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Directory of the hosting page, with trailing `/`.
    pub base: String,
    pub query: SearchQuery,
}

impl Invocation {
    /// `https://host/dir/busqueda.html?q=ingeniero&city=cordoba`
    /// gives base `https://host/dir/` and the query.
    pub fn from_page_url(page_url: &str) -> Result<Self> {
        let mut url = Url::parse(page_url.trim())?;
        let query = SearchQuery::from_query_string(url.query().unwrap_or(""));

        url.set_query(None);
        url.set_fragment(None);
        let dir = {
            let path = url.path();
            match path.rfind('/') {
                Some(i) => s!(&path[..=i]),
                None => s!("/"),
            }
        };
        url.set_path(&dir);

        Ok(Self { base: url.to_string(), query })
    }
}
