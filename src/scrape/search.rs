// src/scrape/search.rs
use crate::{
    config::options::ArchiveOptions,
    core::net::PageSource,
    data::{Record, SearchQuery},
    progress::{self, Progress},
    view::state::ResultsState,
};

use super::walk::{walk_city, WalkSummary};

/// What a finished search touched.
#[derive(Clone, Debug, Default)]
pub struct SearchReport {
    /// Per walked city, in walk order: (slug, summary).
    pub cities: Vec<(String, WalkSummary)>,
    pub matched: usize,
}

/// Walk the selected cities one after another, feeding matches to `sink`
/// in discovery order (city, then page, then position on the page).
///
/// A blank query, or a city filter naming no configured city, walks nothing.
pub fn run(
    query: &SearchQuery,
    archive: &ArchiveOptions,
    source: &dyn PageSource,
    sink: &mut dyn FnMut(Record),
    mut progress: Option<&mut dyn Progress>,
) -> SearchReport {
    if query.is_empty() {
        logd!("Search: blank query, nothing to walk");
        return SearchReport::default();
    }

    let cities = archive.cities_for(query.city());

    logf!(
        "Search: Begin query={:?} city={:?} cities={}",
        query.raw(),
        query.city(),
        cities.len()
    );
    if cities.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No city matches the filter");
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(cities.len());
    }

    let mut report = SearchReport::default();

    for city in cities {
        let summary = walk_city(source, archive, city, query, sink, progress::reborrow(&mut progress));
        logf!(
            "Search: {} done, pages={} matched={} stop={}",
            city.slug, summary.pages_read, summary.matched, summary.stop
        );
        if let Some(p) = progress.as_deref_mut() {
            p.city_done(city, &summary);
        }
        report.matched += summary.matched;
        report.cities.push((city.slug.clone(), summary));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish(report.matched);
    }
    logf!("Search: Finished matched={}", report.matched);

    report
}

/// Run a search to completion and return the settled results state
/// (first match selected, or the empty state). A blank query gives the
/// prompt state without fetching anything.
pub fn search(
    query: &SearchQuery,
    archive: &ArchiveOptions,
    source: &dyn PageSource,
    progress: Option<&mut dyn Progress>,
) -> ResultsState {
    if query.is_empty() {
        return ResultsState::prompt();
    }
    let mut state = ResultsState::begin(query.clone(), archive);
    run(query, archive, source, &mut |record| { state.push(record); }, progress);
    state.complete();
    state
}
