// src/progress.rs
use crate::config::options::City;
use crate::scrape::WalkSummary;

/// Lightweight progress reporting for a running search.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of cities to walk.
    fn begin(&mut self, _cities: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A page was read and filtered. `matched` counts this city so far.
    fn page_done(&mut self, _city: &City, _page: u32, _matched: usize) {}

    /// A city's walk ended.
    fn city_done(&mut self, _city: &City, _summary: &WalkSummary) {}

    /// Called once after the last city, with the total match count.
    fn finish(&mut self, _matched: usize) {}
}

/// Reborrow an optional progress sink for one nested call, leaving the
/// caller's handle usable afterwards.
pub fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    match progress {
        Some(p) => Some(&mut **p),
        None => None,
    }
}
