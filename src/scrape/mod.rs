// src/scrape/mod.rs
mod search;
mod walk;

pub use search::{run, search, SearchReport};
pub use walk::{fetch_page, walk_city, PageOutcome, StopReason, WalkSummary};
