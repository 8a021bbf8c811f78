// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.

mod search; // src/gui/actions/search.rs

pub use search::{search, SearchEvent};
