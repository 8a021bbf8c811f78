//! # Listing markup specs
//!
//! This module knows **how archive pages are shaped** and nothing else.
//!
//! ## What lives here
//! - `offers`: finding `.box_offer` blocks in one page fragment and turning each
//!   into a [`Record`](crate::data::Record) plus the block's visible text.
//! - `description`: flattening a record's scraped rich-text body into
//!   bullet/paragraph lines and escaped markup.
//!
//! ## What does **not** live here
//! - Fetching, pagination and stop rules (`scrape::walk`).
//! - Matching against the query and accumulating results (`scrape::search`).
//! - Selection and presentation (`view`).
//!
//! ## Conventions
//! - Missing pieces degrade to empty strings, never to errors. A page with odd
//!   markup yields fewer or emptier records, not a failed search.
//! - Parsing is pure: input is a `&str`, output is owned data. No logging spam.
//! - Fixtures are inline HTML strings so specs stay testable offline.
pub mod description;
pub mod offers;
