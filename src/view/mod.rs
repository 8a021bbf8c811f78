// src/view/mod.rs
//
// Results state and its presentation.
//
// - state:  matches + selection, the only thing frontends mutate.
// - render: pure state → Screen mapping.
// - html:   Screen → escaped markup (static results page).

pub mod html;
pub mod render;
pub mod state;

pub use render::{render, CardView, Description, DetailView, ListView, OfferDetail, Screen};
pub use state::{CardId, Phase, ResultsState, SelectOutcome, Selection};
