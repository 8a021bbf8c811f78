// src/gui/components/mod.rs
pub mod detail_panel;
pub mod results_list;
pub mod search_bar;
