// src/gui/actions/search.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    data::{Record, SearchQuery},
    gui::{app::App, progress::GuiProgress},
    scrape,
    view::ResultsState,
};

/// Worker → UI messages. `Done` is always the last one sent.
pub enum SearchEvent {
    Match(Record),
    Done,
}

/// Start a search for the current query box and city combo.
///
/// The walk runs on one worker thread so the window stays responsive; the
/// worker still fetches strictly one page at a time.
pub fn search(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let query = SearchQuery::new(&app.state.gui.query_text, app.state.city_filter());
    app.results = ResultsState::begin(query.clone(), &app.state.archive);

    if query.is_empty() {
        app.status("Idle");
        return;
    }

    let archive = app.state.archive.clone();
    let source = app.source.clone();

    logd!("UI: spawning search worker");

    let (tx, rx) = mpsc::channel::<SearchEvent>();
    let mut prog = GuiProgress::new(app.status.clone(), ctx.clone());
    let wake = ctx.clone();

    thread::spawn(move || {
        let mut sink = |record: Record| {
            // receiver dropped = window closed
            let _ = tx.send(SearchEvent::Match(record));
            wake.request_repaint();
        };
        scrape::run(&query, &archive, &*source, &mut sink, Some(&mut prog));
        let _ = tx.send(SearchEvent::Done);
        wake.request_repaint();
    });

    app.events = Some(rx);
    app.running = true;
    app.status("Buscando…");
}
