// src/gui/app.rs
use std::{
    error::Error,
    sync::{
        mpsc::{Receiver, TryRecvError},
        Arc, Mutex,
    },
};

use eframe::egui;

use crate::{
    config::{options::ArchiveOptions, state::AppState},
    core::net::SharedSource,
    view::{self, CardId, ResultsState, SelectOutcome},
};

use super::actions::SearchEvent;

pub fn run(
    options: eframe::NativeOptions,
    archive: ArchiveOptions,
    source: SharedSource,
) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Búsqueda de ofertas",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new(archive), source)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub results: ResultsState,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // matches streaming in from the worker
    pub events: Option<Receiver<SearchEvent>>,

    // built once at startup, cloned into each worker
    pub source: SharedSource,
}

impl App {
    pub fn new(state: AppState, source: SharedSource) -> Self {
        logf!(
            "Init: base={} cities={} max_pages={}",
            state.archive.base,
            state.archive.cities.len(),
            state.archive.max_pages
        );
        Self {
            state,
            results: ResultsState::prompt(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            events: None,
            source,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Card activation from the list.
    pub fn select(&mut self, id: CardId) {
        if self.results.select(id) == SelectOutcome::Missing {
            loge!("UI: card {} has no record", id.0);
        }
    }

    /// Drain worker messages into the results state.
    fn pump_events(&mut self) {
        let Some(rx) = self.events.as_ref() else { return };

        let mut finished = false;
        loop {
            match rx.try_recv() {
                Ok(SearchEvent::Match(record)) => {
                    self.results.push(record);
                }
                Ok(SearchEvent::Done) => {
                    finished = true;
                    break;
                }
                Err(TryRecvError::Empty) => break,
                // A vanished worker counts as finished; whatever arrived stays.
                Err(TryRecvError::Disconnected) => {
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            self.results.complete();
            self.running = false;
            self.events = None;
            logf!("UI: search settled with {} match(es)", self.results.len());
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_events();
        if self.running {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let screen = view::render(&self.results);

        egui::TopBottomPanel::top("search").show(ctx, |ui| {
            super::components::search_bar::draw(ui, self);
        });

        egui::SidePanel::left("results")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.heading(&screen.title);
                ui.label(&screen.subtitle);
                ui.separator();
                super::components::results_list::draw(ui, self, &screen.list);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::detail_panel::draw(ui, &screen.detail);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::City;
    use crate::core::net::MemorySource;
    use std::time::Duration;

    fn wait_settled(app: &mut App) {
        for _ in 0..500 {
            app.pump_events();
            if !app.running {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("search did not settle");
    }

    #[test]
    fn worker_uses_the_startup_source() {
        let archive = ArchiveOptions {
            base: s!("https://archive.test/"),
            cities: vec![City::new("Mendoza", "mendoza")],
            ..ArchiveOptions::default()
        };
        let memory = MemorySource::new().page(
            "https://archive.test/mendoza/mendoza_p1.html",
            r#"<div class="box_offer"><h2><a>Chef</a></h2><p>Bodega</p></div>"#,
        );
        let source: SharedSource = Arc::new(memory);

        let ctx = egui::Context::default();
        let mut app = App::new(AppState::new(archive), source);
        app.state.gui.query_text = s!("chef");

        super::super::actions::search(&mut app, &ctx);
        assert!(app.running);
        wait_settled(&mut app);

        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results.selected(), Some(CardId(0)));
        assert_eq!(app.results.matches()[0].organization, "Bodega");
    }

    #[test]
    fn blank_query_starts_no_worker() {
        let source: SharedSource = Arc::new(MemorySource::with_fallback("<div class=\"box_offer\"></div>"));
        let ctx = egui::Context::default();
        let mut app = App::new(AppState::default(), source);
        app.state.gui.query_text = s!("   ");

        super::super::actions::search(&mut app, &ctx);
        assert!(!app.running);
        assert!(app.events.is_none());
        assert_eq!(view::render(&app.results).list, view::ListView::Hidden);
    }
}
