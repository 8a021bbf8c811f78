// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{config::options::City, progress::Progress, scrape::WalkSummary};

/// Writes search progress into the shared status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn page_done(&mut self, city: &City, page: u32, matched: usize) {
        self.set_status(format!("{}: página {} ({} coincidencias)", city.name, page, matched));
    }
    fn city_done(&mut self, city: &City, _summary: &WalkSummary) {
        self.done += 1;
        self.set_status(format!("{} listo ({}/{})", city.name, self.done, self.total));
    }
    fn finish(&mut self, matched: usize) {
        self.set_status(format!("Búsqueda completa ({matched})"));
    }
}
