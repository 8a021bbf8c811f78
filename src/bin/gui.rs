// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::sync::Arc;

use eframe::egui::ViewportBuilder;
use offer_finder::{
    config::{options::ArchiveOptions, state::GuiState},
    core::net::{self, SharedSource},
    gui, log, loge,
};

/// Config and page source, both checked before the window opens.
fn startup() -> offer_finder::Result<(ArchiveOptions, SharedSource)> {
    // ./offer_finder.toml when present, built-in cities otherwise
    let archive = ArchiveOptions::load_or_default(None)?;
    archive.validate()?;
    let source: SharedSource = Arc::from(net::source_for(&archive.base)?);
    Ok((archive, source))
}

fn main() {
    log::init();

    let (archive, source) = match startup() {
        Ok(s) => s,
        Err(e) => {
            loge!("Config: {e}");
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    let size = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([size.window_w as f32, size.window_h as f32])
            .with_min_inner_size([720.0, 420.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, archive, source) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
