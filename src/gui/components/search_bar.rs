// src/gui/components/search_bar.rs
//
// Query box, city picker, search button and status line.

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

const ALL_CITIES: &str = "Todas las ciudades";

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut go = false;

    ui.horizontal(|ui| {
        ui.label("Buscar:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.query_text)
                .hint_text("Puesto, empresa, ciudad…")
                .desired_width(280.0),
        );
        if resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            go = true;
        }

        let cities = &app.state.archive.cities;
        let city_index = &mut app.state.gui.city_index;
        let current = city_index
            .and_then(|i| cities.get(i))
            .map(|c| c.name.as_str())
            .unwrap_or(ALL_CITIES);

        ui.add_enabled_ui(!app.running, |ui| {
            egui::ComboBox::from_id_salt("city_filter")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    ui.selectable_value(city_index, None, ALL_CITIES);
                    for (i, c) in cities.iter().enumerate() {
                        ui.selectable_value(city_index, Some(i), &c.name);
                    }
                });
        });

        let button = ui.add_enabled(
            !app.running,
            egui::Button::new(egui::RichText::new("Buscar").strong()),
        );
        if button.clicked() {
            go = true;
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
        ui.label(app.status_text());
    });

    if go && !app.running {
        logd!("UI: search requested for {:?}", app.state.gui.query_text);
        actions::search(app, ui.ctx());
    }
}
