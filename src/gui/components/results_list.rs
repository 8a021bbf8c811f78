// src/gui/components/results_list.rs
//
// Master list: one clickable row per match. Clicking a row runs the
// selection protocol; rows hold only their CardId.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;
use crate::view::{CardId, ListView};

pub fn draw(ui: &mut egui::Ui, app: &mut App, list: &ListView) {
    let cards = match list {
        ListView::Hidden => {
            ui.weak("Ingresá un término y presioná Buscar.");
            return;
        }
        ListView::Empty(msg) => {
            ui.label(*msg);
            return;
        }
        ListView::Cards(cards) => cards,
    };

    let mut clicked: Option<CardId> = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .column(Column::remainder().at_least(160.0).clip(true))
        .column(Column::initial(110.0).resizable(true).clip(true))
        .body(|body| {
            body.rows(64.0, cards.len(), |mut row| {
                let Some(card) = cards.get(row.index()) else { return };
                row.set_selected(card.selected);

                row.col(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&card.title).strong());
                        ui.label(&card.organization);
                        ui.weak(&card.location);
                    });
                });
                row.col(|ui| {
                    ui.weak(&card.posted);
                });

                if row.response().clicked() {
                    clicked = Some(card.id);
                }
            });
        });

    if let Some(id) = clicked {
        app.select(id);
    }
}
